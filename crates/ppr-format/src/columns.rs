//! Register column headers.
//!
//! Columns are selected by name, so their order in the file does not matter
//! and any other columns are ignored.

/// Date of sale, `dd/mm/yyyy`.
pub const DATE: &str = "Date of Sale (dd/mm/yyyy)";
/// Postal address.
pub const ADDRESS: &str = "Address";
/// County name.
pub const COUNTY: &str = "County";
/// Eircode, often empty.
pub const EIRCODE: &str = "Eircode";
/// Price with euro symbol and thousands separators, e.g. `€230,000.00`.
pub const PRICE: &str = "Price (€)";
/// `Yes` / `No`.
pub const NOT_FULL_MARKET_PRICE: &str = "Not Full Market Price";
/// `Yes` / `No`.
pub const VAT_EXCLUSIVE: &str = "VAT Exclusive";
/// Description of property.
pub const DESCRIPTION: &str = "Description of Property";
/// Property size band, often empty.
pub const SIZE_DESCRIPTION: &str = "Property Size Description";

/// All columns read from the register, in publication order.
pub const ALL: [&str; 9] = [
    DATE,
    ADDRESS,
    COUNTY,
    EIRCODE,
    PRICE,
    NOT_FULL_MARKET_PRICE,
    VAT_EXCLUSIVE,
    DESCRIPTION,
    SIZE_DESCRIPTION,
];
