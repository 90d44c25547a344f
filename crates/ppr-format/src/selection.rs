//! Row selection by date, price and county.

use ppr_types::{Filter, Table};
use tracing::debug;

/// Returns the rows of `table` that satisfy every criterion in `criteria`.
///
/// Date and price bounds are inclusive, counties are matched ignoring case,
/// and unset criteria impose no constraint. Rows keep their relative order
/// and are reindexed from zero; `table` itself is not modified.
///
/// # Example
///
/// ```
/// use ppr_format::{filter, parse};
/// use ppr_types::Filter;
///
/// let csv = "Date of Sale (dd/mm/yyyy),Address,County,Eircode,Price (€),Not Full Market Price,VAT Exclusive,Description of Property,Property Size Description\n\
///            01/06/2011,1 Main St,Carlow,,\"€230,000.00\",No,No,Second-Hand Dwelling house /Apartment,\n\
///            02/06/2011,2 Main St,Carlow,,\"€48,000.00\",No,No,Second-Hand Dwelling house /Apartment,\n";
/// let table = parse(csv).unwrap();
///
/// let dear = filter(&table, &Filter::new().with_min_price(90_000.0));
/// assert_eq!(dear.len(), 1);
/// assert_eq!(dear.get(0).unwrap().address, "1 Main St");
/// ```
#[must_use]
pub fn filter(table: &Table, criteria: &Filter) -> Table {
    if criteria.is_unbounded() {
        return table.clone();
    }

    let selected = table.select(|record| criteria.matches(record));
    debug!(
        kept = selected.len(),
        total = table.len(),
        %criteria,
        "filtered register"
    );
    selected
}
