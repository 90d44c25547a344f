//! Property sale representation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single sale entered in the Property Price Register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Date of sale.
    pub sale_date: NaiveDate,
    /// Postal address as entered by the filer.
    pub address: String,
    /// County name as it appears in the register (e.g. "Carlow").
    pub county: String,
    /// Eircode, when one was supplied.
    pub eircode: Option<String>,
    /// Price in euro with currency symbol and separators removed.
    pub price: f64,
    /// Whether the sale was not at full market price.
    ///
    /// `None` when the register held neither "Yes" nor "No".
    pub not_full_market_price: Option<bool>,
    /// Whether the price excludes VAT.
    ///
    /// `None` when the register held neither "Yes" nor "No".
    pub vat_exclusive: Option<bool>,
    /// Description of property (e.g. "Second-Hand Dwelling house /Apartment").
    pub description: String,
    /// Property size band, only present for some new dwellings.
    pub size_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record {
            sale_date: NaiveDate::from_ymd_opt(2011, 6, 2).unwrap(),
            address: "Bohermore, Bagenalstown".to_string(),
            county: "Carlow".to_string(),
            eircode: None,
            price: 235_000.0,
            not_full_market_price: Some(false),
            vat_exclusive: Some(true),
            description: "Second-Hand Dwelling house /Apartment".to_string(),
            size_description: None,
        }
    }

    #[test]
    fn test_serialize_absent_fields_as_null() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"sale_date\":\"2011-06-02\""));
        assert!(json.contains("\"eircode\":null"));
    }

    #[test]
    fn test_unknown_flags_survive_json() {
        let mut record = sample();
        record.not_full_market_price = None;
        record.vat_exclusive = None;

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"not_full_market_price\":null"));
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
