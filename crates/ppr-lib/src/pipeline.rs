//! Fetch, parse and filter composed into single calls.

use ppr_fetch::PprClient;
use ppr_format::Parser;
use ppr_types::{County, Filter, Result, Table};
use tracing::info;

/// Downloads the whole register and returns the rows matching `filter`.
///
/// Uses a default [`PprClient`] and lenient flag parsing.
///
/// # Errors
///
/// Returns an error if the filter is contradictory, the download fails,
/// or the CSV cannot be parsed.
pub fn get(filter: &Filter) -> Result<Table> {
    let client = PprClient::with_defaults()?;
    get_with(&client, &Parser::new(), filter)
}

/// Downloads the whole register with the given client and parser.
///
/// The filter is validated before anything is downloaded.
///
/// # Errors
///
/// See [`get`].
pub fn get_with(client: &PprClient, parser: &Parser, filter: &Filter) -> Result<Table> {
    filter.validate()?;
    let raw = client.fetch_all()?;
    process(parser, &raw, filter)
}

/// Downloads one county's sales for one month and applies `filter`.
///
/// The county is checked against the register's counties before
/// downloading.
///
/// # Errors
///
/// Returns an error for an unknown county, a month outside 1..=12, a
/// contradictory filter, a failed download or unparseable CSV.
pub fn get_month(
    client: &PprClient,
    parser: &Parser,
    county: &str,
    year: i32,
    month: u32,
    filter: &Filter,
) -> Result<Table> {
    let county: County = county.parse()?;
    filter.validate()?;
    let raw = client.fetch_one(county.name(), year, month)?;
    process(parser, &raw, filter)
}

/// Parses already-downloaded register text and applies `filter`.
///
/// # Errors
///
/// Returns an error if the filter is contradictory or the CSV cannot be
/// parsed.
pub fn process(parser: &Parser, raw: &str, filter: &Filter) -> Result<Table> {
    filter.validate()?;
    let table = parser.parse(raw)?;
    let selected = ppr_format::filter(&table, filter);
    info!(rows = table.len(), kept = selected.len(), "register processed");
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ppr_fetch::ClientConfig;
    use ppr_types::{FilterError, ParseError, PprError};

    const CSV: &str = "Date of Sale (dd/mm/yyyy),Address,County,Eircode,Price (€),Not Full Market Price,VAT Exclusive,Description of Property,Property Size Description\n\
                       01/06/2011,1 Main St,Carlow,,\"€230,000.00\",No,No,Second-Hand Dwelling house /Apartment,\n\
                       02/06/2011,2 Main St,Kilkenny,,\"€48,000.00\",No,No,Second-Hand Dwelling house /Apartment,\n\
                       03/06/2011,3 Main St,Laois,,\"€145,000.00\",Maybe,No,Second-Hand Dwelling house /Apartment,\n";

    fn offline_client() -> PprClient {
        PprClient::new(ClientConfig {
            all_url: "http://127.0.0.1:9/all.zip".to_string(),
            month_url_template: "http://127.0.0.1:9/{county}/{year}/{month}".to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_process_applies_filter() {
        let filter = Filter::new().with_counties(["carlow", "LAOIS"]);
        let table = process(&Parser::new(), CSV, &filter).unwrap();

        let counties: Vec<_> = table.iter().map(|r| r.county.as_str()).collect();
        assert_eq!(counties, vec!["Carlow", "Laois"]);
        assert_eq!(table.get(1).unwrap().not_full_market_price, None);
    }

    #[test]
    fn test_process_strict_rejects_unknown_flag() {
        let err = process(&Parser::strict(), CSV, &Filter::new()).unwrap_err();
        assert!(matches!(
            err,
            PprError::Parse(ParseError::InvalidFlag { line: 4, .. })
        ));
    }

    #[test]
    fn test_invalid_filter_fails_before_download() {
        let filter = Filter::new()
            .with_min_date(NaiveDate::from_ymd_opt(2020, 1, 2).unwrap())
            .with_max_date(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        let err = get_with(&offline_client(), &Parser::new(), &filter).unwrap_err();
        assert!(matches!(
            err,
            PprError::Filter(FilterError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_unknown_county_fails_before_download() {
        let err = get_month(
            &offline_client(),
            &Parser::new(),
            "Atlantis",
            2011,
            6,
            &Filter::new(),
        )
        .unwrap_err();
        assert!(matches!(err, PprError::UnknownCounty(name) if name == "Atlantis"));
    }

    #[test]
    fn test_invalid_month_fails_before_download() {
        let err = get_month(
            &offline_client(),
            &Parser::new(),
            "carlow",
            2011,
            0,
            &Filter::new(),
        )
        .unwrap_err();
        assert!(matches!(err, PprError::InvalidMonth(0)));
    }
}
