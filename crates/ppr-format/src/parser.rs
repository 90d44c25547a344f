//! Register CSV parsing.

use ::csv::{ReaderBuilder, StringRecord};
use chrono::NaiveDate;
use ppr_types::{ParseError, Record, Table};
use tracing::debug;

use crate::columns;

/// Date format used by the register.
const DATE_FORMAT: &str = "%d/%m/%Y";

/// How `Yes`/`No` columns treat any other value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlagMode {
    /// Unrecognised values become `None`.
    #[default]
    Lenient,
    /// Unrecognised values are a [`ParseError::InvalidFlag`].
    Strict,
}

/// Parser for register CSV text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    flags: FlagMode,
}

impl Parser {
    /// Creates a parser with lenient `Yes`/`No` handling.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            flags: FlagMode::Lenient,
        }
    }

    /// Creates a parser that rejects anything but `Yes`/`No` in flag columns.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            flags: FlagMode::Strict,
        }
    }

    /// Sets how flag columns are handled.
    #[must_use]
    pub const fn with_flag_mode(mut self, flags: FlagMode) -> Self {
        self.flags = flags;
        self
    }

    /// Returns the flag handling mode.
    #[must_use]
    pub const fn flag_mode(&self) -> FlagMode {
        self.flags
    }

    /// Parses register CSV text into a table.
    ///
    /// The first line must be a header naming every column in
    /// [`columns::ALL`]; other columns are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if a column is missing, the CSV is malformed, or a
    /// date or price cannot be parsed. In [`FlagMode::Strict`], an
    /// unrecognised flag value is also an error.
    pub fn parse(&self, raw: &str) -> Result<Table, ParseError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(raw.as_bytes());

        let headers = reader.headers().map_err(csv_error)?;
        let index = ColumnIndex::locate(headers)?;

        let mut records = Vec::new();
        for (row, result) in reader.records().enumerate() {
            let row_data = result.map_err(csv_error)?;
            let line = row_data
                .position()
                .map_or(row as u64 + 2, ::csv::Position::line);
            records.push(self.parse_row(&row_data, &index, line)?);
        }

        debug!(rows = records.len(), "parsed register CSV");
        Ok(Table::new(records))
    }

    fn parse_row(
        &self,
        row: &StringRecord,
        index: &ColumnIndex,
        line: u64,
    ) -> Result<Record, ParseError> {
        let cell = move |i: usize| row.get(i).unwrap_or("");

        let raw_date = cell(index.date);
        let sale_date = NaiveDate::parse_from_str(raw_date.trim(), DATE_FORMAT).map_err(|_| {
            ParseError::InvalidDate {
                line,
                value: raw_date.to_string(),
            }
        })?;

        let raw_price = cell(index.price);
        let price = parse_price(raw_price).ok_or_else(|| ParseError::InvalidPrice {
            line,
            value: raw_price.to_string(),
        })?;

        Ok(Record {
            sale_date,
            address: cell(index.address).to_string(),
            county: cell(index.county).to_string(),
            eircode: optional(cell(index.eircode)),
            price,
            not_full_market_price: self.flag(
                cell(index.not_full_market_price),
                columns::NOT_FULL_MARKET_PRICE,
                line,
            )?,
            vat_exclusive: self.flag(cell(index.vat_exclusive), columns::VAT_EXCLUSIVE, line)?,
            description: cell(index.description).to_string(),
            size_description: optional(cell(index.size_description)),
        })
    }

    fn flag(&self, value: &str, column: &str, line: u64) -> Result<Option<bool>, ParseError> {
        match (parse_flag(value), self.flags) {
            (None, FlagMode::Strict) => Err(ParseError::InvalidFlag {
                line,
                column: column.to_string(),
                value: value.to_string(),
            }),
            (flag, _) => Ok(flag),
        }
    }
}

/// Parses register CSV text with lenient flag handling.
///
/// # Errors
///
/// See [`Parser::parse`].
pub fn parse(raw: &str) -> Result<Table, ParseError> {
    Parser::new().parse(raw)
}

/// Positions of the register columns within a header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    date: usize,
    address: usize,
    county: usize,
    eircode: usize,
    price: usize,
    not_full_market_price: usize,
    vat_exclusive: usize,
    description: usize,
    size_description: usize,
}

impl ColumnIndex {
    fn locate(headers: &StringRecord) -> Result<Self, ParseError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| ParseError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            date: find(columns::DATE)?,
            address: find(columns::ADDRESS)?,
            county: find(columns::COUNTY)?,
            eircode: find(columns::EIRCODE)?,
            price: find(columns::PRICE)?,
            not_full_market_price: find(columns::NOT_FULL_MARKET_PRICE)?,
            vat_exclusive: find(columns::VAT_EXCLUSIVE)?,
            description: find(columns::DESCRIPTION)?,
            size_description: find(columns::SIZE_DESCRIPTION)?,
        })
    }
}

/// Strips `€` and `,` then parses the remainder.
///
/// Returns `None` for non-numeric residue, NaN, infinities and negatives.
fn parse_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| !matches!(c, '€' | ',')).collect();
    let value: f64 = cleaned.trim().parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// Maps exactly `Yes` and `No`; anything else is unknown.
fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "Yes" => Some(true),
        "No" => Some(false),
        _ => None,
    }
}

fn optional(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn csv_error(err: ::csv::Error) -> ParseError {
    ParseError::Csv(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SAMPLE: &str = include_str!("../testdata/carlow_2011_06.csv");

    const HEADER: &str = "Date of Sale (dd/mm/yyyy),Address,County,Eircode,Price (€),Not Full Market Price,VAT Exclusive,Description of Property,Property Size Description";

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2011, 6, day).unwrap()
    }

    #[test]
    fn test_parse_sample() {
        let table = parse(SAMPLE).unwrap();
        assert_eq!(table.len(), 5);

        let dates: Vec<_> = table.iter().map(|r| r.sale_date).collect();
        assert_eq!(dates, vec![date(1), date(2), date(2), date(2), date(3)]);

        let addresses: Vec<_> = table.iter().map(|r| r.address.as_str()).collect();
        assert_eq!(
            addresses,
            vec![
                "33 BROWNSHILL WOOD, CARLOW",
                "60 DUBLIN ROAD, TULLOW",
                "Bohermore, Bagenalstown",
                "Cherry Trees, Castlemore, Tullow",
                "19 Old Burrin, Burrin Road, Carlow",
            ]
        );

        let prices: Vec<_> = table.iter().map(|r| r.price).collect();
        assert_eq!(
            prices,
            vec![230_000.0, 48_000.0, 235_000.0, 90_000.0, 145_000.0]
        );

        let not_full: Vec<_> = table.iter().map(|r| r.not_full_market_price).collect();
        assert_eq!(
            not_full,
            vec![Some(false), Some(false), Some(false), Some(true), Some(true)]
        );

        let vat: Vec<_> = table.iter().map(|r| r.vat_exclusive).collect();
        assert_eq!(
            vat,
            vec![Some(false), Some(false), Some(true), Some(false), Some(false)]
        );

        for record in &table {
            assert_eq!(record.county, "Carlow");
            assert_eq!(record.eircode, None);
            assert_eq!(record.size_description, None);
            assert_eq!(record.description, "Second-Hand Dwelling house /Apartment");
        }
    }

    #[test]
    fn test_parse_is_deterministic() {
        assert_eq!(parse(SAMPLE).unwrap(), parse(SAMPLE).unwrap());
    }

    #[test]
    fn test_price_matches_stripped_source() {
        let table = parse(SAMPLE).unwrap();
        let mut reader = ReaderBuilder::new().from_reader(SAMPLE.as_bytes());
        for (record, row) in table.iter().zip(reader.records()) {
            let row = row.unwrap();
            let stripped = row[4].replace(['€', ','], "");
            assert!(record.price >= 0.0);
            assert_eq!(format!("{:.2}", record.price), stripped);
        }
    }

    #[test]
    fn test_columns_selected_by_name() {
        let raw = "Extra,Property Size Description,Description of Property,VAT Exclusive,Not Full Market Price,Price (€),Eircode,County,Address,Date of Sale (dd/mm/yyyy)\n\
                   x,greater than or equal to 38 sq metres and less than 125 sq metres,New Dwelling house /Apartment,Yes,No,\"€1,234,567.89\",R93 X2Y4,Carlow,1 Main St,15/03/2014\n";
        let table = parse(raw).unwrap();
        let record = table.get(0).unwrap();

        assert_eq!(record.sale_date, NaiveDate::from_ymd_opt(2014, 3, 15).unwrap());
        assert_eq!(record.eircode.as_deref(), Some("R93 X2Y4"));
        assert_relative_eq!(record.price, 1_234_567.89);
        assert_eq!(record.vat_exclusive, Some(true));
        assert_eq!(
            record.size_description.as_deref(),
            Some("greater than or equal to 38 sq metres and less than 125 sq metres")
        );
    }

    #[test]
    fn test_missing_column() {
        let raw = "Date of Sale (dd/mm/yyyy),Address,County\n01/06/2011,a,Carlow\n";
        assert_eq!(
            parse(raw).unwrap_err(),
            ParseError::MissingColumn("Eircode".to_string())
        );
    }

    #[test]
    fn test_invalid_date() {
        let raw = format!(
            "{HEADER}\n01/06/2011,a,Carlow,,\"€1.00\",No,No,d,\n2011-06-02,b,Carlow,,\"€1.00\",No,No,d,\n"
        );
        assert_eq!(
            parse(&raw).unwrap_err(),
            ParseError::InvalidDate {
                line: 3,
                value: "2011-06-02".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_price() {
        let raw = format!("{HEADER}\n01/06/2011,a,Carlow,,€1.0x,No,No,d,\n");
        assert!(matches!(
            parse(&raw).unwrap_err(),
            ParseError::InvalidPrice { line: 2, .. }
        ));

        let raw = format!("{HEADER}\n01/06/2011,a,Carlow,,-5,No,No,d,\n");
        assert!(matches!(
            parse(&raw).unwrap_err(),
            ParseError::InvalidPrice { .. }
        ));
    }

    #[test]
    fn test_unknown_flag_lenient_and_strict() {
        let raw = format!("{HEADER}\n01/06/2011,a,Carlow,,€1.00,yes,,d,\n");

        let table = parse(&raw).unwrap();
        let record = table.get(0).unwrap();
        assert_eq!(record.not_full_market_price, None);
        assert_eq!(record.vat_exclusive, None);

        let err = Parser::strict().parse(&raw).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidFlag {
                line: 2,
                column: columns::NOT_FULL_MARKET_PRICE.to_string(),
                value: "yes".to_string()
            }
        );
    }

    #[test]
    fn test_header_only() {
        let table = parse(&format!("{HEADER}\n")).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("€230,000.00"), Some(230_000.0));
        assert_eq!(parse_price("1000"), Some(1000.0));
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("€"), None);
        assert_eq!(parse_price("NaN"), None);
        assert_eq!(parse_price("-1"), None);
    }

    #[test]
    fn test_flag_mode() {
        assert_eq!(Parser::new().flag_mode(), FlagMode::Lenient);
        assert_eq!(
            Parser::new().with_flag_mode(FlagMode::Strict).flag_mode(),
            FlagMode::Strict
        );
    }
}
