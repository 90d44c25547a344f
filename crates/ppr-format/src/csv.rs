//! CSV output format.

use ppr_types::{Record, Table};
use std::io::Write;

use crate::{FormatError, Formatter, columns};

/// CSV formatter.
///
/// Rows are written with the register's own column headers, dates as
/// `dd/mm/yyyy` and prices to two decimals without currency symbol, so the
/// output can be read back with [`parse()`](crate::parse()).
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: u8,
    /// Whether to include header row.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: b',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: b'\t',
            include_header: true,
        }
    }
}

fn flag(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "Yes",
        Some(false) => "No",
        None => "",
    }
}

fn row(record: &Record) -> [String; 9] {
    [
        record.sale_date.format("%d/%m/%Y").to_string(),
        record.address.clone(),
        record.county.clone(),
        record.eircode.clone().unwrap_or_default(),
        format!("{:.2}", record.price),
        flag(record.not_full_market_price).to_string(),
        flag(record.vat_exclusive).to_string(),
        record.description.clone(),
        record.size_description.clone().unwrap_or_default(),
    ]
}

impl Formatter for CsvFormatter {
    fn write_table<W: Write>(&self, table: &Table, writer: W) -> Result<(), FormatError> {
        let mut out = ::csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(writer);

        if self.include_header {
            out.write_record(columns::ALL)?;
        }

        for record in table {
            out.write_record(row(record))?;
        }

        out.flush()?;
        Ok(())
    }

    fn extension(&self) -> &str {
        if self.delimiter == b'\t' { "tsv" } else { "csv" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use std::io::Cursor;

    const SAMPLE: &str = include_str!("../testdata/carlow_2011_06.csv");

    fn write(formatter: &CsvFormatter, table: &Table) -> String {
        let mut output = Cursor::new(Vec::new());
        formatter.write_table(table, &mut output).unwrap();
        String::from_utf8(output.into_inner()).unwrap()
    }

    #[test]
    fn test_csv_rows() {
        let table = parse(SAMPLE).unwrap();
        let result = write(&CsvFormatter::new(), &table);

        assert!(result.starts_with("Date of Sale (dd/mm/yyyy),Address,County,"));
        assert!(result.contains("01/06/2011,\"33 BROWNSHILL WOOD, CARLOW\",Carlow,,230000.00,No,No,"));
        assert_eq!(result.lines().count(), 6);
    }

    #[test]
    fn test_csv_reads_back() {
        let table = parse(SAMPLE).unwrap();
        let result = write(&CsvFormatter::new(), &table);
        assert_eq!(parse(&result).unwrap(), table);
    }

    #[test]
    fn test_csv_no_header() {
        let table = parse(SAMPLE).unwrap();
        let result = write(&CsvFormatter::new().with_header(false), &table);
        assert!(!result.contains("Date of Sale"));
        assert_eq!(result.lines().count(), 5);
    }

    #[test]
    fn test_tsv() {
        let table = parse(SAMPLE).unwrap();
        let formatter = CsvFormatter::tsv();
        let result = write(&formatter, &table);

        assert!(result.starts_with("Date of Sale (dd/mm/yyyy)\tAddress\tCounty"));
        assert_eq!(formatter.extension(), "tsv");
    }
}
