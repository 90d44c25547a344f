//! JSON output format.

use ppr_types::Table;
use std::io::Write;

use crate::{FormatError, Formatter};

/// Writes a table as one JSON array or as one JSON object per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    lines: bool,
    pretty: bool,
}

impl JsonFormatter {
    /// Array output on a single line.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: false,
            pretty: false,
        }
    }

    /// Newline-delimited output, one record per line.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            lines: true,
            pretty: false,
        }
    }

    /// Indents array output. Ignored for NDJSON.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Returns true for newline-delimited output.
    #[must_use]
    pub const fn is_ndjson(&self) -> bool {
        self.lines
    }
}

impl Formatter for JsonFormatter {
    fn write_table<W: Write>(&self, table: &Table, mut writer: W) -> Result<(), FormatError> {
        if self.lines {
            for record in table {
                serde_json::to_writer(&mut writer, record)?;
                writer.write_all(b"\n")?;
            }
        } else if self.pretty {
            serde_json::to_writer_pretty(&mut writer, table)?;
            writer.write_all(b"\n")?;
        } else {
            serde_json::to_writer(&mut writer, table)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }

    fn extension(&self) -> &str {
        if self.lines { "ndjson" } else { "json" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use std::io::Cursor;

    const SAMPLE: &str = include_str!("../testdata/carlow_2011_06.csv");

    fn write(formatter: JsonFormatter) -> String {
        let table = parse(SAMPLE).unwrap();
        let mut output = Cursor::new(Vec::new());
        formatter.write_table(&table, &mut output).unwrap();
        String::from_utf8(output.into_inner()).unwrap()
    }

    #[test]
    fn test_array_reads_back_as_table() {
        let result = write(JsonFormatter::new());
        assert!(result.starts_with('['));
        assert!(result.contains("\"price\":230000.0"));
        assert!(result.contains("\"sale_date\":\"2011-06-01\""));

        let table: Table = serde_json::from_str(&result).unwrap();
        assert_eq!(table, parse(SAMPLE).unwrap());
    }

    #[test]
    fn test_ndjson_one_record_per_line() {
        let result = write(JsonFormatter::ndjson());
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|line| line.starts_with('{')));
    }

    #[test]
    fn test_pretty_only_affects_arrays() {
        let pretty = write(JsonFormatter::new().with_pretty(true));
        assert!(pretty.lines().count() > 5);
        assert!(pretty.contains("\n  {"));

        let ndjson = write(JsonFormatter::ndjson().with_pretty(true));
        assert_eq!(ndjson.lines().count(), 5);
    }

    #[test]
    fn test_extension() {
        assert_eq!(JsonFormatter::new().extension(), "json");
        assert!(JsonFormatter::ndjson().is_ndjson());
        assert_eq!(JsonFormatter::ndjson().extension(), "ndjson");
    }
}
