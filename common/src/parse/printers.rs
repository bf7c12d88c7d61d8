//! Printer enumeration parsing.
//!
//! `enumprinters` output is a flat sequence of `key:[value]` lines with no
//! explicit record delimiter. The `flags` key marks the start of a record
//! and the `comment` key marks its end; everything in between accumulates.
//! [`PrinterAccumulator`] makes that boundary rule an explicit transition
//! instead of a side effect buried in the loop.

use crate::error::ParseError;
use crate::record::PrinterRecord;
use log::debug;
use std::collections::BTreeMap;

/// Sentinel key that may only open a fresh record.
const RECORD_START_KEY: &str = "flags";

/// Key whose appearance finalizes the current record.
const RECORD_END_KEY: &str = "comment";

/// Parse the raw output of a printer enumeration query.
///
/// Blank lines are skipped; every other line must have the shape
/// `key:[value]`. Records are emitted in encounter order.
///
/// # Errors
///
/// Returns [`ParseError::MalformedLine`] for a line without a colon or a
/// bracket-delimited value, [`ParseError::UnexpectedRecordStart`] when
/// `flags` appears mid-record, and [`ParseError::MissingField`] when a
/// record ends without the fields a [`PrinterRecord`] is derived from.
///
/// # Examples
///
/// ```
/// use spoolmig_common::parse::parse_printers;
///
/// let output = "\tflags:[0x800000]\n\
///               \tname:[\\\\srv\\Accounts Laser]\n\
///               \tdescription:[\\\\srv\\Accounts Laser,HP LaserJet 4,Floor 2]\n\
///               \tcomment:[]\n";
/// let printers = parse_printers(output, "srv")?;
/// assert_eq!(printers.len(), 1);
/// assert_eq!(printers[0].name, "Accounts Laser");
/// assert_eq!(printers[0].driver_name, "HP LaserJet 4");
/// # Ok::<(), spoolmig_common::error::ParseError>(())
/// ```
pub fn parse_printers(output: &str, source_host: &str) -> Result<Vec<PrinterRecord>, ParseError> {
    let mut accumulator = PrinterAccumulator::default();
    let mut printers = Vec::new();

    for line in output.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let (key, value) = split_line(line)?;
        if let Some(record) = accumulator.observe(key, value, source_host)? {
            printers.push(record);
        }
    }

    debug!("parsed {} printer record(s)", printers.len());
    Ok(printers)
}

/// Split a `key:[value]` line on its first colon and strip the bracket
/// delimiters. The value may be empty (`comment:[]` is common).
fn split_line(line: &str) -> Result<(&str, &str), ParseError> {
    let malformed = || ParseError::MalformedLine {
        line: line.to_owned(),
    };
    let (key, rest) = line.split_once(':').ok_or_else(malformed)?;
    let value = rest
        .strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
        .ok_or_else(malformed)?;
    Ok((key, value))
}

/// Key/value accumulator for one in-flight printer record.
///
/// Later occurrences of a key overwrite earlier ones; the record is built
/// only at finalization, which [`observe`](Self::observe) triggers on the
/// `comment` key.
#[derive(Debug, Default)]
pub struct PrinterAccumulator {
    values: BTreeMap<String, String>,
}

impl PrinterAccumulator {
    /// Feed one key/value pair. Returns the finished record when `key`
    /// closes the current one.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnexpectedRecordStart`] when a `flags` key
    /// arrives while fields are pending, and propagates finalization
    /// failures.
    pub fn observe(
        &mut self,
        key: &str,
        value: &str,
        source_host: &str,
    ) -> Result<Option<PrinterRecord>, ParseError> {
        if key == RECORD_START_KEY && !self.values.is_empty() {
            return Err(ParseError::UnexpectedRecordStart {
                key: key.to_owned(),
                pending: self.values.len(),
            });
        }

        self.values.insert(key.to_owned(), value.to_owned());

        if key == RECORD_END_KEY {
            return Ok(Some(self.finalize(source_host)?));
        }
        Ok(None)
    }

    /// Build the accumulated record and reset for the next one.
    fn finalize(&mut self, source_host: &str) -> Result<PrinterRecord, ParseError> {
        let values = std::mem::take(&mut self.values);

        let path = values
            .get("name")
            .ok_or(ParseError::MissingField { field: "name" })?;
        let description = values
            .get("description")
            .ok_or(ParseError::MissingField {
                field: "description",
            })?;
        let driver_name = description
            .split(',')
            .nth(1)
            .ok_or(ParseError::MissingField {
                field: "description driver name",
            })?;
        let name = path.rsplit('\\').next().unwrap_or(path);
        let comment = values.get(RECORD_END_KEY).cloned().unwrap_or_default();

        Ok(PrinterRecord {
            path: path.clone(),
            name: name.to_owned(),
            driver_name: driver_name.to_owned(),
            comment,
            source_host: source_host.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TWO_PRINTERS: &str = "\
\tflags:[0x800000]
\tname:[\\\\srv\\Accounts Laser]
\tdescription:[\\\\srv\\Accounts Laser,HP LaserJet 4,2nd floor]
\tcomment:[Accounts department]

\tflags:[0x800000]
\tname:[\\\\srv\\Lobby Inkjet]
\tdescription:[\\\\srv\\Lobby Inkjet,Epson Stylus,Lobby]
\tcomment:[]
";

    #[test]
    fn parses_two_records_in_order() {
        let printers = parse_printers(TWO_PRINTERS, "srv").expect("valid output");
        assert_eq!(printers.len(), 2);
        assert_eq!(printers[0].name, "Accounts Laser");
        assert_eq!(printers[0].driver_name, "HP LaserJet 4");
        assert_eq!(printers[0].comment, "Accounts department");
        assert_eq!(printers[1].name, "Lobby Inkjet");
        assert_eq!(printers[1].driver_name, "Epson Stylus");
        assert_eq!(printers[1].comment, "");
    }

    #[test]
    fn name_is_last_backslash_segment_of_path() {
        let printers = parse_printers(TWO_PRINTERS, "srv").expect("valid output");
        for printer in &printers {
            let expected = printer.path.rsplit('\\').next().unwrap_or_default();
            assert_eq!(printer.name, expected);
        }
    }

    #[rstest]
    #[case::no_colon("flags 0x800000")]
    #[case::no_opening_bracket("flags:0x800000]")]
    #[case::no_closing_bracket("flags:[0x800000")]
    fn rejects_malformed_lines(#[case] line: &str) {
        let result = parse_printers(line, "srv");
        assert!(matches!(result, Err(ParseError::MalformedLine { .. })));
    }

    #[test]
    fn flags_mid_record_is_fatal() {
        let output = "\tflags:[0x800000]\n\tname:[\\\\srv\\P1]\n\tflags:[0x800000]\n";
        let result = parse_printers(output, "srv");
        assert!(matches!(
            result,
            Err(ParseError::UnexpectedRecordStart { pending, .. }) if pending == 2
        ));
    }

    #[test]
    fn comment_without_name_is_missing_field() {
        let output = "\tflags:[0x800000]\n\tcomment:[orphan]\n";
        let result = parse_printers(output, "srv");
        assert!(matches!(
            result,
            Err(ParseError::MissingField { field: "name" })
        ));
    }

    #[test]
    fn description_without_driver_token_is_missing_field() {
        let output = "\tflags:[0]\n\tname:[\\\\srv\\P1]\n\tdescription:[no commas]\n\tcomment:[]\n";
        let result = parse_printers(output, "srv");
        assert!(matches!(result, Err(ParseError::MissingField { .. })));
    }

    #[test]
    fn later_key_occurrence_overwrites_earlier() {
        let output = "\tflags:[0]\n\tname:[\\\\srv\\Old]\n\tname:[\\\\srv\\New]\n\
                      \tdescription:[\\\\srv\\New,Driver X,]\n\tcomment:[]\n";
        let printers = parse_printers(output, "srv").expect("valid output");
        assert_eq!(printers.len(), 1);
        assert_eq!(printers[0].name, "New");
    }

    #[test]
    fn trailing_partial_record_is_dropped() {
        // Output ending without a comment line never finalizes the last
        // accumulator, matching the historical behavior.
        let output = "\tflags:[0]\n\tname:[\\\\srv\\P1]\n";
        let printers = parse_printers(output, "srv").expect("valid output");
        assert!(printers.is_empty());
    }

    #[test]
    fn records_carry_the_source_host() {
        let printers = parse_printers(TWO_PRINTERS, "printsrv01").expect("valid output");
        assert!(printers.iter().all(|p| p.source_host == "printsrv01"));
    }
}
