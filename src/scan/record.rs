use csv::StringRecord;
use std::fmt;

/// One parsed row, numbered from 1 in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub line_number: u64,
    pub fields: Vec<String>,
}

impl Record {
    /// Copy the fields out of `record`. A `\r` left over from a CRLF line ending is
    /// dropped from the last field.
    pub fn from_csv(line_number: u64, record: &StringRecord) -> Self {
        let mut fields: Vec<String> = record.iter().map(str::to_string).collect();
        if let Some(last) = fields.last_mut() {
            if last.ends_with('\r') {
                last.pop();
            }
        }
        Self {
            line_number,
            fields,
        }
    }
}

/// A row whose "open" value is blank or `null`.
///
/// Renders as the diagnostic line written to stdout:
/// `Line 3 has an empty or invalid 'open' value: ["2020-01-02", "", ...]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding(pub Record);

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line {} has an empty or invalid 'open' value: {:?}",
            self.0.line_number, self.0.fields
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finding_renders_line_and_fields() {
        let rec = StringRecord::from(vec!["2020-01-02", "", "1.0", "0.5", "0.7", "0.7", "100"]);
        let finding = Finding(Record::from_csv(4, &rec));
        assert_eq!(
            finding.to_string(),
            r#"Line 4 has an empty or invalid 'open' value: ["2020-01-02", "", "1.0", "0.5", "0.7", "0.7", "100"]"#
        );
    }

    #[test]
    fn crlf_remainder_is_dropped_from_last_field() {
        let rec = StringRecord::from(vec!["a", "", "c", "d", "e", "f", "g\r"]);
        let record = Record::from_csv(2, &rec);
        assert_eq!(record.fields[6], "g");
        assert_eq!(record.fields.len(), 7);
    }

    #[test]
    fn quotes_inside_fields_are_escaped() {
        let rec = StringRecord::from(vec!["say \"hi\"", "null"]);
        let finding = Finding(Record::from_csv(1, &rec));
        assert_eq!(
            finding.to_string(),
            r#"Line 1 has an empty or invalid 'open' value: ["say \"hi\"", "null"]"#
        );
    }
}
