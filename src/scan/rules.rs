use csv::StringRecord;

/// Width of a well-formed price row: date, open, high, low, close, adj close, volume.
pub const EXPECTED_FIELDS: usize = 7;

/// Column holding the opening price.
pub const OPEN_INDEX: usize = 1;

/// True when the row is 7 wide and its "open" field is blank or `null` (any case).
/// Rows of any other width are never flagged.
pub fn open_value_missing(record: &StringRecord) -> bool {
    if record.len() != EXPECTED_FIELDS {
        return false;
    }
    match record.get(OPEN_INDEX) {
        Some(open) => is_blank(open) || open.eq_ignore_ascii_case("null"),
        None => false,
    }
}

/// Blank after trimming Unicode whitespace and the `\x1c`..=`\x1f` separators,
/// which `str::trim` keeps.
fn is_blank(field: &str) -> bool {
    field
        .trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
        .is_empty()
}
