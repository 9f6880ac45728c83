//! Key normalization and CSV field helpers.
//!
//! Every key that reaches an index goes through [`normalize_key`]. The indices
//! themselves never renormalize, so mixed-case keys must be folded here.

/// Strip leading and trailing whitespace: space, tab, LF, VT, FF and CR.
#[must_use]
pub fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r'))
}

/// Fold ASCII letters to upper case; other characters pass through.
#[must_use]
pub fn to_upper(s: &str) -> String {
    s.to_ascii_uppercase()
}

/// Trim then upper-case: the canonical form of a course key.
#[must_use]
pub fn normalize_key(s: &str) -> String {
    to_upper(trim(s))
}

/// Split a line on every comma, trimming each field.
///
/// Quoting is not recognized. A single trailing comma does not start a new
/// field, so `"A,B,"` has two fields and an empty line has none.
pub fn split_csv_line(line: &str) -> Vec<&str> {
    let line = line.strip_suffix(',').unwrap_or(line);
    if line.is_empty() {
        return Vec::new();
    }
    line.split(',').map(trim).collect()
}
