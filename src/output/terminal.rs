//! Terminal output utilities.
//!
//! Provides aligned `label: value` rendering for terminal output.

use crate::models::FieldValue;
use itertools::Itertools;

/// Group decimal digits by three from the right with commas.
///
/// # Examples
/// ```
/// use subnet_calc::output::group_digits;
/// assert_eq!(group_digits("4294967296"), "4,294,967,296");
/// ```
pub fn group_digits(digits: &str) -> String {
    digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| String::from_utf8_lossy(chunk))
        .join(",")
}

/// Render one value, counts with digit grouping.
pub fn format_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(text) => text.clone(),
        FieldValue::Count(count) => group_digits(&count.to_str_radix(10)),
    }
}

/// Render labelled values one per line, colons aligned on the widest label.
///
/// Each line is `  <label padded>: <value>\n`.
pub fn format_fields(fields: &[(&str, FieldValue)]) -> String {
    let width = fields
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    fields
        .iter()
        .map(|(label, value)| format!("  {label:<width$}: {}\n", format_value(value)))
        .collect()
}
