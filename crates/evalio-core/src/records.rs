/// Utilities for records output format
/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Quote a string field for records output, escaping embedded quotes
/// and flattening line breaks so each record stays on one line.
pub fn quoted(s: &str) -> String {
    let flattened = s.replace(['\n', '\r'], " ");
    format!("\"{}\"", escape_quotes(&flattened))
}

/// Join a list for a records field, `-` when empty
pub fn csv_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(",")
    }
}
