// src/records/parse.rs

/// Split a bracketed, comma-separated id list.
///
/// `"[3, 4, 5]"` yields `["3", "4", "5"]`; `"[]"` yields an empty list.
/// Separators and surrounding whitespace are stripped. Returns a message
/// describing the problem when the field is not bracketed.
pub fn parse_id_list(field: &str) -> Result<Vec<String>, String> {
    let trimmed = field.trim();

    let inner = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| format!("expected a bracketed id list, got '{}'", field))?;

    let ids = inner
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect();

    Ok(ids)
}

/// Parse an integer cell, naming the column in the error message.
pub fn parse_int(field: &str, column: &str) -> Result<i64, String> {
    field
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("column '{}' expects an integer, got '{}'", column, field))
}
