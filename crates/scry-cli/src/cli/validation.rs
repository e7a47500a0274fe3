/// Split a comma-separated list.
///
/// Items are trimmed and empty items dropped, so `"a, b,,"` yields
/// `["a", "b"]`.
pub fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a budget or limit that must be greater than zero.
///
/// # Errors
///
/// Returns an error message for non-numbers and zero.
pub fn parse_positive(s: &str) -> Result<usize, String> {
    let value: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a positive number", s))?;
    if value == 0 {
        return Err("Value must be greater than zero".to_string());
    }
    Ok(value)
}
