//! Numeric parsing and formatting shared by ingest, keys and output.

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a string as i64, returning None for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

/// Formats a floating-point number as a string without trailing zeros.
///
/// ```
/// use layoffs_model::format_numeric;
///
/// assert_eq!(format_numeric(5.0), "5");
/// assert_eq!(format_numeric(0.15), "0.15");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers() {
        assert_eq!(parse_i64(" 120 "), Some(120));
        assert_eq!(parse_i64("12.5"), None);
        assert_eq!(parse_f64("0.25"), Some(0.25));
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64("NaN"), None);
    }

    #[test]
    fn keeps_integer_zeros() {
        assert_eq!(format_numeric(100.0), "100");
        assert_eq!(format_numeric(1.50), "1.5");
    }
}
