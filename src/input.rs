//! Input handling module
//!
//! Keystroke-level filtering for the dimension fields. A keystroke is only
//! accepted when the resulting text is still a plain decimal number in
//! progress: digits with at most one decimal point (`^\d*\.?\d*$`). Signs,
//! exponents and letters never reach the store, so the text can always be
//! coerced to a non-negative number or is empty.

/// Longest text a dimension field will hold
pub const MAX_FIELD_LEN: usize = 12;

/// Outcome of offering a character to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// The character was appended
    Accepted,
    /// The character would break the decimal pattern
    Rejected,
    /// The field is already at [`MAX_FIELD_LEN`]
    Full,
}

/// True when `text` matches `^\d*\.?\d*$`
pub fn is_decimal_prefix(text: &str) -> bool {
    let mut seen_point = false;
    text.chars().all(|c| match c {
        '0'..='9' => true,
        '.' if !seen_point => {
            seen_point = true;
            true
        }
        _ => false,
    })
}

/// Append `c` to `text` if the result still matches the decimal pattern
pub fn filter_keystroke(text: &mut String, c: char) -> InputResult {
    if text.chars().count() >= MAX_FIELD_LEN {
        return InputResult::Full;
    }

    let accepted = match c {
        '0'..='9' => true,
        '.' => !text.contains('.'),
        _ => false,
    };

    if accepted {
        text.push(c);
        InputResult::Accepted
    } else {
        InputResult::Rejected
    }
}

/// Coerce field text to a number.
///
/// Empty text, a lone `.`, and anything outside the decimal pattern give
/// `None`. Surrounding whitespace is ignored.
pub fn parse_dimension(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !is_decimal_prefix(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_prefix_pattern() {
        assert!(is_decimal_prefix(""));
        assert!(is_decimal_prefix("600"));
        assert!(is_decimal_prefix("600."));
        assert!(is_decimal_prefix(".5"));
        assert!(is_decimal_prefix("."));
        assert!(!is_decimal_prefix("6.0.0"));
        assert!(!is_decimal_prefix("-600"));
        assert!(!is_decimal_prefix("1e3"));
        assert!(!is_decimal_prefix("inf"));
    }

    #[test]
    fn test_filter_accepts_digits_and_one_point() {
        let mut text = String::new();
        for c in "12.5".chars() {
            assert_eq!(filter_keystroke(&mut text, c), InputResult::Accepted);
        }
        assert_eq!(filter_keystroke(&mut text, '.'), InputResult::Rejected);
        assert_eq!(text, "12.5");
    }

    #[test]
    fn test_filter_rejects_letters_and_signs() {
        let mut text = "60".to_string();
        for c in ['a', '-', '+', 'e', ' ', '?', 'q'] {
            assert_eq!(filter_keystroke(&mut text, c), InputResult::Rejected);
        }
        assert_eq!(text, "60");
    }

    #[test]
    fn test_filter_caps_length() {
        let mut text = "9".repeat(MAX_FIELD_LEN);
        assert_eq!(filter_keystroke(&mut text, '9'), InputResult::Full);
        assert_eq!(text.len(), MAX_FIELD_LEN);
    }

    #[test]
    fn test_parse_dimension() {
        assert_eq!(parse_dimension("600"), Some(600.0));
        assert_eq!(parse_dimension(" 600 "), Some(600.0));
        assert_eq!(parse_dimension("600."), Some(600.0));
        assert_eq!(parse_dimension(".5"), Some(0.5));
        assert_eq!(parse_dimension("0"), Some(0.0));
        assert_eq!(parse_dimension(""), None);
        assert_eq!(parse_dimension("."), None);
        assert_eq!(parse_dimension("abc"), None);
        assert_eq!(parse_dimension("inf"), None);
        assert_eq!(parse_dimension("-5"), None);
    }
}
