use crate::config::REFERENCE_LENGTH;
use once_cell::sync::Lazy;
use regex::Regex;

// Anything that is not an ASCII digit
static NON_DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").unwrap());

/// Format a number of seconds as zero-padded `MM:SS`.
///
/// # Examples
/// ```
/// use wager_panels::utils::format_countdown;
/// assert_eq!(format_countdown(300), "05:00");
/// assert_eq!(format_countdown(59), "00:59");
/// ```
pub fn format_countdown(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Strip everything but digits from `raw` and cut the result at the
/// reference length.
///
/// # Examples
/// ```
/// use wager_panels::utils::sanitize_reference;
/// assert_eq!(sanitize_reference("12a3456789012xyz"), "123456789012");
/// ```
pub fn sanitize_reference(raw: &str) -> String {
    let digits = NON_DIGIT_REGEX.replace_all(raw, "");
    // Only ASCII digits remain, so byte length equals char count.
    digits[..digits.len().min(REFERENCE_LENGTH)].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(300), "05:00");
        assert_eq!(format_countdown(299), "04:59");
        assert_eq!(format_countdown(60), "01:00");
        assert_eq!(format_countdown(59), "00:59");
        assert_eq!(format_countdown(0), "00:00");
        assert_eq!(format_countdown(6_000), "100:00");
    }

    #[test]
    fn test_sanitize_reference_strips_and_truncates() {
        assert_eq!(sanitize_reference("12a3456789012xyz"), "123456789012");
        assert_eq!(sanitize_reference("1234567890123456"), "123456789012");
        assert_eq!(sanitize_reference(" 12-34 "), "1234");
    }

    #[test]
    fn test_sanitize_reference_drops_non_ascii_digits() {
        // Devanagari and full-width digits are not accepted
        assert_eq!(sanitize_reference("१२३"), "");
        assert_eq!(sanitize_reference("１2３"), "2");
        assert_eq!(sanitize_reference("₹200"), "200");
    }

    #[test]
    fn test_sanitize_reference_empty() {
        assert_eq!(sanitize_reference(""), "");
        assert_eq!(sanitize_reference("abc"), "");
    }
}
