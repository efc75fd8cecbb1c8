//! ATM identifier extraction. Pure functions, no I/O.
//!
//! The pattern is a whole token of exactly 6 digits: a longer digit run
//! (e.g. `12345678`) never yields a match.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// 6 digits bounded by non-digit-or-edge on both sides.
    static ref ATM_PATTERN: Regex = Regex::new(r"\b\d{6}\b").expect("valid ATM pattern");
    /// Whole-string variant, used to validate filter input.
    static ref ATM_EXACT: Regex = Regex::new(r"^\d{6}$").expect("valid exact ATM pattern");
}

/// Returns the first 6-digit token in `text`, or None.
pub fn extract_atm_id(text: &str) -> Option<&str> {
    ATM_PATTERN.find(text).map(|m| m.as_str())
}

/// Whole-string check: is `input` exactly a 6-digit ATM identifier?
pub fn is_atm_id(input: &str) -> bool {
    ATM_EXACT.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_bounded_six_digit_run() {
        assert_eq!(extract_atm_id("id 123456 ok"), Some("123456"));
        assert_eq!(extract_atm_id("123456"), Some("123456"));
        assert_eq!(extract_atm_id("ATM#654321 is down"), Some("654321"));
    }

    #[test]
    fn ignores_longer_digit_runs() {
        assert_eq!(extract_atm_id("12345678"), None);
        assert_eq!(extract_atm_id("phone +71234567890"), None);
        assert_eq!(extract_atm_id("1234567"), None);
    }

    #[test]
    fn ignores_shorter_digit_runs() {
        assert_eq!(extract_atm_id("12345"), None);
        assert_eq!(extract_atm_id("no digits here"), None);
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(extract_atm_id("111111 then 222222"), Some("111111"));
    }

    #[test]
    fn exact_check_rejects_embedded_tokens() {
        assert!(is_atm_id("654321"));
        assert!(!is_atm_id("abc123"));
        assert!(!is_atm_id(" 654321"));
        assert!(!is_atm_id("654321 "));
        assert!(!is_atm_id("6543210"));
    }
}
