use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// E.164 phone numbers as issued by the identity provider
    /// - Valid: "+919876543210", "+14155550100"
    /// - Invalid: "9876543210", "+0123", "+91 98765 43210"
    pub static ref PHONE_E164_REGEX: Regex = Regex::new(r"^\+[1-9][0-9]{6,14}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_regex_valid() {
        assert!(PHONE_E164_REGEX.is_match("+919876543210"));
        assert!(PHONE_E164_REGEX.is_match("+14155550100"));
    }

    #[test]
    fn test_phone_regex_invalid() {
        assert!(!PHONE_E164_REGEX.is_match("9876543210")); // missing plus
        assert!(!PHONE_E164_REGEX.is_match("+0123456789")); // leading zero
        assert!(!PHONE_E164_REGEX.is_match("+91 98765 43210")); // spaces
        assert!(!PHONE_E164_REGEX.is_match("+12345")); // too short
        assert!(!PHONE_E164_REGEX.is_match(""));
    }
}
