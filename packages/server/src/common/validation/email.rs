use lazy_static::lazy_static;
use regex::Regex;

use super::AttributeValidator;

lazy_static! {
    // local-part @ one or more domain labels, then a 2+ letter TLD
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"(?i)\A([^@\s]+)@((?:[-a-z0-9]+\.)+[a-z]{2,})\z").unwrap();
}

/// Checks that a value has the shape of an email address.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl EmailValidator {
    pub const MESSAGE: &'static str = "does not look like an email address";

    pub fn is_valid(value: &str) -> bool {
        EMAIL_REGEX.is_match(value)
    }
}

impl AttributeValidator for EmailValidator {
    fn validate(&self, value: Option<&str>) -> Vec<String> {
        match value {
            Some(value) if Self::is_valid(value) => Vec::new(),
            _ => vec![Self::MESSAGE.to_string()],
        }
    }
}
