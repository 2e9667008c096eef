use super::AttributeValidator;

/// Rejects missing or whitespace-only values.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresenceValidator;

impl AttributeValidator for PresenceValidator {
    fn validate(&self, value: Option<&str>) -> Vec<String> {
        match value {
            Some(value) if !value.trim().is_empty() => Vec::new(),
            _ => vec!["can't be blank".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence() {
        assert!(PresenceValidator.validate(Some("Level 1")).is_empty());
        assert!(!PresenceValidator.validate(Some("  ")).is_empty());
        assert!(!PresenceValidator.validate(None).is_empty());
    }
}
