//! Attribute validation
//!
//! Validators check one attribute value and report messages; records collect
//! those messages per attribute in [`ValidationErrors`]. Nothing here fails
//! early: every validator on a record runs and all messages are reported
//! together.

mod email;
mod errors;
mod presence;

pub use email::EmailValidator;
pub use errors::ValidationErrors;
pub use presence::PresenceValidator;

/// Checks a single attribute value.
pub trait AttributeValidator {
    /// Messages describing why `value` is invalid. Empty when it is valid.
    fn validate(&self, value: Option<&str>) -> Vec<String>;

    /// Appends this validator's messages for `value` under `attribute`.
    fn validate_each(&self, errors: &mut ValidationErrors, attribute: &str, value: Option<&str>) {
        for message in self.validate(value) {
            errors.add(attribute, message);
        }
    }
}

/// A record that validates itself before being saved.
pub trait Validate {
    /// Runs every validator and collects the results.
    fn errors(&self) -> ValidationErrors;

    fn validate(&self) -> Result<(), ValidationErrors> {
        let errors = self.errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Signup {
        name: String,
        email: Option<String>,
    }

    impl Validate for Signup {
        fn errors(&self) -> ValidationErrors {
            let mut errors = ValidationErrors::new();
            PresenceValidator.validate_each(&mut errors, "name", Some(&self.name));
            PresenceValidator.validate_each(&mut errors, "email", self.email.as_deref());
            EmailValidator.validate_each(&mut errors, "email", self.email.as_deref());
            errors
        }
    }

    #[test]
    fn test_sibling_validators_all_run() {
        let signup = Signup {
            name: " ".to_string(),
            email: None,
        };

        let errors = signup.validate().unwrap_err();
        assert_eq!(errors.get("name"), ["can't be blank"]);
        assert_eq!(
            errors.get("email"),
            ["can't be blank", "does not look like an email address"]
        );
    }

    #[test]
    fn test_valid_record_passes() {
        let signup = Signup {
            name: "Ada".to_string(),
            email: Some("ada@example.com".to_string()),
        };
        assert!(signup.validate().is_ok());
    }

    #[test]
    fn test_validation_leaves_value_untouched() {
        let signup = Signup {
            name: "Ada".to_string(),
            email: Some("Not An Email".to_string()),
        };
        let _ = signup.validate();
        assert_eq!(signup.email.as_deref(), Some("Not An Email"));
    }
}
