use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Error messages accumulated per attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    messages: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, attribute: &str, message: impl Into<String>) {
        self.messages
            .entry(attribute.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of messages across all attributes.
    pub fn count(&self) -> usize {
        self.messages.values().map(Vec::len).sum()
    }

    /// Messages recorded for `attribute`, empty when it is valid.
    pub fn get(&self, attribute: &str) -> &[String] {
        self.messages
            .get(attribute)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.messages
            .iter()
            .map(|(attribute, messages)| (attribute.as_str(), messages.as_slice()))
    }

    /// Sentence form of every message, e.g. `"Email can't be blank"`.
    pub fn full_messages(&self) -> Vec<String> {
        self.iter()
            .flat_map(|(attribute, messages)| {
                let label = humanize(attribute);
                messages
                    .iter()
                    .map(move |message| format!("{} {}", label, message))
            })
            .collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_messages().join(", "))
    }
}

fn humanize(attribute: &str) -> String {
    let spaced = attribute.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_accumulate_per_attribute() {
        let mut errors = ValidationErrors::new();
        errors.add("email", "can't be blank");
        errors.add("email", "does not look like an email address");

        assert_eq!(errors.count(), 2);
        assert_eq!(errors.get("email").len(), 2);
        assert!(errors.get("name").is_empty());
    }

    #[test]
    fn test_full_messages_humanize_attribute() {
        let mut errors = ValidationErrors::new();
        errors.add("unlock_on", "is invalid");

        assert_eq!(errors.full_messages(), ["Unlock on is invalid"]);
    }

    #[test]
    fn test_serializes_as_attribute_map() {
        let mut errors = ValidationErrors::new();
        errors.add("name", "can't be blank");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({ "name": ["can't be blank"] }));
    }
}
