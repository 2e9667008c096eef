//! Parsing of untyped request arguments into typed ones.

use serde::de::DeserializeOwned;

use crate::common::{AuthError, Id};

/// Parse an id received as a string, e.g. a GraphQL `ID` or a path segment
pub fn parse_id<T>(raw: &str, field: &str) -> Result<Id<T>, AuthError> {
    Id::parse(raw).map_err(|_| AuthError::InvalidArgument(format!("{field}: not a valid id")))
}

/// Deserialize a JSON body into a declared input type
///
/// Input types reject unknown fields, so an extra key fails here instead of
/// being silently dropped.
pub fn parse_input<T: DeserializeOwned>(body: serde_json::Value) -> Result<T, AuthError> {
    serde_json::from_value(body).map_err(|e| AuthError::InvalidArgument(e.to_string()))
}
