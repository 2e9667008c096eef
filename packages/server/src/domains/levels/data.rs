use chrono::NaiveDate;
use juniper::{GraphQLInputObject, GraphQLObject, Nullable};
use serde::{Deserialize, Deserializer, Serialize};

use super::models::Level;

/// Level GraphQL data type
#[derive(Debug, Clone, Serialize, GraphQLObject)]
#[serde(rename_all = "camelCase")]
#[graphql(description = "A stage of a course's curriculum")]
pub struct LevelData {
    pub id: String,
    pub course_id: String,
    pub name: String,
    /// Position in the curriculum, starting at 1
    pub number: i32,
    /// Date before which students cannot enter the level
    pub unlock_on: Option<NaiveDate>,
}

impl From<Level> for LevelData {
    fn from(level: Level) -> Self {
        Self {
            id: level.id.to_string(),
            course_id: level.course_id.to_string(),
            name: level.name,
            number: level.number,
            unlock_on: level.unlock_on,
        }
    }
}

/// Fields accepted when creating or editing a level
///
/// Absent fields are left unchanged on update; `name` is required on create.
/// `unlockOn: null` clears the unlock date, which an absent field does not.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct LevelInput {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub unlock_on: Option<Option<NaiveDate>>,
}

/// Marks a field that was sent, even as `null`
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// GraphQL form of [`LevelInput`]
#[derive(Debug, Clone, GraphQLInputObject)]
#[graphql(name = "LevelInput")]
pub struct LevelInputData {
    pub name: Option<String>,
    pub unlock_on: Nullable<NaiveDate>,
}

impl From<LevelInputData> for LevelInput {
    fn from(data: LevelInputData) -> Self {
        let unlock_on = match data.unlock_on {
            Nullable::ImplicitNull => None,
            Nullable::ExplicitNull => Some(None),
            Nullable::Some(date) => Some(Some(date)),
        };
        Self {
            name: data.name,
            unlock_on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_unlock_on_is_left_alone() {
        let input: LevelInput = serde_json::from_value(json!({ "name": "One" })).unwrap();
        assert_eq!(input.unlock_on, None);
    }

    #[test]
    fn test_null_unlock_on_clears() {
        let input: LevelInput = serde_json::from_value(json!({ "unlockOn": null })).unwrap();
        assert_eq!(input.unlock_on, Some(None));
    }

    #[test]
    fn test_graphql_null_unlock_on_clears() {
        let input = LevelInput::from(LevelInputData {
            name: None,
            unlock_on: Nullable::ExplicitNull,
        });
        assert_eq!(input.unlock_on, Some(None));

        let input = LevelInput::from(LevelInputData {
            name: None,
            unlock_on: Nullable::ImplicitNull,
        });
        assert_eq!(input.unlock_on, None);
    }
}
