use juniper::{GraphQLInputObject, GraphQLObject};
use serde::{Deserialize, Serialize};

use super::models::Coach;

/// Coach GraphQL data type
#[derive(Debug, Clone, Serialize, GraphQLObject)]
#[serde(rename_all = "camelCase")]
#[graphql(description = "A faculty member of the current school")]
pub struct CoachData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub title: Option<String>,
}

impl From<Coach> for CoachData {
    fn from(coach: Coach) -> Self {
        Self {
            id: coach.id.to_string(),
            name: coach.name,
            email: coach.email,
            title: coach.title,
        }
    }
}

/// Fields accepted when adding a coach to a course
#[derive(Debug, Clone, Deserialize, GraphQLInputObject)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct CoachInput {
    pub name: String,
    pub email: String,
    pub title: Option<String>,
}
