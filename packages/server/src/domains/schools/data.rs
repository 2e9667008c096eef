use juniper::GraphQLObject;

use super::models::School;

/// School GraphQL data type
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "A school (tenant) on the platform")]
pub struct SchoolData {
    pub id: String,
    pub name: String,
}

impl From<School> for SchoolData {
    fn from(school: School) -> Self {
        Self {
            id: school.id.to_string(),
            name: school.name,
        }
    }
}
