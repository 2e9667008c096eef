use chrono::{DateTime, Utc};
use juniper::GraphQLObject;
use serde::Serialize;

use super::models::Course;

/// Course GraphQL data type
#[derive(Debug, Clone, Serialize, GraphQLObject)]
#[serde(rename_all = "camelCase")]
#[graphql(description = "A course run by the current school")]
pub struct CourseData {
    pub id: String,
    pub name: String,
    /// When the course closes; open-ended when absent
    pub ends_at: Option<DateTime<Utc>>,
}

impl From<Course> for CourseData {
    fn from(course: Course) -> Self {
        Self {
            id: course.id.to_string(),
            name: course.name,
            ends_at: course.ends_at,
        }
    }
}
