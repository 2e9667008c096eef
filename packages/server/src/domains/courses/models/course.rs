use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::common::{CourseId, SchoolId};

/// Course model - SQL persistence layer
#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct Course {
    pub id: CourseId,
    pub school_id: SchoolId,
    pub name: String,
    pub ends_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Course {
    /// All courses of a school, oldest first
    pub async fn find_for_school(school_id: SchoolId, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM courses WHERE school_id = $1 ORDER BY created_at ASC",
        )
        .bind(school_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Find a course, scoped to the school that owns it
    pub async fn find_in_school(
        school_id: SchoolId,
        id: CourseId,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM courses WHERE id = $1 AND school_id = $2")
            .bind(id)
            .bind(school_id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }
}
