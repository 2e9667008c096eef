use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::common::{CourseId, FounderId, SchoolId, UserId};

/// Founder model - a student enrolled in a course
#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct Founder {
    pub id: FounderId,
    pub user_id: UserId,
    pub course_id: CourseId,
    pub created_at: DateTime<Utc>,
}

impl Founder {
    /// The user's student profile in one of the school's courses, if any
    pub async fn find_for_user(
        user_id: UserId,
        school_id: SchoolId,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT founders.*
             FROM founders
             INNER JOIN courses ON courses.id = founders.course_id
             WHERE founders.user_id = $1 AND courses.school_id = $2
             ORDER BY founders.created_at DESC
             LIMIT 1",
        )
        .bind(user_id)
        .bind(school_id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }
}
