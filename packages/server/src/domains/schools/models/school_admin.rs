use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::common::{SchoolAdminId, SchoolId, UserId};

/// SchoolAdmin model - grants a user administration of a school
#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct SchoolAdmin {
    pub id: SchoolAdminId,
    pub user_id: UserId,
    pub school_id: SchoolId,
    pub created_at: DateTime<Utc>,
}

impl SchoolAdmin {
    pub async fn find_for_user(
        user_id: UserId,
        school_id: SchoolId,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM school_admins WHERE user_id = $1 AND school_id = $2",
        )
        .bind(user_id)
        .bind(school_id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }
}
