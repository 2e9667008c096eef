use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::common::SchoolId;

/// School model - one tenant of the platform
#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct School {
    pub id: SchoolId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl School {
    /// Find the school serving a host name (e.g. "www.sv.co")
    pub async fn find_by_host(host: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT schools.*
             FROM schools
             INNER JOIN domains ON domains.school_id = schools.id
             WHERE lower(domains.fqdn) = lower($1)",
        )
        .bind(host)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }
}
