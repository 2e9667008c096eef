use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use tracing::debug;

use crate::common::validation::PresenceValidator;
use crate::common::{AttributeValidator, CourseId, LevelId, SchoolId, Validate, ValidationErrors};

/// Level model - SQL persistence layer
///
/// `school_id` is not stored on the row; it is joined from the owning course
/// so policies can check tenancy without a second lookup.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct Level {
    pub id: LevelId,
    pub course_id: CourseId,
    pub school_id: SchoolId,
    pub name: String,
    pub number: i32,
    pub unlock_on: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// A level about to be appended to a course
///
/// The number is assigned on insert, one past the course's highest level.
#[derive(Debug, Clone)]
pub struct NewLevel {
    pub course_id: CourseId,
    pub name: String,
    pub unlock_on: Option<NaiveDate>,
}

impl Validate for NewLevel {
    fn errors(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        PresenceValidator.validate_each(&mut errors, "name", Some(&self.name));
        errors
    }
}

impl Validate for Level {
    fn errors(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        PresenceValidator.validate_each(&mut errors, "name", Some(&self.name));
        if self.number < 1 {
            errors.add("number", "must be greater than 0");
        }
        errors
    }
}

/// Concurrent appends to one course can pick the same number; the loser retries.
const INSERT_ATTEMPTS: usize = 3;

const SELECT_LEVELS: &str = "SELECT levels.id, levels.course_id, courses.school_id, levels.name,
        levels.number, levels.unlock_on, levels.created_at
     FROM levels
     INNER JOIN courses ON courses.id = levels.course_id";

impl Level {
    /// Levels of a course in curriculum order
    pub async fn find_for_course(course_id: CourseId, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(&format!(
            "{} WHERE levels.course_id = $1 ORDER BY levels.number ASC",
            SELECT_LEVELS
        ))
        .bind(course_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_by_id(id: LevelId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(&format!("{} WHERE levels.id = $1", SELECT_LEVELS))
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Append a level numbered after the course's current highest level
    pub async fn insert(new_level: &NewLevel, pool: &PgPool) -> Result<Self> {
        let mut attempt = 1;
        loop {
            match Self::insert_next(new_level, pool).await {
                Err(sqlx::Error::Database(e))
                    if e.is_unique_violation() && attempt < INSERT_ATTEMPTS =>
                {
                    debug!(
                        course_id = %new_level.course_id,
                        attempt,
                        "Level number taken, retrying"
                    );
                    attempt += 1;
                }
                result => return result.map_err(Into::into),
            }
        }
    }

    async fn insert_next(new_level: &NewLevel, pool: &PgPool) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Self>(
            "WITH inserted AS (
                INSERT INTO levels (id, course_id, name, number, unlock_on)
                SELECT $1, $2, $3, COALESCE(MAX(number), 0) + 1, $4
                FROM levels
                WHERE course_id = $2
                RETURNING *
             )
             SELECT inserted.id, inserted.course_id, courses.school_id, inserted.name,
                    inserted.number, inserted.unlock_on, inserted.created_at
             FROM inserted
             INNER JOIN courses ON courses.id = inserted.course_id",
        )
        .bind(LevelId::new())
        .bind(new_level.course_id)
        .bind(&new_level.name)
        .bind(new_level.unlock_on)
        .fetch_one(pool)
        .await
    }

    /// Persist name and unlock date changes
    pub async fn update(&self, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "WITH updated AS (
                UPDATE levels SET name = $2, unlock_on = $3
                WHERE id = $1
                RETURNING *
             )
             SELECT updated.id, updated.course_id, courses.school_id, updated.name,
                    updated.number, updated.unlock_on, updated.created_at
             FROM updated
             INNER JOIN courses ON courses.id = updated.course_id",
        )
        .bind(self.id)
        .bind(&self.name)
        .bind(self.unlock_on)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn delete(id: LevelId, pool: &PgPool) -> Result<()> {
        sqlx::query("DELETE FROM levels WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_level_requires_name() {
        let level = NewLevel {
            course_id: CourseId::new(),
            name: "".to_string(),
            unlock_on: None,
        };

        let errors = level.validate().unwrap_err();
        assert_eq!(errors.get("name"), ["can't be blank"]);
    }

    #[test]
    fn test_new_level_valid() {
        let level = NewLevel {
            course_id: CourseId::new(),
            name: "Level 1".to_string(),
            unlock_on: NaiveDate::from_ymd_opt(2026, 1, 1),
        };
        assert!(level.validate().is_ok());
    }

    #[test]
    fn test_level_requires_positive_number() {
        let level = Level {
            id: LevelId::new(),
            course_id: CourseId::new(),
            school_id: SchoolId::new(),
            name: "Level 0".to_string(),
            number: 0,
            unlock_on: None,
            created_at: Utc::now(),
        };

        let errors = level.validate().unwrap_err();
        assert_eq!(errors.get("number"), ["must be greater than 0"]);
        assert!(errors.get("name").is_empty());
    }
}
