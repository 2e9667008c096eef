use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::common::validation::{EmailValidator, PresenceValidator};
use crate::common::{
    AttributeValidator, CoachId, CourseId, SchoolId, UserId, Validate, ValidationErrors,
};

/// Unique index on `(school_id, lower(email))`
const SCHOOL_EMAIL_INDEX: &str = "idx_faculty_school_email";

/// Coach model - a faculty member of a school (`faculty` table)
#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct Coach {
    pub id: CoachId,
    pub school_id: SchoolId,
    /// Set once the coach signs in for the first time
    pub user_id: Option<UserId>,
    pub name: String,
    pub email: String,
    pub title: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A coach about to be added to a course
#[derive(Debug, Clone)]
pub struct NewCoach {
    pub school_id: SchoolId,
    pub course_id: CourseId,
    pub name: String,
    pub email: String,
    pub title: Option<String>,
}

impl Validate for NewCoach {
    fn errors(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        PresenceValidator.validate_each(&mut errors, "name", Some(&self.name));
        EmailValidator.validate_each(&mut errors, "email", Some(&self.email));
        errors
    }
}

impl Coach {
    pub async fn find_for_school(school_id: SchoolId, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM faculty WHERE school_id = $1 ORDER BY name ASC")
            .bind(school_id)
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Coaches enrolled in a course
    pub async fn find_for_course(course_id: CourseId, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT faculty.*
             FROM faculty
             INNER JOIN faculty_course_enrollments e ON e.faculty_id = faculty.id
             WHERE e.course_id = $1
             ORDER BY faculty.name ASC",
        )
        .bind(course_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_in_school(
        school_id: SchoolId,
        id: CoachId,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM faculty WHERE id = $1 AND school_id = $2")
            .bind(id)
            .bind(school_id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Case-insensitive lookup used for the per-school uniqueness check
    pub async fn find_by_email(
        school_id: SchoolId,
        email: &str,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM faculty WHERE school_id = $1 AND lower(email) = lower($2)",
        )
        .bind(school_id)
        .bind(email)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_for_user(
        user_id: UserId,
        school_id: SchoolId,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM faculty WHERE user_id = $1 AND school_id = $2")
            .bind(user_id)
            .bind(school_id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Insert the coach and enroll them in the course in one transaction.
    ///
    /// Returns `None` when the per-school email index rejects the row.
    pub async fn insert_enrolled(new_coach: &NewCoach, pool: &PgPool) -> Result<Option<Self>> {
        let mut tx = pool.begin().await?;

        let inserted = sqlx::query_as::<_, Self>(
            "INSERT INTO faculty (id, school_id, name, email, title)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(CoachId::new())
        .bind(new_coach.school_id)
        .bind(&new_coach.name)
        .bind(&new_coach.email)
        .bind(&new_coach.title)
        .fetch_one(&mut *tx)
        .await;

        let coach = match inserted {
            Ok(coach) => coach,
            Err(sqlx::Error::Database(e)) if e.constraint() == Some(SCHOOL_EMAIL_INDEX) => {
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        sqlx::query("INSERT INTO faculty_course_enrollments (faculty_id, course_id) VALUES ($1, $2)")
            .bind(coach.id)
            .bind(new_coach.course_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(coach))
    }

    /// Drop a course enrollment; returns whether one existed
    pub async fn remove_from_course(
        id: CoachId,
        course_id: CourseId,
        pool: &PgPool,
    ) -> Result<bool> {
        let result = sqlx::query(
            "DELETE FROM faculty_course_enrollments WHERE faculty_id = $1 AND course_id = $2",
        )
        .bind(id)
        .bind(course_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_coach(name: &str, email: &str) -> NewCoach {
        NewCoach {
            school_id: SchoolId::new(),
            course_id: CourseId::new(),
            name: name.to_string(),
            email: email.to_string(),
            title: None,
        }
    }

    #[test]
    fn test_valid_coach() {
        assert!(new_coach("Grace", "grace@example.com").validate().is_ok());
    }

    #[test]
    fn test_reports_all_invalid_attributes() {
        let errors = new_coach("", "grace@localhost").validate().unwrap_err();
        assert_eq!(errors.get("name"), ["can't be blank"]);
        assert_eq!(errors.get("email"), [EmailValidator::MESSAGE]);
    }
}
