//! Postgres implementation of the store traits, delegating to the models.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use super::{BaseCurriculumStore, BaseFacultyStore, BaseSchoolStore};
use crate::common::{CoachId, CourseId, LevelId, SchoolId, UserId};
use crate::domains::coaches::models::{Coach, NewCoach};
use crate::domains::courses::models::Course;
use crate::domains::levels::models::{Level, NewLevel};
use crate::domains::schools::models::{Founder, School, SchoolAdmin, User};

#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseSchoolStore for PostgresStore {
    async fn find_school_by_host(&self, host: &str) -> Result<Option<School>> {
        School::find_by_host(host, &self.pool).await
    }

    async fn find_user(&self, id: UserId) -> Result<Option<User>> {
        User::find_by_id(id, &self.pool).await
    }

    async fn find_school_admin(
        &self,
        user_id: UserId,
        school_id: SchoolId,
    ) -> Result<Option<SchoolAdmin>> {
        SchoolAdmin::find_for_user(user_id, school_id, &self.pool).await
    }

    async fn find_founder(&self, user_id: UserId, school_id: SchoolId) -> Result<Option<Founder>> {
        Founder::find_for_user(user_id, school_id, &self.pool).await
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl BaseCurriculumStore for PostgresStore {
    async fn courses_for_school(&self, school_id: SchoolId) -> Result<Vec<Course>> {
        Course::find_for_school(school_id, &self.pool).await
    }

    async fn find_course(&self, school_id: SchoolId, id: CourseId) -> Result<Option<Course>> {
        Course::find_in_school(school_id, id, &self.pool).await
    }

    async fn levels_for_course(&self, course_id: CourseId) -> Result<Vec<Level>> {
        Level::find_for_course(course_id, &self.pool).await
    }

    async fn find_level(&self, id: LevelId) -> Result<Option<Level>> {
        Level::find_by_id(id, &self.pool).await
    }

    async fn insert_level(&self, level: NewLevel) -> Result<Level> {
        Level::insert(&level, &self.pool).await
    }

    async fn update_level(&self, level: &Level) -> Result<Level> {
        level.update(&self.pool).await
    }

    async fn delete_level(&self, id: LevelId) -> Result<()> {
        Level::delete(id, &self.pool).await
    }
}

#[async_trait]
impl BaseFacultyStore for PostgresStore {
    async fn coaches_for_school(&self, school_id: SchoolId) -> Result<Vec<Coach>> {
        Coach::find_for_school(school_id, &self.pool).await
    }

    async fn coaches_for_course(&self, course_id: CourseId) -> Result<Vec<Coach>> {
        Coach::find_for_course(course_id, &self.pool).await
    }

    async fn find_coach(&self, school_id: SchoolId, id: CoachId) -> Result<Option<Coach>> {
        Coach::find_in_school(school_id, id, &self.pool).await
    }

    async fn find_coach_by_email(
        &self,
        school_id: SchoolId,
        email: &str,
    ) -> Result<Option<Coach>> {
        Coach::find_by_email(school_id, email, &self.pool).await
    }

    async fn find_coach_for_user(
        &self,
        user_id: UserId,
        school_id: SchoolId,
    ) -> Result<Option<Coach>> {
        Coach::find_for_user(user_id, school_id, &self.pool).await
    }

    async fn insert_coach(&self, coach: NewCoach) -> Result<Option<Coach>> {
        Coach::insert_enrolled(&coach, &self.pool).await
    }

    async fn remove_coach_from_course(&self, id: CoachId, course_id: CourseId) -> Result<bool> {
        Coach::remove_from_course(id, course_id, &self.pool).await
    }
}
