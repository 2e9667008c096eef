// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no authorization or validation.
// Callers scope every lookup to the current school themselves.
//
// Naming convention: Base* for trait names (e.g., BaseSchoolStore)

use anyhow::Result;
use async_trait::async_trait;

use crate::common::{CoachId, CourseId, LevelId, SchoolId, UserId};
use crate::domains::coaches::models::{Coach, NewCoach};
use crate::domains::courses::models::Course;
use crate::domains::levels::models::{Level, NewLevel};
use crate::domains::schools::models::{Founder, School, SchoolAdmin, User};

// =============================================================================
// Schools and actors
// =============================================================================

#[async_trait]
pub trait BaseSchoolStore: Send + Sync {
    /// Resolve the tenant serving a host name
    async fn find_school_by_host(&self, host: &str) -> Result<Option<School>>;

    async fn find_user(&self, id: UserId) -> Result<Option<User>>;

    async fn find_school_admin(
        &self,
        user_id: UserId,
        school_id: SchoolId,
    ) -> Result<Option<SchoolAdmin>>;

    async fn find_founder(&self, user_id: UserId, school_id: SchoolId) -> Result<Option<Founder>>;

    /// Cheap round trip used by the health endpoint
    async fn ping(&self) -> Result<()>;
}

// =============================================================================
// Courses and levels
// =============================================================================

#[async_trait]
pub trait BaseCurriculumStore: Send + Sync {
    async fn courses_for_school(&self, school_id: SchoolId) -> Result<Vec<Course>>;

    async fn find_course(&self, school_id: SchoolId, id: CourseId) -> Result<Option<Course>>;

    /// Levels ordered by number
    async fn levels_for_course(&self, course_id: CourseId) -> Result<Vec<Level>>;

    async fn find_level(&self, id: LevelId) -> Result<Option<Level>>;

    /// Append a level numbered one past the course's highest level
    async fn insert_level(&self, level: NewLevel) -> Result<Level>;

    async fn update_level(&self, level: &Level) -> Result<Level>;

    async fn delete_level(&self, id: LevelId) -> Result<()>;
}

// =============================================================================
// Faculty
// =============================================================================

#[async_trait]
pub trait BaseFacultyStore: Send + Sync {
    async fn coaches_for_school(&self, school_id: SchoolId) -> Result<Vec<Coach>>;

    async fn coaches_for_course(&self, course_id: CourseId) -> Result<Vec<Coach>>;

    async fn find_coach(&self, school_id: SchoolId, id: CoachId) -> Result<Option<Coach>>;

    async fn find_coach_by_email(&self, school_id: SchoolId, email: &str)
        -> Result<Option<Coach>>;

    async fn find_coach_for_user(
        &self,
        user_id: UserId,
        school_id: SchoolId,
    ) -> Result<Option<Coach>>;

    /// Create the coach and enroll them in `coach.course_id`.
    /// Returns `None` when the school already has a coach with that email.
    async fn insert_coach(&self, coach: NewCoach) -> Result<Option<Coach>>;

    /// Returns false when the coach was not enrolled in the course
    async fn remove_coach_from_course(&self, id: CoachId, course_id: CourseId) -> Result<bool>;
}
