// InMemoryStore - store implementation for tests
//
// Implements every Base* store trait over plain vectors so resolvers, actions
// and routes can be exercised without a database.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{BaseCurriculumStore, BaseFacultyStore, BaseSchoolStore, ServerDeps};
use crate::common::{
    CoachId, CourseId, FounderId, LevelId, SchoolAdminId, SchoolId, UserId,
};
use crate::domains::coaches::models::{Coach, NewCoach};
use crate::domains::courses::models::Course;
use crate::domains::levels::models::{Level, NewLevel};
use crate::domains::schools::models::{Founder, School, SchoolAdmin, User};

#[derive(Default)]
struct Tables {
    schools: Vec<School>,
    domains: HashMap<String, SchoolId>,
    users: Vec<User>,
    school_admins: Vec<SchoolAdmin>,
    founders: Vec<Founder>,
    courses: Vec<Course>,
    levels: Vec<Level>,
    coaches: Vec<Coach>,
    enrollments: Vec<(CoachId, CourseId)>,
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dependencies backed by this store
    pub fn deps(&self) -> ServerDeps {
        ServerDeps::from_store(Arc::new(self.clone()))
    }

    /// Create a school served on `host`
    pub fn add_school(&self, name: &str, host: &str) -> School {
        let school = School {
            id: SchoolId::new(),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        let mut tables = self.tables.lock().unwrap();
        tables.domains.insert(host.to_lowercase(), school.id);
        tables.schools.push(school.clone());
        school
    }

    pub fn add_user(&self, school_id: SchoolId, email: &str) -> User {
        let user = User {
            id: UserId::new(),
            school_id,
            email: email.to_string(),
            name: email.split('@').next().unwrap_or(email).to_string(),
            created_at: Utc::now(),
        };
        self.tables.lock().unwrap().users.push(user.clone());
        user
    }

    pub fn add_school_admin(&self, user: &User) -> SchoolAdmin {
        let admin = SchoolAdmin {
            id: SchoolAdminId::new(),
            user_id: user.id,
            school_id: user.school_id,
            created_at: Utc::now(),
        };
        self.tables.lock().unwrap().school_admins.push(admin.clone());
        admin
    }

    pub fn add_founder(&self, user: &User, course_id: CourseId) -> Founder {
        let founder = Founder {
            id: FounderId::new(),
            user_id: user.id,
            course_id,
            created_at: Utc::now(),
        };
        self.tables.lock().unwrap().founders.push(founder.clone());
        founder
    }

    pub fn add_course(&self, school_id: SchoolId, name: &str) -> Course {
        let course = Course {
            id: CourseId::new(),
            school_id,
            name: name.to_string(),
            ends_at: None,
            created_at: Utc::now(),
        };
        self.tables.lock().unwrap().courses.push(course.clone());
        course
    }

    pub fn add_level(&self, course: &Course, number: i32, name: &str) -> Level {
        let level = Level {
            id: LevelId::new(),
            course_id: course.id,
            school_id: course.school_id,
            name: name.to_string(),
            number,
            unlock_on: None,
            created_at: Utc::now(),
        };
        self.tables.lock().unwrap().levels.push(level.clone());
        level
    }

    /// Create a coach enrolled in `course`
    pub fn add_coach(&self, course: &Course, name: &str, email: &str) -> Coach {
        let coach = Coach {
            id: CoachId::new(),
            school_id: course.school_id,
            user_id: None,
            name: name.to_string(),
            email: email.to_string(),
            title: None,
            created_at: Utc::now(),
        };
        let mut tables = self.tables.lock().unwrap();
        tables.enrollments.push((coach.id, course.id));
        tables.coaches.push(coach.clone());
        coach
    }

    /// Link a coach record to a signed-in user
    pub fn link_coach_to_user(&self, coach_id: CoachId, user_id: UserId) {
        let mut tables = self.tables.lock().unwrap();
        if let Some(coach) = tables.coaches.iter_mut().find(|c| c.id == coach_id) {
            coach.user_id = Some(user_id);
        }
    }

    pub fn level(&self, id: LevelId) -> Option<Level> {
        self.tables
            .lock()
            .unwrap()
            .levels
            .iter()
            .find(|l| l.id == id)
            .cloned()
    }

    pub fn level_count(&self, course_id: CourseId) -> usize {
        self.tables
            .lock()
            .unwrap()
            .levels
            .iter()
            .filter(|l| l.course_id == course_id)
            .count()
    }

    pub fn is_enrolled(&self, coach_id: CoachId, course_id: CourseId) -> bool {
        self.tables
            .lock()
            .unwrap()
            .enrollments
            .contains(&(coach_id, course_id))
    }
}

#[async_trait]
impl BaseSchoolStore for InMemoryStore {
    async fn find_school_by_host(&self, host: &str) -> Result<Option<School>> {
        let tables = self.tables.lock().unwrap();
        let school = tables
            .domains
            .get(&host.to_lowercase())
            .and_then(|id| tables.schools.iter().find(|s| s.id == *id))
            .cloned();
        Ok(school)
    }

    async fn find_user(&self, id: UserId) -> Result<Option<User>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_school_admin(
        &self,
        user_id: UserId,
        school_id: SchoolId,
    ) -> Result<Option<SchoolAdmin>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .school_admins
            .iter()
            .find(|a| a.user_id == user_id && a.school_id == school_id)
            .cloned())
    }

    async fn find_founder(&self, user_id: UserId, school_id: SchoolId) -> Result<Option<Founder>> {
        let tables = self.tables.lock().unwrap();
        let founder = tables
            .founders
            .iter()
            .filter(|f| f.user_id == user_id)
            .find(|f| {
                tables
                    .courses
                    .iter()
                    .any(|c| c.id == f.course_id && c.school_id == school_id)
            })
            .cloned();
        Ok(founder)
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl BaseCurriculumStore for InMemoryStore {
    async fn courses_for_school(&self, school_id: SchoolId) -> Result<Vec<Course>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .courses
            .iter()
            .filter(|c| c.school_id == school_id)
            .cloned()
            .collect())
    }

    async fn find_course(&self, school_id: SchoolId, id: CourseId) -> Result<Option<Course>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .courses
            .iter()
            .find(|c| c.id == id && c.school_id == school_id)
            .cloned())
    }

    async fn levels_for_course(&self, course_id: CourseId) -> Result<Vec<Level>> {
        let tables = self.tables.lock().unwrap();
        let mut levels: Vec<Level> = tables
            .levels
            .iter()
            .filter(|l| l.course_id == course_id)
            .cloned()
            .collect();
        levels.sort_by_key(|l| l.number);
        Ok(levels)
    }

    async fn find_level(&self, id: LevelId) -> Result<Option<Level>> {
        Ok(self.level(id))
    }

    async fn insert_level(&self, new_level: NewLevel) -> Result<Level> {
        let mut tables = self.tables.lock().unwrap();
        let school_id = tables
            .courses
            .iter()
            .find(|c| c.id == new_level.course_id)
            .map(|c| c.school_id)
            .ok_or_else(|| anyhow::anyhow!("course {} does not exist", new_level.course_id))?;

        let number = tables
            .levels
            .iter()
            .filter(|l| l.course_id == new_level.course_id)
            .map(|l| l.number)
            .max()
            .unwrap_or(0)
            + 1;

        let level = Level {
            id: LevelId::new(),
            course_id: new_level.course_id,
            school_id,
            name: new_level.name,
            number,
            unlock_on: new_level.unlock_on,
            created_at: Utc::now(),
        };
        tables.levels.push(level.clone());
        Ok(level)
    }

    async fn update_level(&self, level: &Level) -> Result<Level> {
        let mut tables = self.tables.lock().unwrap();
        let stored = tables
            .levels
            .iter_mut()
            .find(|l| l.id == level.id)
            .ok_or_else(|| anyhow::anyhow!("level {} does not exist", level.id))?;
        stored.name = level.name.clone();
        stored.number = level.number;
        stored.unlock_on = level.unlock_on;
        Ok(stored.clone())
    }

    async fn delete_level(&self, id: LevelId) -> Result<()> {
        self.tables.lock().unwrap().levels.retain(|l| l.id != id);
        Ok(())
    }
}

#[async_trait]
impl BaseFacultyStore for InMemoryStore {
    async fn coaches_for_school(&self, school_id: SchoolId) -> Result<Vec<Coach>> {
        let tables = self.tables.lock().unwrap();
        let mut coaches: Vec<Coach> = tables
            .coaches
            .iter()
            .filter(|c| c.school_id == school_id)
            .cloned()
            .collect();
        coaches.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(coaches)
    }

    async fn coaches_for_course(&self, course_id: CourseId) -> Result<Vec<Coach>> {
        let tables = self.tables.lock().unwrap();
        let mut coaches: Vec<Coach> = tables
            .coaches
            .iter()
            .filter(|c| tables.enrollments.contains(&(c.id, course_id)))
            .cloned()
            .collect();
        coaches.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(coaches)
    }

    async fn find_coach(&self, school_id: SchoolId, id: CoachId) -> Result<Option<Coach>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .coaches
            .iter()
            .find(|c| c.id == id && c.school_id == school_id)
            .cloned())
    }

    async fn find_coach_by_email(
        &self,
        school_id: SchoolId,
        email: &str,
    ) -> Result<Option<Coach>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .coaches
            .iter()
            .find(|c| c.school_id == school_id && c.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_coach_for_user(
        &self,
        user_id: UserId,
        school_id: SchoolId,
    ) -> Result<Option<Coach>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .coaches
            .iter()
            .find(|c| c.user_id == Some(user_id) && c.school_id == school_id)
            .cloned())
    }

    async fn insert_coach(&self, new_coach: NewCoach) -> Result<Option<Coach>> {
        let mut tables = self.tables.lock().unwrap();
        let taken = tables.coaches.iter().any(|c| {
            c.school_id == new_coach.school_id && c.email.eq_ignore_ascii_case(&new_coach.email)
        });
        if taken {
            return Ok(None);
        }

        let coach = Coach {
            id: CoachId::new(),
            school_id: new_coach.school_id,
            user_id: None,
            name: new_coach.name,
            email: new_coach.email,
            title: new_coach.title,
            created_at: Utc::now(),
        };
        tables.enrollments.push((coach.id, new_coach.course_id));
        tables.coaches.push(coach.clone());
        Ok(Some(coach))
    }

    async fn remove_coach_from_course(&self, id: CoachId, course_id: CourseId) -> Result<bool> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.enrollments.len();
        tables.enrollments.retain(|e| *e != (id, course_id));
        Ok(tables.enrollments.len() != before)
    }
}
