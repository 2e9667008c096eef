//! Test fixtures for creating test data.
//!
//! Two schools, each with a course; the home school also has an admin, a
//! student and a coach.

use school_core::domains::coaches::models::Coach;
use school_core::domains::courses::models::Course;
use school_core::domains::schools::models::{School, User};
use school_core::kernel::test_dependencies::InMemoryStore;

pub const HOME_HOST: &str = "school.example.com";
pub const OTHER_HOST: &str = "other.example.com";

pub struct SchoolWorld {
    pub school: School,
    pub admin: User,
    pub student: User,
    pub course: Course,
    pub coach: Coach,
    pub other_school: School,
    pub other_admin: User,
    pub other_course: Course,
}

pub fn seed_world(store: &InMemoryStore) -> SchoolWorld {
    let school = store.add_school("Startup Village", HOME_HOST);
    let admin = store.add_user(school.id, "admin@school.example.com");
    store.add_school_admin(&admin);

    let course = store.add_course(school.id, "Incubation");
    let student = store.add_user(school.id, "student@school.example.com");
    store.add_founder(&student, course.id);
    let coach = store.add_coach(&course, "Ada Coach", "ada@school.example.com");

    let other_school = store.add_school("Other School", OTHER_HOST);
    let other_admin = store.add_user(other_school.id, "admin@other.example.com");
    store.add_school_admin(&other_admin);
    let other_course = store.add_course(other_school.id, "Other Course");

    SchoolWorld {
        school,
        admin,
        student,
        course,
        coach,
        other_school,
        other_admin,
        other_course,
    }
}
