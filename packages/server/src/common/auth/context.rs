//! Per-request actor context shared by resolvers and policies.

use typed_builder::TypedBuilder;

use crate::common::SchoolId;
use crate::domains::coaches::models::Coach;
use crate::domains::schools::models::{Founder, School, SchoolAdmin, User};

/// The currently acting principals for one request.
///
/// Built once by the request middleware and never mutated afterwards. Every
/// role is optional: an anonymous request on an unknown host has none.
#[derive(Debug, Clone, Default, TypedBuilder)]
pub struct ResolverContext {
    #[builder(default, setter(strip_option))]
    current_user: Option<User>,
    #[builder(default, setter(strip_option))]
    current_school: Option<School>,
    #[builder(default, setter(strip_option))]
    current_school_admin: Option<SchoolAdmin>,
    #[builder(default, setter(strip_option))]
    current_founder: Option<Founder>,
    #[builder(default, setter(strip_option))]
    current_coach: Option<Coach>,
}

impl ResolverContext {
    /// Context for a request with no resolved school or user.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Context from roles that may each be missing.
    pub fn new(
        current_user: Option<User>,
        current_school: Option<School>,
        current_school_admin: Option<SchoolAdmin>,
        current_founder: Option<Founder>,
        current_coach: Option<Coach>,
    ) -> Self {
        Self {
            current_user,
            current_school,
            current_school_admin,
            current_founder,
            current_coach,
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn current_school(&self) -> Option<&School> {
        self.current_school.as_ref()
    }

    pub fn current_school_admin(&self) -> Option<&SchoolAdmin> {
        self.current_school_admin.as_ref()
    }

    pub fn current_founder(&self) -> Option<&Founder> {
        self.current_founder.as_ref()
    }

    pub fn current_coach(&self) -> Option<&Coach> {
        self.current_coach.as_ref()
    }

    /// The principal policies evaluate, or `None` when nobody is signed in
    /// to the current school.
    pub fn actor(&self) -> Option<Actor<'_>> {
        let user = self.current_user.as_ref()?;
        let school = self.current_school.as_ref()?;

        if user.school_id != school.id {
            return None;
        }

        Some(Actor {
            user,
            school,
            school_admin: self
                .current_school_admin
                .as_ref()
                .filter(|admin| admin.school_id == school.id && admin.user_id == user.id),
            coach: self
                .current_coach
                .as_ref()
                .filter(|coach| coach.school_id == school.id),
        })
    }
}

/// An authenticated user acting inside their own school.
#[derive(Debug, Clone, Copy)]
pub struct Actor<'a> {
    pub user: &'a User,
    pub school: &'a School,
    pub school_admin: Option<&'a SchoolAdmin>,
    pub coach: Option<&'a Coach>,
}

impl Actor<'_> {
    pub fn is_school_admin(&self) -> bool {
        self.school_admin.is_some()
    }

    /// True when the actor administers the given school.
    pub fn administers(&self, school_id: SchoolId) -> bool {
        self.is_school_admin() && self.school.id == school_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{SchoolAdminId, UserId};
    use chrono::Utc;

    fn school() -> School {
        School {
            id: SchoolId::new(),
            name: "Startup Village".to_string(),
            created_at: Utc::now(),
        }
    }

    fn user_of(school: &School) -> User {
        User {
            id: UserId::new(),
            school_id: school.id,
            email: "admin@example.com".to_string(),
            name: "Admin".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_anonymous_context_has_no_actor() {
        let ctx = ResolverContext::anonymous();
        assert!(ctx.current_user().is_none());
        assert!(ctx.current_school().is_none());
        assert!(ctx.actor().is_none());
    }

    #[test]
    fn test_actor_requires_school_and_user() {
        let school = school();
        let ctx = ResolverContext::builder().current_school(school).build();
        assert!(ctx.actor().is_none());
    }

    #[test]
    fn test_user_from_other_school_is_not_an_actor() {
        let home = school();
        let other = school();
        let ctx = ResolverContext::builder()
            .current_user(user_of(&other))
            .current_school(home)
            .build();

        assert!(ctx.actor().is_none());
    }

    #[test]
    fn test_admin_grant_makes_actor_admin() {
        let school = school();
        let user = user_of(&school);
        let admin = SchoolAdmin {
            id: SchoolAdminId::new(),
            user_id: user.id,
            school_id: school.id,
            created_at: Utc::now(),
        };
        let school_id = school.id;
        let ctx = ResolverContext::builder()
            .current_user(user)
            .current_school(school)
            .current_school_admin(admin)
            .build();

        let actor = ctx.actor().unwrap();
        assert!(actor.is_school_admin());
        assert!(actor.administers(school_id));
        assert!(!actor.administers(SchoolId::new()));
    }

    #[test]
    fn test_admin_grant_for_another_user_is_ignored() {
        let school = school();
        let user = user_of(&school);
        let admin = SchoolAdmin {
            id: SchoolAdminId::new(),
            user_id: UserId::new(),
            school_id: school.id,
            created_at: Utc::now(),
        };
        let ctx = ResolverContext::builder()
            .current_user(user)
            .current_school(school)
            .current_school_admin(admin)
            .build();

        assert!(!ctx.actor().unwrap().is_school_admin());
    }
}
