use crate::common::{Actor, Policy};

use super::models::Coach;

/// Permissions for faculty management
pub struct CoachPolicy<'a> {
    actor: Option<Actor<'a>>,
    coach: Option<&'a Coach>,
}

impl<'a> Policy<'a> for CoachPolicy<'a> {
    type Record = Coach;

    fn new(actor: Option<Actor<'a>>, coach: Option<&'a Coach>) -> Self {
        Self { actor, coach }
    }
}

impl CoachPolicy<'_> {
    /// Any faculty change needs an admin of the current school.
    pub fn manage(&self) -> bool {
        self.actor.is_some_and(|actor| actor.is_school_admin())
    }

    pub fn create(&self) -> bool {
        self.manage()
    }

    /// Removing a coach needs an admin of the coach's own school.
    pub fn destroy(&self) -> bool {
        match (self.actor, self.coach) {
            (Some(actor), Some(coach)) => actor.administers(coach.school_id),
            _ => false,
        }
    }
}
