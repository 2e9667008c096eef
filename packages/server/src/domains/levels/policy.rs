use crate::common::{Actor, Policy};

use super::models::Level;

/// Permissions for curriculum levels
pub struct LevelPolicy<'a> {
    actor: Option<Actor<'a>>,
    level: Option<&'a Level>,
}

impl<'a> Policy<'a> for LevelPolicy<'a> {
    type Record = Level;

    fn new(actor: Option<Actor<'a>>, level: Option<&'a Level>) -> Self {
        Self { actor, level }
    }
}

impl LevelPolicy<'_> {
    /// All school admins can create new levels in their school.
    pub fn create(&self) -> bool {
        self.admin_of_owning_school()
    }

    pub fn update(&self) -> bool {
        self.create()
    }

    pub fn destroy(&self) -> bool {
        self.admin_of_owning_school()
    }

    fn admin_of_owning_school(&self) -> bool {
        let Some(actor) = self.actor else {
            return false;
        };

        match self.level {
            Some(level) => actor.administers(level.school_id),
            None => actor.is_school_admin(),
        }
    }
}
