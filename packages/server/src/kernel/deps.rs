//! Server dependencies for resolvers and actions (using traits for testability)

use sqlx::PgPool;
use std::sync::Arc;

use super::{BaseCurriculumStore, BaseFacultyStore, BaseSchoolStore, PostgresStore};

/// Server dependencies accessible to resolvers and actions
#[derive(Clone)]
pub struct ServerDeps {
    pub schools: Arc<dyn BaseSchoolStore>,
    pub curriculum: Arc<dyn BaseCurriculumStore>,
    pub faculty: Arc<dyn BaseFacultyStore>,
}

impl ServerDeps {
    pub fn new(
        schools: Arc<dyn BaseSchoolStore>,
        curriculum: Arc<dyn BaseCurriculumStore>,
        faculty: Arc<dyn BaseFacultyStore>,
    ) -> Self {
        Self {
            schools,
            curriculum,
            faculty,
        }
    }

    /// Use one store for every concern
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: BaseSchoolStore + BaseCurriculumStore + BaseFacultyStore + 'static,
    {
        Self::new(store.clone(), store.clone(), store)
    }

    /// Production dependencies backed by Postgres
    pub fn postgres(pool: PgPool) -> Self {
        Self::from_store(Arc::new(PostgresStore::new(pool)))
    }
}
