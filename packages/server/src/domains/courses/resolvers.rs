use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use crate::common::{AppError, AuthError, Authorized, Resolve, Resolver, ResolverContext};
use crate::kernel::ServerDeps;

use super::models::Course;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoursesArgs {}

/// Lists the courses of the current school for its admins
pub struct CoursesResolver {
    context: ResolverContext,
}

impl Resolver for CoursesResolver {
    type Args = CoursesArgs;
    const NAME: &'static str = "courses";

    fn new(context: ResolverContext, _args: CoursesArgs) -> Self {
        Self { context }
    }

    fn context(&self) -> &ResolverContext {
        &self.context
    }

    fn authorized(&self) -> bool {
        self.is_school_admin()
    }
}

#[async_trait]
impl Resolve for CoursesResolver {
    type Output = Vec<Course>;

    async fn resolve(this: Authorized<Self>, deps: &ServerDeps) -> Result<Vec<Course>, AppError> {
        let school = this.current_school().ok_or(AuthError::Unauthorized)?;
        info!(school_id = %school.id, "Listing courses");

        Ok(deps.curriculum.courses_for_school(school.id).await?)
    }
}
