use async_trait::async_trait;
use serde::Deserialize;

use crate::common::{
    AppError, AuthError, Authorized, CourseId, Resolve, Resolver, ResolverContext,
};
use crate::kernel::ServerDeps;

use super::models::Level;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct LevelsArgs {
    pub course_id: CourseId,
}

/// Lists a course's levels (its curriculum) for school admins
pub struct LevelsResolver {
    context: ResolverContext,
    course_id: CourseId,
}

impl Resolver for LevelsResolver {
    type Args = LevelsArgs;
    const NAME: &'static str = "levels";

    fn new(context: ResolverContext, args: LevelsArgs) -> Self {
        Self {
            context,
            course_id: args.course_id,
        }
    }

    fn context(&self) -> &ResolverContext {
        &self.context
    }

    fn authorized(&self) -> bool {
        self.is_school_admin()
    }
}

#[async_trait]
impl Resolve for LevelsResolver {
    type Output = Vec<Level>;

    async fn resolve(this: Authorized<Self>, deps: &ServerDeps) -> Result<Vec<Level>, AppError> {
        let school = this.current_school().ok_or(AuthError::Unauthorized)?;

        let course = deps
            .curriculum
            .find_course(school.id, this.course_id)
            .await?
            .ok_or(AppError::NotFound("Course"))?;

        Ok(deps.curriculum.levels_for_course(course.id).await?)
    }
}
