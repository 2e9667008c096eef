use async_trait::async_trait;
use serde::Deserialize;

use crate::common::{
    AppError, AuthError, Authorized, CourseId, Resolve, Resolver, ResolverContext,
};
use crate::kernel::ServerDeps;

use super::models::Coach;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct CoachesArgs {
    #[serde(default)]
    pub course_id: Option<CourseId>,
}

/// Lists the school's coaches, optionally only those enrolled in one course
pub struct CoachesResolver {
    context: ResolverContext,
    course_id: Option<CourseId>,
}

impl Resolver for CoachesResolver {
    type Args = CoachesArgs;
    const NAME: &'static str = "coaches";

    fn new(context: ResolverContext, args: CoachesArgs) -> Self {
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
impl Resolve for CoachesResolver {
    type Output = Vec<Coach>;

    async fn resolve(this: Authorized<Self>, deps: &ServerDeps) -> Result<Vec<Coach>, AppError> {
        let school = this.current_school().ok_or(AuthError::Unauthorized)?;

        let Some(course_id) = this.course_id else {
            return Ok(deps.faculty.coaches_for_school(school.id).await?);
        };

        let course = deps
            .curriculum
            .find_course(school.id, course_id)
            .await?
            .ok_or(AppError::NotFound("Course"))?;

        Ok(deps.faculty.coaches_for_course(course.id).await?)
    }
}
