use async_trait::async_trait;
use serde::Deserialize;

use crate::common::{AppError, Authorized, Resolve, Resolver, ResolverContext};
use crate::kernel::ServerDeps;

use super::models::School;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CurrentSchoolArgs {}

/// The school serving this request, visible to anyone signed in to it
pub struct CurrentSchoolResolver {
    context: ResolverContext,
}

impl Resolver for CurrentSchoolResolver {
    type Args = CurrentSchoolArgs;
    const NAME: &'static str = "current_school";

    fn new(context: ResolverContext, _args: CurrentSchoolArgs) -> Self {
        Self { context }
    }

    fn context(&self) -> &ResolverContext {
        &self.context
    }

    fn authorized(&self) -> bool {
        self.current_actor().is_some()
    }
}

#[async_trait]
impl Resolve for CurrentSchoolResolver {
    type Output = School;

    async fn resolve(this: Authorized<Self>, _deps: &ServerDeps) -> Result<School, AppError> {
        this.current_school()
            .cloned()
            .ok_or(AppError::NotFound("School"))
    }
}
