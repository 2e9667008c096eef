//! GraphQL schema definition.

use juniper::{EmptySubscription, FieldError, FieldResult, RootNode};
use serde_json::json;

use super::context::GraphQLContext;
use crate::common::auth::execute;
use crate::common::{AppError, Resolver};
use crate::server::args::parse_id;

use crate::domains::coaches::{self, CoachData, CoachInput, CoachesResolver};
use crate::domains::courses::{CourseData, CoursesResolver};
use crate::domains::levels::{self, LevelData, LevelInputData, LevelsResolver};
use crate::domains::schools::{CurrentSchoolResolver, SchoolData};

// =============================================================================
// Helper functions
// =============================================================================

/// Error extensions: `{ code }` plus any extra fields
fn extensions(code: &str, extra: Option<(&str, juniper::Value)>) -> juniper::Value {
    let mut object = juniper::Object::with_capacity(2);
    object.add_field("code", juniper::Value::scalar(code.to_string()));
    if let Some((key, value)) = extra {
        object.add_field(key, value);
    }
    juniper::Value::Object(object)
}

/// Convert AppError to a juniper FieldError carrying a machine-readable code
fn to_field_error(e: AppError) -> FieldError {
    let code = e.code();
    match e {
        AppError::Validation(errors) => {
            let messages = errors
                .full_messages()
                .into_iter()
                .map(juniper::Value::scalar)
                .collect();
            FieldError::new(
                "Validation failed",
                extensions(code, Some(("messages", juniper::Value::list(messages)))),
            )
        }
        AppError::Internal(e) => {
            tracing::error!(error = %e, "GraphQL resolver failed");
            FieldError::new("Internal server error", extensions(code, None))
        }
        e => FieldError::new(e.to_string(), extensions(code, None)),
    }
}

fn field_error<E: Into<AppError>>(e: E) -> FieldError {
    to_field_error(e.into())
}

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    /// The school serving this host, for any signed-in member
    async fn current_school(ctx: &GraphQLContext) -> FieldResult<SchoolData> {
        let resolver = CurrentSchoolResolver::from_json(ctx.resolver_context(), json!({}))
            .map_err(field_error)?;
        let school = execute(resolver, ctx.deps()).await.map_err(to_field_error)?;
        Ok(school.into())
    }

    /// Courses of the current school (school admins only)
    async fn courses(ctx: &GraphQLContext) -> FieldResult<Vec<CourseData>> {
        let resolver =
            CoursesResolver::from_json(ctx.resolver_context(), json!({})).map_err(field_error)?;
        let courses = execute(resolver, ctx.deps()).await.map_err(to_field_error)?;
        Ok(courses.into_iter().map(CourseData::from).collect())
    }

    /// Levels of a course, ordered by number (school admins only)
    async fn levels(ctx: &GraphQLContext, course_id: juniper::ID) -> FieldResult<Vec<LevelData>> {
        let resolver = LevelsResolver::from_json(
            ctx.resolver_context(),
            json!({ "courseId": course_id.to_string() }),
        )
        .map_err(field_error)?;
        let levels = execute(resolver, ctx.deps()).await.map_err(to_field_error)?;
        Ok(levels.into_iter().map(LevelData::from).collect())
    }

    /// Coaches of the school, or of one course when `courseId` is given
    async fn coaches(
        ctx: &GraphQLContext,
        course_id: Option<juniper::ID>,
    ) -> FieldResult<Vec<CoachData>> {
        let args = match course_id {
            Some(id) => json!({ "courseId": id.to_string() }),
            None => json!({}),
        };
        let resolver =
            CoachesResolver::from_json(ctx.resolver_context(), args).map_err(field_error)?;
        let coaches = execute(resolver, ctx.deps()).await.map_err(to_field_error)?;
        Ok(coaches.into_iter().map(CoachData::from).collect())
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    // =========================================================================
    // Curriculum
    // =========================================================================

    /// Append a level to a course
    async fn create_level(
        ctx: &GraphQLContext,
        course_id: juniper::ID,
        input: LevelInputData,
    ) -> FieldResult<LevelData> {
        let course_id = parse_id(&course_id, "courseId").map_err(field_error)?;
        let level = levels::create_level(
            &ctx.resolver_context,
            course_id,
            input.into(),
            ctx.deps(),
        )
        .await
        .map_err(to_field_error)?;
        Ok(level.into())
    }

    async fn update_level(
        ctx: &GraphQLContext,
        id: juniper::ID,
        input: LevelInputData,
    ) -> FieldResult<LevelData> {
        let level_id = parse_id(&id, "id").map_err(field_error)?;
        let level = levels::update_level(
            &ctx.resolver_context,
            level_id,
            input.into(),
            ctx.deps(),
        )
        .await
        .map_err(to_field_error)?;
        Ok(level.into())
    }

    /// Delete a level; returns true once deleted
    async fn destroy_level(ctx: &GraphQLContext, id: juniper::ID) -> FieldResult<bool> {
        let level_id = parse_id(&id, "id").map_err(field_error)?;
        levels::destroy_level(&ctx.resolver_context, level_id, ctx.deps())
            .await
            .map_err(to_field_error)?;
        Ok(true)
    }

    // =========================================================================
    // Faculty
    // =========================================================================

    /// Add a coach to the school and enroll them in a course
    async fn create_coach(
        ctx: &GraphQLContext,
        course_id: juniper::ID,
        input: CoachInput,
    ) -> FieldResult<CoachData> {
        let course_id = parse_id(&course_id, "courseId").map_err(field_error)?;
        let coach = coaches::create_coach(&ctx.resolver_context, course_id, input, ctx.deps())
            .await
            .map_err(to_field_error)?;
        Ok(coach.into())
    }

    async fn remove_coach(
        ctx: &GraphQLContext,
        course_id: juniper::ID,
        coach_id: juniper::ID,
    ) -> FieldResult<bool> {
        let course_id = parse_id(&course_id, "courseId").map_err(field_error)?;
        let coach_id = parse_id(&coach_id, "coachId").map_err(field_error)?;
        coaches::remove_coach(&ctx.resolver_context, course_id, coach_id, ctx.deps())
            .await
            .map_err(to_field_error)?;
        Ok(true)
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
