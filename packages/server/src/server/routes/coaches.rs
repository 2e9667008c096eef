//! REST routes for the faculty of a course.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::common::auth::execute;
use crate::common::{AppError, Resolver, ResolverContext};
use crate::domains::coaches::{self, CoachData, CoachInput, CoachesResolver};
use crate::server::app::AxumAppState;
use crate::server::args::{parse_id, parse_input};

#[derive(Serialize)]
pub struct CoachesResponse {
    coaches: Vec<CoachData>,
}

/// GET /school/courses/:course_id/coaches
pub async fn course_coaches_handler(
    Extension(state): Extension<AxumAppState>,
    Extension(context): Extension<ResolverContext>,
    Path(course_id): Path<String>,
) -> Result<Json<CoachesResponse>, AppError> {
    let resolver = CoachesResolver::from_json(context, json!({ "courseId": course_id }))?;
    let coaches = execute(resolver, &state.deps).await?;

    Ok(Json(CoachesResponse {
        coaches: coaches.into_iter().map(CoachData::from).collect(),
    }))
}

/// POST /school/courses/:course_id/coaches
pub async fn create_coach_handler(
    Extension(state): Extension<AxumAppState>,
    Extension(context): Extension<ResolverContext>,
    Path(course_id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<CoachData>), AppError> {
    let course_id = parse_id(&course_id, "course_id")?;
    let input: CoachInput = parse_input(body)?;

    let coach = coaches::create_coach(&context, course_id, input, &state.deps).await?;
    Ok((StatusCode::CREATED, Json(coach.into())))
}

/// DELETE /school/courses/:course_id/coaches/:id
pub async fn remove_coach_handler(
    Extension(state): Extension<AxumAppState>,
    Extension(context): Extension<ResolverContext>,
    Path((course_id, id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let course_id = parse_id(&course_id, "course_id")?;
    let coach_id = parse_id(&id, "id")?;

    coaches::remove_coach(&context, course_id, coach_id, &state.deps).await?;
    Ok(StatusCode::NO_CONTENT)
}
