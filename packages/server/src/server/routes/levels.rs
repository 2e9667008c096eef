//! REST routes for a course's curriculum.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::common::auth::execute;
use crate::common::{AppError, Resolver, ResolverContext};
use crate::domains::levels::{self, LevelData, LevelInput, LevelsResolver};
use crate::server::app::AxumAppState;
use crate::server::args::{parse_id, parse_input};

#[derive(Serialize)]
pub struct CurriculumResponse {
    levels: Vec<LevelData>,
}

/// GET /school/courses/:course_id/curriculum
pub async fn curriculum_handler(
    Extension(state): Extension<AxumAppState>,
    Extension(context): Extension<ResolverContext>,
    Path(course_id): Path<String>,
) -> Result<Json<CurriculumResponse>, AppError> {
    let resolver = LevelsResolver::from_json(context, json!({ "courseId": course_id }))?;
    let levels = execute(resolver, &state.deps).await?;

    Ok(Json(CurriculumResponse {
        levels: levels.into_iter().map(LevelData::from).collect(),
    }))
}

/// POST /school/courses/:course_id/levels
pub async fn create_level_handler(
    Extension(state): Extension<AxumAppState>,
    Extension(context): Extension<ResolverContext>,
    Path(course_id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<LevelData>), AppError> {
    let course_id = parse_id(&course_id, "course_id")?;
    let input: LevelInput = parse_input(body)?;

    let level = levels::create_level(&context, course_id, input, &state.deps).await?;
    Ok((StatusCode::CREATED, Json(level.into())))
}

/// PATCH /school/levels/:id
pub async fn update_level_handler(
    Extension(state): Extension<AxumAppState>,
    Extension(context): Extension<ResolverContext>,
    Path(id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<LevelData>, AppError> {
    let level_id = parse_id(&id, "id")?;
    let input: LevelInput = parse_input(body)?;

    let level = levels::update_level(&context, level_id, input, &state.deps).await?;
    Ok(Json(level.into()))
}

/// DELETE /school/levels/:id
pub async fn destroy_level_handler(
    Extension(state): Extension<AxumAppState>,
    Extension(context): Extension<ResolverContext>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let level_id = parse_id(&id, "id")?;

    levels::destroy_level(&context, level_id, &state.deps).await?;
    Ok(StatusCode::NO_CONTENT)
}
