//! Level write actions, shared by the GraphQL mutations and REST routes.

use tracing::info;

use crate::common::auth::enforce;
use crate::common::{AppError, CourseId, LevelId, Policy, ResolverContext, Validate};
use crate::kernel::ServerDeps;

use super::data::LevelInput;
use super::models::{Level, NewLevel};
use super::policy::LevelPolicy;

/// Append a level to a course of the current school.
///
/// The store numbers the new level one past the course's highest level, so
/// concurrent appends never share a number.
pub async fn create_level(
    context: &ResolverContext,
    course_id: CourseId,
    input: LevelInput,
    deps: &ServerDeps,
) -> Result<Level, AppError> {
    let actor = context.actor();
    enforce(
        LevelPolicy::new(actor, None).create(),
        "create_level",
        actor.as_ref(),
    )?;
    let school = context.current_school().ok_or(AppError::NotFound("School"))?;

    let course = deps
        .curriculum
        .find_course(school.id, course_id)
        .await?
        .ok_or(AppError::NotFound("Course"))?;

    let new_level = NewLevel {
        course_id: course.id,
        name: input.name.unwrap_or_default().trim().to_string(),
        unlock_on: input.unlock_on.flatten(),
    };
    new_level.validate()?;

    let level = deps.curriculum.insert_level(new_level).await?;
    info!(
        level_id = %level.id,
        course_id = %course.id,
        number = level.number,
        "Level created"
    );

    Ok(level)
}

/// Rename a level, or move or clear its unlock date.
pub async fn update_level(
    context: &ResolverContext,
    level_id: LevelId,
    input: LevelInput,
    deps: &ServerDeps,
) -> Result<Level, AppError> {
    let mut level = deps
        .curriculum
        .find_level(level_id)
        .await?
        .ok_or(AppError::NotFound("Level"))?;

    let actor = context.actor();
    enforce(
        LevelPolicy::new(actor, Some(&level)).update(),
        "update_level",
        actor.as_ref(),
    )?;

    if let Some(name) = input.name {
        level.name = name.trim().to_string();
    }
    // `null` clears the date, an absent field keeps it
    if let Some(unlock_on) = input.unlock_on {
        level.unlock_on = unlock_on;
    }
    level.validate()?;

    let level = deps.curriculum.update_level(&level).await?;
    info!(level_id = %level.id, "Level updated");

    Ok(level)
}

/// Delete a level of the current school.
pub async fn destroy_level(
    context: &ResolverContext,
    level_id: LevelId,
    deps: &ServerDeps,
) -> Result<(), AppError> {
    let level = deps
        .curriculum
        .find_level(level_id)
        .await?
        .ok_or(AppError::NotFound("Level"))?;

    let actor = context.actor();
    enforce(
        LevelPolicy::new(actor, Some(&level)).destroy(),
        "destroy_level",
        actor.as_ref(),
    )?;

    deps.curriculum.delete_level(level.id).await?;
    info!(level_id = %level.id, course_id = %level.course_id, "Level destroyed");

    Ok(())
}
