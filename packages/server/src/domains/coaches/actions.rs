//! Faculty write actions, shared by the GraphQL mutations and REST routes.

use tracing::info;

use crate::common::auth::enforce;
use crate::common::{
    AppError, AuthError, CoachId, CourseId, Policy, ResolverContext, Validate, ValidationErrors,
};
use crate::kernel::ServerDeps;

use super::data::CoachInput;
use super::models::{Coach, NewCoach};
use super::policy::CoachPolicy;

const EMAIL_TAKEN: &str = "has already been taken";

/// Add a new coach to the school and enroll them in a course.
///
/// Emails are unique per school, compared case-insensitively.
pub async fn create_coach(
    context: &ResolverContext,
    course_id: CourseId,
    input: CoachInput,
    deps: &ServerDeps,
) -> Result<Coach, AppError> {
    let actor = context.actor();
    enforce(
        CoachPolicy::new(actor, None).create(),
        "create_coach",
        actor.as_ref(),
    )?;
    let school = context.current_school().ok_or(AppError::NotFound("School"))?;

    let course = deps
        .curriculum
        .find_course(school.id, course_id)
        .await?
        .ok_or(AppError::NotFound("Course"))?;

    let new_coach = NewCoach {
        school_id: school.id,
        course_id: course.id,
        name: input.name.trim().to_string(),
        email: input.email.trim().to_string(),
        title: input.title.map(|t| t.trim().to_string()).filter(|t| !t.is_empty()),
    };

    let mut errors = new_coach.errors();
    if errors.get("email").is_empty()
        && deps
            .faculty
            .find_coach_by_email(school.id, &new_coach.email)
            .await?
            .is_some()
    {
        errors.add("email", EMAIL_TAKEN);
    }
    if !errors.is_empty() {
        return Err(errors.into());
    }

    // Another request may have claimed the email since the lookup
    let Some(coach) = deps.faculty.insert_coach(new_coach).await? else {
        let mut errors = ValidationErrors::new();
        errors.add("email", EMAIL_TAKEN);
        return Err(errors.into());
    };
    info!(coach_id = %coach.id, course_id = %course.id, "Coach added to course");

    Ok(coach)
}

/// Remove a coach's enrollment from a course of the current school.
pub async fn remove_coach(
    context: &ResolverContext,
    course_id: CourseId,
    coach_id: CoachId,
    deps: &ServerDeps,
) -> Result<(), AppError> {
    let actor = context.actor();
    enforce(
        CoachPolicy::new(actor, None).manage(),
        "remove_coach",
        actor.as_ref(),
    )?;
    let school = context.current_school().ok_or(AuthError::Unauthorized)?;

    let coach = deps
        .faculty
        .find_coach(school.id, coach_id)
        .await?
        .ok_or(AppError::NotFound("Coach"))?;

    enforce(
        CoachPolicy::new(actor, Some(&coach)).destroy(),
        "remove_coach",
        actor.as_ref(),
    )?;

    let course = deps
        .curriculum
        .find_course(school.id, course_id)
        .await?
        .ok_or(AppError::NotFound("Course"))?;

    if !deps.faculty.remove_coach_from_course(coach.id, course.id).await? {
        return Err(AppError::NotFound("Enrollment"));
    }
    info!(coach_id = %coach.id, course_id = %course.id, "Coach removed from course");

    Ok(())
}
