//! HTTP handlers for the courses of an author

use super::dto::{CourseDto, CourseForCreationDto, CourseForUpdateDto};
use crate::core::error::{ApiResult, ResourceError};
use crate::core::hypermedia::{BaseUrl, with_location};
use crate::core::negotiation::MediaType;
use crate::core::query::parse_id;
use crate::core::validation::ValidatedJson;
use crate::server::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

async fn ensure_author(state: &AppState, author_id: &str) -> ApiResult<Uuid> {
    let author_id = parse_id(author_id)?;
    if !state.repository.author_exists(&author_id).await? {
        return Err(ResourceError::author(author_id).into());
    }
    Ok(author_id)
}

/// GET /api/authors/{author_id}/courses
pub async fn list_courses(
    State(state): State<AppState>,
    media_type: MediaType,
    Path(author_id): Path<String>,
) -> ApiResult<Response> {
    let author_id = ensure_author(&state, &author_id).await?;

    let courses: Vec<CourseDto> = state
        .repository
        .get_courses(&author_id)
        .await?
        .into_iter()
        .map(CourseDto::from)
        .collect();

    media_type.respond(StatusCode::OK, &courses)
}

/// GET /api/authors/{author_id}/courses/{course_id}
pub async fn get_course(
    State(state): State<AppState>,
    media_type: MediaType,
    Path((author_id, course_id)): Path<(String, String)>,
) -> ApiResult<Response> {
    let author_id = ensure_author(&state, &author_id).await?;
    let course_id = parse_id(&course_id)?;

    let course = state
        .repository
        .get_course(&author_id, &course_id)
        .await?
        .ok_or_else(|| ResourceError::course(course_id))?;

    media_type.respond(StatusCode::OK, &CourseDto::from(course))
}

/// POST /api/authors/{author_id}/courses
pub async fn create_course(
    State(state): State<AppState>,
    media_type: MediaType,
    base: BaseUrl,
    Path(author_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<CourseForCreationDto>,
) -> ApiResult<Response> {
    let author_id = ensure_author(&state, &author_id).await?;

    let course = state
        .repository
        .add_course(payload.into_course(author_id))
        .await?;
    tracing::info!(author_id = %author_id, course_id = %course.id, "created course");

    let response = media_type.respond(StatusCode::CREATED, &CourseDto::from(&course))?;
    with_location(response, &base.course(author_id, course.id))
}

/// PUT /api/authors/{author_id}/courses/{course_id}
///
/// Creates the course under the given id when it does not exist yet. An id
/// already used by another author's course is a 409.
pub async fn upsert_course(
    State(state): State<AppState>,
    media_type: MediaType,
    base: BaseUrl,
    Path((author_id, course_id)): Path<(String, String)>,
    ValidatedJson(payload): ValidatedJson<CourseForUpdateDto>,
) -> ApiResult<Response> {
    let author_id = ensure_author(&state, &author_id).await?;
    let course_id = parse_id(&course_id)?;

    match state.repository.get_course(&author_id, &course_id).await? {
        Some(mut course) => {
            payload.apply_to(&mut course);
            state.repository.update_course(course).await?;
            tracing::info!(author_id = %author_id, course_id = %course_id, "updated course");
            Ok(StatusCode::NO_CONTENT.into_response())
        }
        None => {
            if state.repository.course_exists(&course_id).await? {
                return Err(ResourceError::Conflict {
                    resource_type: "course".to_string(),
                    id: course_id,
                }
                .into());
            }

            let course = state
                .repository
                .add_course(payload.into_course(author_id, course_id))
                .await?;
            tracing::info!(author_id = %author_id, course_id = %course.id, "created course by upsert");

            let response = media_type.respond(StatusCode::CREATED, &CourseDto::from(&course))?;
            with_location(response, &base.course(author_id, course.id))
        }
    }
}

/// DELETE /api/authors/{author_id}/courses/{course_id}
pub async fn delete_course(
    State(state): State<AppState>,
    Path((author_id, course_id)): Path<(String, String)>,
) -> ApiResult<StatusCode> {
    let author_id = ensure_author(&state, &author_id).await?;
    let course_id = parse_id(&course_id)?;

    if !state.repository.delete_course(&author_id, &course_id).await? {
        return Err(ResourceError::course(course_id).into());
    }

    tracing::info!(author_id = %author_id, course_id = %course_id, "deleted course");
    Ok(StatusCode::NO_CONTENT)
}
