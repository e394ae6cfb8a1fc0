//! Get Lesson Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    lessons::{
        errors::into_status_error,
        handlers::{LessonResponse, parse_lesson_id},
    },
    state::State,
};

/// Get Lesson Handler
#[endpoint(
    tags("lessons"),
    summary = "Get Lesson",
    responses(
        (status_code = StatusCode::OK, description = "Lesson found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid lesson id"),
        (status_code = StatusCode::NOT_FOUND, description = "Lesson not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<LessonResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let lesson = parse_lesson_id(&id.into_inner())?;

    let lesson = state
        .app
        .lessons
        .get_lesson(lesson)
        .await
        .map_err(into_status_error)?;

    Ok(Json(lesson.into()))
}
