//! Lesson Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{extensions::*, lessons::handlers::LessonResponse, state::State};

/// Lesson Index Handler
///
/// Returns every lesson, oldest first.
#[endpoint(
    tags("lessons"),
    summary = "List Lessons",
    responses(
        (status_code = StatusCode::OK, description = "All lessons"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Error fetching lessons"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<LessonResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let lessons = state
        .app
        .lessons
        .list_lessons()
        .await
        .or_500("Error fetching lessons")?;

    Ok(Json(lessons.into_iter().map(Into::into).collect()))
}
