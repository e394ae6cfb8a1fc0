//! Update Lesson Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use afterschool_app::domain::lessons::data::LessonUpdate;

use crate::{
    errors::MessageResponse,
    extensions::*,
    lessons::{errors::into_status_error, handlers::parse_lesson_id},
    state::State,
};

/// Update Lesson Request
///
/// Every key is optional; only the keys present are written.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub(crate) struct UpdateLessonRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spaces: Option<u32>,
}

impl From<UpdateLessonRequest> for LessonUpdate {
    fn from(request: UpdateLessonRequest) -> Self {
        LessonUpdate {
            subject: request.subject,
            location: request.location,
            price: request.price,
            image: request.image,
            spaces: request.spaces,
        }
    }
}

/// Lesson Update Handler
#[endpoint(
    tags("lessons"),
    summary = "Update Lesson",
    responses(
        (status_code = StatusCode::OK, description = "Lesson updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Lesson not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid update data"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "lessons.update",
    skip(id, req, depot),
    fields(lesson_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let lesson = parse_lesson_id(&id.into_inner())?;

    tracing::Span::current().record("lesson_uuid", tracing::field::display(lesson));

    let request = req
        .parse_json::<UpdateLessonRequest>()
        .await
        .or_400("Invalid update data")?;

    state
        .app
        .lessons
        .update_lesson(lesson, request.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(MessageResponse::new("Lesson updated successfully")))
}
