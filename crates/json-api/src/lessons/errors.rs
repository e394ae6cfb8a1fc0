//! Lesson Errors

use salvo::http::StatusError;
use tracing::error;

use afterschool_app::domain::lessons::LessonsServiceError;

pub(crate) fn into_status_error(error: LessonsServiceError) -> StatusError {
    match error {
        LessonsServiceError::Validation(reason) => {
            StatusError::bad_request().brief(format!("Invalid lesson data: {reason}"))
        }
        LessonsServiceError::NotFound => StatusError::not_found().brief("Lesson not found"),
        LessonsServiceError::Unavailable(source) => {
            error!("lesson store unavailable: {source}");

            StatusError::internal_server_error().brief("Lesson store unavailable")
        }
    }
}
