//! Error response rendering

use salvo::{catcher::Catcher, http::ResBody, oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Body of every error response, and of plain acknowledgements.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageResponse {
    /// Human readable message
    pub message: String,
}

impl MessageResponse {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

const ROUTE_NOT_FOUND: &str = "Route not found";

fn default_message(status: StatusCode) -> String {
    if status == StatusCode::NOT_FOUND {
        return ROUTE_NOT_FOUND.to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("Unexpected error")
        .to_string()
}

/// Catcher hoop that renders error responses as `{"message": ...}`.
///
/// The brief of a handler's [`StatusError`] becomes the message; responses
/// without one (such as unmatched routes) fall back to a per-status default.
/// A known path requested with the wrong method is reported as an unmatched
/// route.
#[handler]
pub(crate) async fn render_message(res: &mut Response, ctrl: &mut FlowCtrl) {
    let status = res
        .status_code
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let (status, message) = match res.take_body() {
        ResBody::Error(error) if !error.brief.trim().is_empty() => (status, error.brief),
        _ if status == StatusCode::METHOD_NOT_ALLOWED => {
            (StatusCode::NOT_FOUND, ROUTE_NOT_FOUND.to_string())
        }
        _ => (status, default_message(status)),
    };

    res.status_code(status);
    res.render(Json(MessageResponse { message }));

    ctrl.skip_rest();
}

/// Catcher used by the server.
pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(render_message)
}
