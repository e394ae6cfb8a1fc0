//! Create Order Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use afterschool_app::domain::{
    lessons::records::LessonUuid,
    orders::{data::OrderSubmission, records::OrderLine},
};

use crate::{
    extensions::*,
    orders::{
        errors::{INVALID_ORDER, into_status_error},
        handlers::OrderLinePayload,
    },
    state::State,
};

/// Create Order Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateOrderRequest {
    pub name: String,
    pub phone: String,
    pub lessons: Vec<OrderLinePayload>,
}

impl TryFrom<OrderLinePayload> for OrderLine {
    type Error = uuid::Error;

    fn try_from(line: OrderLinePayload) -> Result<Self, Self::Error> {
        Ok(OrderLine {
            lesson: line.lesson_id.parse::<LessonUuid>()?,
            quantity: line.qty,
        })
    }
}

impl TryFrom<CreateOrderRequest> for OrderSubmission {
    type Error = uuid::Error;

    fn try_from(request: CreateOrderRequest) -> Result<Self, Self::Error> {
        Ok(OrderSubmission {
            name: request.name,
            phone: request.phone,
            lines: request
                .lessons
                .into_iter()
                .map(OrderLine::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

/// Order Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderCreatedResponse {
    pub message: String,
    pub order_id: Uuid,
}

/// Create Order Handler
///
/// Records the order. Lesson spaces are adjusted separately by checkout.
#[endpoint(
    tags("orders"),
    summary = "Create Order",
    responses(
        (status_code = StatusCode::CREATED, description = "Order created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid order data"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request = req
        .parse_json::<CreateOrderRequest>()
        .await
        .or_400(INVALID_ORDER)?;

    let submission = OrderSubmission::try_from(request).or_400(INVALID_ORDER)?;

    let uuid = state
        .app
        .orders
        .submit_order(submission)
        .await
        .map_err(into_status_error)?
        .uuid;

    res.add_header(LOCATION, format!("/orders/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(OrderCreatedResponse {
        message: "Order placed successfully".to_string(),
        order_id: uuid.into(),
    }))
}
