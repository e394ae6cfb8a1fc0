//! Order Handlers

pub(crate) mod create;
pub(crate) mod get;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use afterschool_app::domain::orders::records::{OrderLine, OrderRecord};

/// Ordered lesson line, as sent and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderLinePayload {
    pub lesson_id: String,
    pub qty: u32,
}

impl From<OrderLine> for OrderLinePayload {
    fn from(line: OrderLine) -> Self {
        OrderLinePayload {
            lesson_id: line.lesson.to_string(),
            qty: line.quantity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderResponse {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub lessons: Vec<OrderLinePayload>,

    /// RFC 3339 creation time
    pub created_at: String,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        OrderResponse {
            id: order.uuid.into(),
            name: order.name,
            phone: order.phone,
            lessons: order.lines.into_iter().map(Into::into).collect(),
            created_at: order.created_at.to_string(),
        }
    }
}
