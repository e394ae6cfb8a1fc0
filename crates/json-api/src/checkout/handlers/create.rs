//! Create Checkout Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use afterschool_app::domain::{
    checkout::data::{CartItem, CheckoutLine, CheckoutOutcome, SkipReason},
    lessons::records::LessonUuid,
};

use crate::{
    checkout::errors::{INVALID_CART, into_status_error},
    extensions::*,
    observability::observe_checkout_lines,
    state::State,
};

/// Checkout Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutRequest {
    pub cart: Vec<CartItemRequest>,
}

/// One cart line
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemRequest {
    /// Lesson identifier
    pub id: String,

    /// Places requested
    pub qty: u32,
}

impl TryFrom<CartItemRequest> for CartItem {
    type Error = uuid::Error;

    fn try_from(item: CartItemRequest) -> Result<Self, Self::Error> {
        Ok(CartItem {
            lesson: item.id.parse::<LessonUuid>()?,
            quantity: item.qty,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub(crate) enum CheckoutItemStatus {
    Fulfilled,
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub(crate) enum SkipReasonResponse {
    NotFound,
    InsufficientSpaces,
}

/// Outcome of one cart line
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutItemResponse {
    pub id: Uuid,

    pub qty: u32,

    pub status: CheckoutItemStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<SkipReasonResponse>,

    /// Places left when the line was skipped for lack of space
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<u32>,
}

impl From<CheckoutLine> for CheckoutItemResponse {
    fn from(line: CheckoutLine) -> Self {
        let (status, reason, available) = match line.outcome {
            CheckoutOutcome::Fulfilled => (CheckoutItemStatus::Fulfilled, None, None),
            CheckoutOutcome::Skipped(SkipReason::NotFound) => (
                CheckoutItemStatus::Skipped,
                Some(SkipReasonResponse::NotFound),
                None,
            ),
            CheckoutOutcome::Skipped(SkipReason::InsufficientSpaces { available }) => (
                CheckoutItemStatus::Skipped,
                Some(SkipReasonResponse::InsufficientSpaces),
                Some(available),
            ),
        };

        CheckoutItemResponse {
            id: line.item.lesson.into(),
            qty: line.item.quantity,
            status,
            reason,
            available,
        }
    }
}

/// Checkout Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutResponse {
    pub message: String,

    /// Per-line outcomes, in cart order
    pub items: Vec<CheckoutItemResponse>,
}

/// Checkout Handler
///
/// Decrements lesson spaces for every line that fits. Lines that do not fit
/// are reported as skipped; the checkout itself still succeeds.
#[endpoint(
    tags("checkout"),
    summary = "Checkout Cart",
    responses(
        (status_code = StatusCode::OK, description = "Checkout processed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid cart data"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Checkout failed"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<CheckoutResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart = req
        .parse_json::<CheckoutRequest>()
        .await
        .or_400(INVALID_CART)?
        .cart
        .into_iter()
        .map(CartItem::try_from)
        .collect::<Result<Vec<_>, _>>()
        .or_400(INVALID_CART)?;

    let receipt = state
        .app
        .checkout
        .submit_checkout(cart)
        .await
        .map_err(into_status_error)?;

    let skipped = receipt.skipped();

    observe_checkout_lines(receipt.lines.len().saturating_sub(skipped), skipped);

    Ok(Json(CheckoutResponse {
        message: "Checkout successful!".to_string(),
        items: receipt.lines.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use afterschool_app::{
        domain::checkout::{CheckoutServiceError, MockCheckoutService, data::CheckoutReceipt},
        store::StoreError,
    };

    use crate::{errors::MessageResponse, test_helpers::checkout_service};

    use super::*;

    fn make_service(checkout: MockCheckoutService) -> Service {
        checkout_service(checkout, Router::with_path("checkout").post(handler))
    }

    fn untouched() -> MockCheckoutService {
        let mut checkout = MockCheckoutService::new();

        checkout.expect_submit_checkout().never();

        checkout
    }

    async fn assert_invalid_cart(body: serde_json::Value) -> TestResult {
        let mut res = TestClient::post("http://example.com/checkout")
            .json(&body)
            .send(&make_service(untouched()))
            .await;

        let message: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(message.message, INVALID_CART);

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_reports_each_line() -> TestResult {
        let fulfilled = LessonUuid::new();
        let full = LessonUuid::new();

        let mut checkout = MockCheckoutService::new();

        checkout
            .expect_submit_checkout()
            .once()
            .withf(move |cart| {
                *cart
                    == vec![
                        CartItem {
                            lesson: fulfilled,
                            quantity: 3,
                        },
                        CartItem {
                            lesson: full,
                            quantity: 10,
                        },
                    ]
            })
            .return_once(|cart| {
                let outcomes = [
                    CheckoutOutcome::Fulfilled,
                    CheckoutOutcome::Skipped(SkipReason::InsufficientSpaces { available: 2 }),
                ];

                Ok(CheckoutReceipt {
                    lines: cart
                        .into_iter()
                        .zip(outcomes)
                        .map(|(item, outcome)| CheckoutLine { item, outcome })
                        .collect(),
                })
            });

        let mut res = TestClient::post("http://example.com/checkout")
            .json(&json!({
                "cart": [
                    { "id": fulfilled.to_string(), "qty": 3 },
                    { "id": full.to_string(), "qty": 10 },
                ]
            }))
            .send(&make_service(checkout))
            .await;

        let body: CheckoutResponse = res.take_json().await?;
        let statuses: Vec<_> = body.items.iter().map(|i| i.status).collect();

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.message, "Checkout successful!");
        assert_eq!(
            statuses,
            vec![CheckoutItemStatus::Fulfilled, CheckoutItemStatus::Skipped]
        );
        assert_eq!(
            body.items.last().and_then(|i| i.reason),
            Some(SkipReasonResponse::InsufficientSpaces)
        );
        assert_eq!(body.items.last().and_then(|i| i.available), Some(2));

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_missing_cart_returns_400() -> TestResult {
        assert_invalid_cart(json!({ "items": [] })).await
    }

    #[tokio::test]
    async fn test_checkout_non_array_cart_returns_400() -> TestResult {
        assert_invalid_cart(json!({ "cart": "L1" })).await
    }

    #[tokio::test]
    async fn test_checkout_malformed_lesson_id_returns_400() -> TestResult {
        assert_invalid_cart(json!({ "cart": [{ "id": "L1", "qty": 1 }] })).await
    }

    #[tokio::test]
    async fn test_checkout_negative_quantity_returns_400() -> TestResult {
        assert_invalid_cart(json!({
            "cart": [{ "id": LessonUuid::new().to_string(), "qty": -2 }]
        }))
        .await
    }

    #[tokio::test]
    async fn test_checkout_validation_error_returns_400() -> TestResult {
        let mut checkout = MockCheckoutService::new();

        checkout
            .expect_submit_checkout()
            .once()
            .return_once(|_| Err(CheckoutServiceError::Validation("cart is empty")));

        let mut res = TestClient::post("http://example.com/checkout")
            .json(&json!({ "cart": [] }))
            .send(&make_service(checkout))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, INVALID_CART);

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_store_failure_returns_500() -> TestResult {
        let mut checkout = MockCheckoutService::new();

        checkout
            .expect_submit_checkout()
            .once()
            .return_once(|_| Err(CheckoutServiceError::Unavailable(StoreError::NotConfigured)));

        let mut res = TestClient::post("http://example.com/checkout")
            .json(&json!({ "cart": [{ "id": LessonUuid::new().to_string(), "qty": 1 }] }))
            .send(&make_service(checkout))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body.message, "Checkout failed");

        Ok(())
    }
}
