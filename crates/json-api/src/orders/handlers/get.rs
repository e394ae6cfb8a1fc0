//! Get Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use afterschool_app::domain::orders::records::OrderUuid;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, handlers::OrderResponse},
    state::State,
};

/// Get Order Handler
#[endpoint(
    tags("orders"),
    summary = "Get Order",
    responses(
        (status_code = StatusCode::OK, description = "Order found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid order id"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let order: OrderUuid = id.into_inner().parse().or_400("Invalid order id")?;

    let order = state
        .app
        .orders
        .get_order(order)
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use afterschool_app::domain::{
        lessons::records::LessonUuid,
        orders::{MockOrdersService, OrdersServiceError, records::OrderLine},
    };

    use crate::{
        errors::MessageResponse,
        orders::handlers::{OrderLinePayload, tests::make_order},
        test_helpers::orders_service,
    };

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        orders_service(orders, Router::with_path("orders/{id}").get(handler))
    }

    #[tokio::test]
    async fn test_get_order_success() -> TestResult {
        let uuid = OrderUuid::new();
        let lesson = LessonUuid::new();

        let mut orders = MockOrdersService::new();

        orders
            .expect_get_order()
            .once()
            .withf(move |id| *id == uuid)
            .return_once(move |_| {
                Ok(make_order(
                    uuid,
                    vec![OrderLine {
                        lesson,
                        quantity: 3,
                    }],
                ))
            });

        orders.expect_submit_order().never();

        let mut res = TestClient::get(format!("http://example.com/orders/{uuid}"))
            .send(&make_service(orders))
            .await;

        let body: OrderResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, uuid.into_uuid());
        assert_eq!(
            body.lessons,
            vec![OrderLinePayload {
                lesson_id: lesson.to_string(),
                qty: 3,
            }]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_get_order_unknown_returns_404() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_get_order()
            .once()
            .return_once(|_| Err(OrdersServiceError::NotFound));

        orders.expect_submit_order().never();

        let mut res = TestClient::get(format!("http://example.com/orders/{}", OrderUuid::new()))
            .send(&make_service(orders))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.message, "Order not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_order_invalid_id_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_get_order().never();
        orders.expect_submit_order().never();

        let res = TestClient::get("http://example.com/orders/not-an-id")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
