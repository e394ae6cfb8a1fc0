//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use afterschool_app::domain::orders::OrdersServiceError;

pub(crate) const INVALID_ORDER: &str = "Invalid order data";

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::Validation(reason) => {
            StatusError::bad_request().brief(format!("{INVALID_ORDER}: {reason}"))
        }
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::Unavailable(source) => {
            error!("order store unavailable: {source}");

            StatusError::internal_server_error().brief("Order could not be saved")
        }
    }
}
