//! Checkout Errors

use salvo::http::StatusError;
use tracing::error;

use afterschool_app::domain::checkout::CheckoutServiceError;

pub(crate) const INVALID_CART: &str = "Invalid cart data";

pub(crate) fn into_status_error(error: CheckoutServiceError) -> StatusError {
    match error {
        CheckoutServiceError::Validation(_) => StatusError::bad_request().brief(INVALID_CART),
        CheckoutServiceError::Unavailable(source) => {
            error!("checkout failed: {source}");

            StatusError::internal_server_error().brief("Checkout failed")
        }
    }
}
