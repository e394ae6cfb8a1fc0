//! Checkout service errors.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum CheckoutServiceError {
    #[error("invalid cart: {0}")]
    Validation(&'static str),

    #[error("lesson store unavailable")]
    Unavailable(#[from] StoreError),
}
