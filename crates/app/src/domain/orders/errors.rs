//! Orders service errors.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("invalid order: {0}")]
    Validation(&'static str),

    #[error("order not found")]
    NotFound,

    #[error("order store unavailable")]
    Unavailable(#[source] StoreError),
}

impl From<StoreError> for OrdersServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound => Self::NotFound,
            StoreError::InvalidData => Self::Validation("rejected by the store"),
            StoreError::OutOfRange(_) => Self::Validation("value out of range"),
            other => Self::Unavailable(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_values_are_validation_errors() {
        let store_error = u32::try_from(-1_i64).map_err(StoreError::from);

        let result = store_error.map_err(OrdersServiceError::from);

        assert!(
            matches!(result, Err(OrdersServiceError::Validation(_))),
            "expected Validation, got {result:?}"
        );
    }
}
