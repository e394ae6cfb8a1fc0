//! Lessons service errors.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum LessonsServiceError {
    #[error("invalid lesson data: {0}")]
    Validation(&'static str),

    #[error("lesson not found")]
    NotFound,

    #[error("lesson store unavailable")]
    Unavailable(#[source] StoreError),
}

impl From<StoreError> for LessonsServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound => Self::NotFound,
            StoreError::InvalidData => Self::Validation("rejected by the store"),
            StoreError::OutOfRange(_) => Self::Validation("value out of range"),
            other => Self::Unavailable(other),
        }
    }
}
