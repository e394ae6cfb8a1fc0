//! Store errors and the placeholder store used when no database is configured.

use std::num::TryFromIntError;

use async_trait::async_trait;
use sqlx::error::{DatabaseError, ErrorKind};
use thiserror::Error;

use crate::domain::{
    lessons::{
        data::{LessonUpdate, NewLesson},
        records::{LessonRecord, LessonUuid},
        repositories::LessonsRepository,
    },
    orders::{
        data::NewOrder,
        records::{OrderRecord, OrderUuid},
        repositories::OrdersRepository,
    },
};

/// Failures raised by repository implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("record already exists")]
    AlreadyExists,

    #[error("invalid data")]
    InvalidData,

    #[error("store is not configured")]
    NotConfigured,

    #[error("stored value out of range")]
    OutOfRange(#[from] TryFromIntError),

    #[error("storage error")]
    Sql(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        if matches!(error, sqlx::Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation | ErrorKind::CheckViolation) => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}

/// Store that fails every call with [`StoreError::NotConfigured`].
///
/// Lets the server start without a connection string while every data
/// operation reports the store as unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStore;

#[async_trait]
impl LessonsRepository for UnavailableStore {
    async fn list_lessons(&self) -> Result<Vec<LessonRecord>, StoreError> {
        Err(StoreError::NotConfigured)
    }

    async fn find_lesson(&self, _lesson: LessonUuid) -> Result<Option<LessonRecord>, StoreError> {
        Err(StoreError::NotConfigured)
    }

    async fn decrement_spaces(
        &self,
        _lesson: LessonUuid,
        _quantity: u32,
    ) -> Result<bool, StoreError> {
        Err(StoreError::NotConfigured)
    }

    async fn update_lesson_fields(
        &self,
        _lesson: LessonUuid,
        _update: LessonUpdate,
    ) -> Result<LessonRecord, StoreError> {
        Err(StoreError::NotConfigured)
    }

    async fn create_lesson(&self, _lesson: NewLesson) -> Result<LessonRecord, StoreError> {
        Err(StoreError::NotConfigured)
    }
}

#[async_trait]
impl OrdersRepository for UnavailableStore {
    async fn insert_order(&self, _order: NewOrder) -> Result<OrderRecord, StoreError> {
        Err(StoreError::NotConfigured)
    }

    async fn get_order(&self, _order: OrderUuid) -> Result<OrderRecord, StoreError> {
        Err(StoreError::NotConfigured)
    }
}
