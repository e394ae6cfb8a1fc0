//! Lessons service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::domain::lessons::{
    data::LessonUpdate,
    errors::LessonsServiceError,
    records::{LessonRecord, LessonUuid},
    repositories::LessonsRepository,
};

#[derive(Clone)]
pub struct StoreLessonsService {
    repository: Arc<dyn LessonsRepository>,
}

impl StoreLessonsService {
    #[must_use]
    pub fn new(repository: Arc<dyn LessonsRepository>) -> Self {
        Self { repository }
    }
}

/// Largest price the store can hold.
pub const MAX_PRICE: u64 = i64::MAX.unsigned_abs();

fn validate_update(update: &LessonUpdate) -> Result<(), LessonsServiceError> {
    if update.is_empty() {
        return Err(LessonsServiceError::Validation(
            "update must name at least one lesson field",
        ));
    }

    let blank = |value: &Option<String>| value.as_deref().is_some_and(|v| v.trim().is_empty());

    if blank(&update.subject) || blank(&update.location) {
        return Err(LessonsServiceError::Validation(
            "subject and location must not be blank",
        ));
    }

    if update.price.is_some_and(|price| price > MAX_PRICE) {
        return Err(LessonsServiceError::Validation("price is out of range"));
    }

    Ok(())
}

#[async_trait]
impl LessonsService for StoreLessonsService {
    async fn list_lessons(&self) -> Result<Vec<LessonRecord>, LessonsServiceError> {
        Ok(self.repository.list_lessons().await?)
    }

    async fn get_lesson(&self, lesson: LessonUuid) -> Result<LessonRecord, LessonsServiceError> {
        self.repository
            .find_lesson(lesson)
            .await?
            .ok_or(LessonsServiceError::NotFound)
    }

    async fn update_lesson(
        &self,
        lesson: LessonUuid,
        update: LessonUpdate,
    ) -> Result<LessonRecord, LessonsServiceError> {
        validate_update(&update)?;

        let updated = self.repository.update_lesson_fields(lesson, update).await?;

        tracing::info!(lesson_uuid = %lesson, spaces = updated.spaces, "updated lesson");

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait LessonsService: Send + Sync {
    /// Retrieves all lessons.
    async fn list_lessons(&self) -> Result<Vec<LessonRecord>, LessonsServiceError>;

    /// Retrieve a single lesson.
    async fn get_lesson(&self, lesson: LessonUuid) -> Result<LessonRecord, LessonsServiceError>;

    /// Merge the named fields into the lesson.
    async fn update_lesson(
        &self,
        lesson: LessonUuid,
        update: LessonUpdate,
    ) -> Result<LessonRecord, LessonsServiceError>;
}
