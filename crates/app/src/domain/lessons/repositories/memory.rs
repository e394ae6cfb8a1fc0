//! In-memory lessons store.

use async_trait::async_trait;
use jiff::Timestamp;
use parking_lot::Mutex;

use crate::{
    domain::lessons::{
        data::{LessonUpdate, NewLesson},
        records::{LessonRecord, LessonUuid},
        repositories::LessonsRepository,
    },
    store::StoreError,
};

/// Process-local lessons store, kept in insertion order.
#[derive(Debug, Default)]
pub struct MemoryLessonsRepository {
    lessons: Mutex<Vec<LessonRecord>>,
}

impl MemoryLessonsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LessonsRepository for MemoryLessonsRepository {
    async fn list_lessons(&self) -> Result<Vec<LessonRecord>, StoreError> {
        Ok(self.lessons.lock().clone())
    }

    async fn find_lesson(&self, lesson: LessonUuid) -> Result<Option<LessonRecord>, StoreError> {
        Ok(self
            .lessons
            .lock()
            .iter()
            .find(|record| record.uuid == lesson)
            .cloned())
    }

    async fn decrement_spaces(
        &self,
        lesson: LessonUuid,
        quantity: u32,
    ) -> Result<bool, StoreError> {
        let mut lessons = self.lessons.lock();

        let Some(record) = lessons.iter_mut().find(|record| record.uuid == lesson) else {
            return Ok(false);
        };

        let Some(remaining) = record.spaces.checked_sub(quantity) else {
            return Ok(false);
        };

        record.spaces = remaining;
        record.updated_at = Timestamp::now();

        Ok(true)
    }

    async fn update_lesson_fields(
        &self,
        lesson: LessonUuid,
        update: LessonUpdate,
    ) -> Result<LessonRecord, StoreError> {
        let mut lessons = self.lessons.lock();

        let record = lessons
            .iter_mut()
            .find(|record| record.uuid == lesson)
            .ok_or(StoreError::NotFound)?;

        update.apply_to(record, Timestamp::now());

        Ok(record.clone())
    }

    async fn create_lesson(&self, lesson: NewLesson) -> Result<LessonRecord, StoreError> {
        let mut lessons = self.lessons.lock();

        if lessons.iter().any(|record| record.uuid == lesson.uuid) {
            return Err(StoreError::AlreadyExists);
        }

        let now = Timestamp::now();

        let record = LessonRecord {
            uuid: lesson.uuid,
            subject: lesson.subject,
            location: lesson.location,
            price: lesson.price,
            image: lesson.image,
            spaces: lesson.spaces,
            created_at: now,
            updated_at: now,
        };

        lessons.push(record.clone());

        Ok(record)
    }
}
