//! Lessons Repositories

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::lessons::{
        data::{LessonUpdate, NewLesson},
        records::{LessonRecord, LessonUuid},
    },
    store::StoreError,
};

mod memory;
mod postgres;

pub use memory::MemoryLessonsRepository;
pub use postgres::PgLessonsRepository;

#[automock]
#[async_trait]
pub trait LessonsRepository: Send + Sync {
    /// All lessons, oldest first.
    async fn list_lessons(&self) -> Result<Vec<LessonRecord>, StoreError>;

    async fn find_lesson(&self, lesson: LessonUuid) -> Result<Option<LessonRecord>, StoreError>;

    /// Subtract `quantity` from the lesson's spaces when at least that many
    /// remain. Returns `false` when nothing was changed.
    async fn decrement_spaces(&self, lesson: LessonUuid, quantity: u32)
    -> Result<bool, StoreError>;

    async fn update_lesson_fields(
        &self,
        lesson: LessonUuid,
        update: LessonUpdate,
    ) -> Result<LessonRecord, StoreError>;

    async fn create_lesson(&self, lesson: NewLesson) -> Result<LessonRecord, StoreError>;
}
