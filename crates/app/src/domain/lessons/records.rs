//! Lesson Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Lesson UUID
pub type LessonUuid = TypedUuid<LessonRecord>;

/// Lesson Record
#[derive(Debug, Clone, PartialEq)]
pub struct LessonRecord {
    pub uuid: LessonUuid,
    pub subject: String,
    pub location: String,
    pub price: u64,
    pub image: String,
    pub spaces: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
