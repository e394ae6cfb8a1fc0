//! Lesson Handlers

pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

use salvo::{http::StatusError, oapi::ToSchema};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use afterschool_app::domain::lessons::records::{LessonRecord, LessonUuid};

use crate::extensions::*;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LessonResponse {
    /// Lesson identifier
    pub id: Uuid,

    pub subject: String,

    pub location: String,

    /// Price in minor units
    pub price: u64,

    /// Image path relative to `/images`
    pub image: String,

    /// Places still available
    pub spaces: u32,
}

impl From<LessonRecord> for LessonResponse {
    fn from(lesson: LessonRecord) -> Self {
        LessonResponse {
            id: lesson.uuid.into(),
            subject: lesson.subject,
            location: lesson.location,
            price: lesson.price,
            image: lesson.image,
            spaces: lesson.spaces,
        }
    }
}

fn parse_lesson_id(id: &str) -> Result<LessonUuid, StatusError> {
    id.parse().or_400("Invalid lesson id")
}

#[cfg(test)]
pub(crate) mod tests {
    use jiff::Timestamp;

    use super::*;

    pub(crate) fn make_lesson(uuid: LessonUuid, spaces: u32) -> LessonRecord {
        LessonRecord {
            uuid,
            subject: "Math".to_string(),
            location: "Hendon".to_string(),
            price: 100,
            image: "math.png".to_string(),
            spaces,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }
}
