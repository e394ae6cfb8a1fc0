//! Lessons Data

use jiff::Timestamp;

use crate::domain::lessons::records::{LessonRecord, LessonUuid};

/// New Lesson Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewLesson {
    pub uuid: LessonUuid,
    pub subject: String,
    pub location: String,
    pub price: u64,
    pub image: String,
    pub spaces: u32,
}

/// Lesson Update Data
///
/// Only the fields that are `Some` are written; everything else keeps its
/// stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LessonUpdate {
    pub subject: Option<String>,
    pub location: Option<String>,
    pub price: Option<u64>,
    pub image: Option<String>,
    pub spaces: Option<u32>,
}

impl LessonUpdate {
    /// True when the update names no field at all.
    pub fn is_empty(&self) -> bool {
        self.subject.is_none()
            && self.location.is_none()
            && self.price.is_none()
            && self.image.is_none()
            && self.spaces.is_none()
    }

    pub(crate) fn apply_to(&self, lesson: &mut LessonRecord, now: Timestamp) {
        if let Some(subject) = &self.subject {
            lesson.subject.clone_from(subject);
        }

        if let Some(location) = &self.location {
            lesson.location.clone_from(location);
        }

        if let Some(price) = self.price {
            lesson.price = price;
        }

        if let Some(image) = &self.image {
            lesson.image.clone_from(image);
        }

        if let Some(spaces) = self.spaces {
            lesson.spaces = spaces;
        }

        lesson.updated_at = now;
    }
}
