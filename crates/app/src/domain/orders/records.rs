//! Order Records

use jiff::Timestamp;

use crate::{domain::lessons::records::LessonUuid, uuids::TypedUuid};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// One ordered lesson and how many places were asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub lesson: LessonUuid,
    pub quantity: u32,
}

/// Order Record
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub name: String,
    pub phone: String,
    pub lines: Vec<OrderLine>,
    pub created_at: Timestamp,
}
