//! Test Helpers

use crate::{
    domain::lessons::{
        data::NewLesson,
        records::{LessonRecord, LessonUuid},
        repositories::LessonsRepository,
    },
    store::StoreError,
    test::TestContext,
};

pub(crate) fn new_lesson(subject: &str, spaces: u32) -> NewLesson {
    NewLesson {
        uuid: LessonUuid::new(),
        subject: subject.to_string(),
        location: "Hendon".to_string(),
        price: 100,
        image: format!("{}.png", subject.to_lowercase()),
        spaces,
    }
}

pub(crate) async fn create_lesson(
    ctx: &TestContext,
    subject: &str,
    spaces: u32,
) -> Result<LessonRecord, StoreError> {
    ctx.lessons_repository
        .create_lesson(new_lesson(subject, spaces))
        .await
}

pub(crate) async fn spaces_of(ctx: &TestContext, lesson: LessonUuid) -> Option<u32> {
    ctx.lessons_repository
        .find_lesson(lesson)
        .await
        .ok()
        .flatten()
        .map(|record| record.spaces)
}
