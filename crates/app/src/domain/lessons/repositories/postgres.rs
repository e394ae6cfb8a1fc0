//! `PostgreSQL` lessons store.

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::{
    domain::lessons::{
        data::{LessonUpdate, NewLesson},
        records::{LessonRecord, LessonUuid},
        repositories::LessonsRepository,
    },
    store::StoreError,
};

const LIST_LESSONS_SQL: &str = include_str!("sql/list_lessons.sql");
const FIND_LESSON_SQL: &str = include_str!("sql/find_lesson.sql");
const DECREMENT_SPACES_SQL: &str = include_str!("sql/decrement_spaces.sql");
const UPDATE_LESSON_SQL: &str = include_str!("sql/update_lesson.sql");
const CREATE_LESSON_SQL: &str = include_str!("sql/create_lesson.sql");

#[derive(Debug, Clone)]
pub struct PgLessonsRepository {
    pool: PgPool,
}

impl PgLessonsRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LessonsRepository for PgLessonsRepository {
    async fn list_lessons(&self) -> Result<Vec<LessonRecord>, StoreError> {
        query_as::<Postgres, LessonRecord>(LIST_LESSONS_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn find_lesson(&self, lesson: LessonUuid) -> Result<Option<LessonRecord>, StoreError> {
        query_as::<Postgres, LessonRecord>(FIND_LESSON_SQL)
            .bind(lesson.into_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn decrement_spaces(
        &self,
        lesson: LessonUuid,
        quantity: u32,
    ) -> Result<bool, StoreError> {
        let rows_affected = query(DECREMENT_SPACES_SQL)
            .bind(lesson.into_uuid())
            .bind(i64::from(quantity))
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected == 1)
    }

    async fn update_lesson_fields(
        &self,
        lesson: LessonUuid,
        update: LessonUpdate,
    ) -> Result<LessonRecord, StoreError> {
        let price = update.price.map(i64::try_from).transpose()?;

        query_as::<Postgres, LessonRecord>(UPDATE_LESSON_SQL)
            .bind(lesson.into_uuid())
            .bind(update.subject)
            .bind(update.location)
            .bind(price)
            .bind(update.image)
            .bind(update.spaces.map(i64::from))
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn create_lesson(&self, lesson: NewLesson) -> Result<LessonRecord, StoreError> {
        query_as::<Postgres, LessonRecord>(CREATE_LESSON_SQL)
            .bind(lesson.uuid.into_uuid())
            .bind(lesson.subject)
            .bind(lesson.location)
            .bind(i64::try_from(lesson.price)?)
            .bind(lesson.image)
            .bind(i64::from(lesson.spaces))
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }
}

fn column_decode<E>(index: &str, error: E) -> sqlx::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    sqlx::Error::ColumnDecode {
        index: index.to_string(),
        source: Box::new(error),
    }
}

impl<'r> FromRow<'r, PgRow> for LessonRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let price_i64: i64 = row.try_get("price")?;
        let spaces_i64: i64 = row.try_get("spaces")?;

        Ok(Self {
            uuid: LessonUuid::from_uuid(row.try_get("uuid")?),
            subject: row.try_get("subject")?,
            location: row.try_get("location")?,
            price: u64::try_from(price_i64).map_err(|e| column_decode("price", e))?,
            image: row.try_get("image")?,
            spaces: u32::try_from(spaces_i64).map_err(|e| column_decode("spaces", e))?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
