//! `PostgreSQL` orders store.

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{PgPool, Row, query, query_scalar};
use uuid::Uuid;

use crate::{
    domain::{
        lessons::records::LessonUuid,
        orders::{
            data::NewOrder,
            records::{OrderLine, OrderRecord, OrderUuid},
            repositories::OrdersRepository,
        },
    },
    store::StoreError,
};

const INSERT_ORDER_SQL: &str = include_str!("sql/insert_order.sql");
const INSERT_ORDER_LINES_SQL: &str = include_str!("sql/insert_order_lines.sql");
const GET_ORDER_SQL: &str = include_str!("sql/get_order.sql");
const GET_ORDER_LINES_SQL: &str = include_str!("sql/get_order_lines.sql");

#[derive(Debug, Clone)]
pub struct PgOrdersRepository {
    pool: PgPool,
}

impl PgOrdersRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrdersRepository for PgOrdersRepository {
    async fn insert_order(&self, order: NewOrder) -> Result<OrderRecord, StoreError> {
        let mut positions = Vec::with_capacity(order.lines.len());
        let mut lessons = Vec::with_capacity(order.lines.len());
        let mut quantities = Vec::with_capacity(order.lines.len());

        for (position, line) in order.lines.iter().enumerate() {
            positions.push(i32::try_from(position)?);
            lessons.push(line.lesson.into_uuid());
            quantities.push(i64::from(line.quantity));
        }

        let mut tx = self.pool.begin().await?;

        let created_at: SqlxTimestamp = query_scalar(INSERT_ORDER_SQL)
            .bind(order.uuid.into_uuid())
            .bind(&order.name)
            .bind(&order.phone)
            .fetch_one(&mut *tx)
            .await?;

        query(INSERT_ORDER_LINES_SQL)
            .bind(order.uuid.into_uuid())
            .bind(positions)
            .bind(lessons)
            .bind(quantities)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(OrderRecord {
            uuid: order.uuid,
            name: order.name,
            phone: order.phone,
            lines: order.lines,
            created_at: created_at.to_jiff(),
        })
    }

    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, StoreError> {
        let row = query(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_one(&self.pool)
            .await?;

        let line_rows = query(GET_ORDER_LINES_SQL)
            .bind(order.into_uuid())
            .fetch_all(&self.pool)
            .await?;

        let mut lines = Vec::with_capacity(line_rows.len());

        for line in line_rows {
            let lesson: Uuid = line.try_get("lesson_uuid")?;
            let quantity: i64 = line.try_get("quantity")?;

            lines.push(OrderLine {
                lesson: LessonUuid::from_uuid(lesson),
                quantity: u32::try_from(quantity)?,
            });
        }

        Ok(OrderRecord {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            phone: row.try_get("phone")?,
            lines,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
