//! In-memory orders store.

use async_trait::async_trait;
use jiff::Timestamp;
use parking_lot::Mutex;

use crate::{
    domain::orders::{
        data::NewOrder,
        records::{OrderRecord, OrderUuid},
        repositories::OrdersRepository,
    },
    store::StoreError,
};

#[derive(Debug, Default)]
pub struct MemoryOrdersRepository {
    orders: Mutex<Vec<OrderRecord>>,
}

impl MemoryOrdersRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored orders.
    pub fn len(&self) -> usize {
        self.orders.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.lock().is_empty()
    }
}

#[async_trait]
impl OrdersRepository for MemoryOrdersRepository {
    async fn insert_order(&self, order: NewOrder) -> Result<OrderRecord, StoreError> {
        let mut orders = self.orders.lock();

        if orders.iter().any(|record| record.uuid == order.uuid) {
            return Err(StoreError::AlreadyExists);
        }

        let record = OrderRecord {
            uuid: order.uuid,
            name: order.name,
            phone: order.phone,
            lines: order.lines,
            created_at: Timestamp::now(),
        };

        orders.push(record.clone());

        Ok(record)
    }

    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, StoreError> {
        self.orders
            .lock()
            .iter()
            .find(|record| record.uuid == order)
            .cloned()
            .ok_or(StoreError::NotFound)
    }
}
