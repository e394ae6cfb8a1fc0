//! Orders Repositories

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::orders::{
        data::NewOrder,
        records::{OrderRecord, OrderUuid},
    },
    store::StoreError,
};

mod memory;
mod postgres;

pub use memory::MemoryOrdersRepository;
pub use postgres::PgOrdersRepository;

#[automock]
#[async_trait]
pub trait OrdersRepository: Send + Sync {
    /// Store the order and all of its lines together.
    async fn insert_order(&self, order: NewOrder) -> Result<OrderRecord, StoreError>;

    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, StoreError>;
}
