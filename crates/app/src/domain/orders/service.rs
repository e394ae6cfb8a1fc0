//! Orders service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::domain::orders::{
    data::{NewOrder, OrderSubmission},
    errors::OrdersServiceError,
    records::{OrderRecord, OrderUuid},
    repositories::OrdersRepository,
};

#[derive(Clone)]
pub struct StoreOrdersService {
    repository: Arc<dyn OrdersRepository>,
}

impl StoreOrdersService {
    #[must_use]
    pub fn new(repository: Arc<dyn OrdersRepository>) -> Self {
        Self { repository }
    }
}

fn validate_submission(submission: &OrderSubmission) -> Result<(), OrdersServiceError> {
    if submission.name.trim().is_empty() {
        return Err(OrdersServiceError::Validation("name is required"));
    }

    if submission.phone.trim().is_empty() {
        return Err(OrdersServiceError::Validation("phone is required"));
    }

    if submission.lines.is_empty() {
        return Err(OrdersServiceError::Validation(
            "order must contain at least one lesson",
        ));
    }

    if submission.lines.iter().any(|line| line.quantity == 0) {
        return Err(OrdersServiceError::Validation(
            "quantities must be at least one",
        ));
    }

    Ok(())
}

#[async_trait]
impl OrdersService for StoreOrdersService {
    async fn submit_order(
        &self,
        submission: OrderSubmission,
    ) -> Result<OrderRecord, OrdersServiceError> {
        validate_submission(&submission)?;

        let order = self
            .repository
            .insert_order(NewOrder {
                uuid: OrderUuid::new(),
                name: submission.name.trim().to_string(),
                phone: submission.phone.trim().to_string(),
                lines: submission.lines,
            })
            .await?;

        tracing::info!(order_uuid = %order.uuid, lines = order.lines.len(), "order placed");

        Ok(order)
    }

    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError> {
        Ok(self.repository.get_order(order).await?)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Validate and record a customer order. Lesson spaces are not touched.
    async fn submit_order(
        &self,
        submission: OrderSubmission,
    ) -> Result<OrderRecord, OrdersServiceError>;

    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError>;
}
