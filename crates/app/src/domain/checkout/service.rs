//! Checkout service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::domain::{
    checkout::{
        data::{CartItem, CheckoutLine, CheckoutOutcome, CheckoutReceipt, SkipReason},
        errors::CheckoutServiceError,
    },
    lessons::repositories::LessonsRepository,
};

#[derive(Clone)]
pub struct StoreCheckoutService {
    lessons: Arc<dyn LessonsRepository>,
}

impl StoreCheckoutService {
    #[must_use]
    pub fn new(lessons: Arc<dyn LessonsRepository>) -> Self {
        Self { lessons }
    }

    async fn checkout_item(&self, item: CartItem) -> Result<CheckoutOutcome, CheckoutServiceError> {
        if self
            .lessons
            .decrement_spaces(item.lesson, item.quantity)
            .await?
        {
            return Ok(CheckoutOutcome::Fulfilled);
        }

        let reason = match self.lessons.find_lesson(item.lesson).await? {
            Some(lesson) => SkipReason::InsufficientSpaces {
                available: lesson.spaces,
            },
            None => SkipReason::NotFound,
        };

        tracing::debug!(
            lesson_uuid = %item.lesson,
            quantity = item.quantity,
            ?reason,
            "skipped cart item"
        );

        Ok(CheckoutOutcome::Skipped(reason))
    }
}

fn validate_cart(cart: &[CartItem]) -> Result<(), CheckoutServiceError> {
    if cart.is_empty() {
        return Err(CheckoutServiceError::Validation("cart is empty"));
    }

    if cart.iter().any(|item| item.quantity == 0) {
        return Err(CheckoutServiceError::Validation(
            "quantities must be at least one",
        ));
    }

    Ok(())
}

#[async_trait]
impl CheckoutService for StoreCheckoutService {
    async fn submit_checkout(
        &self,
        cart: Vec<CartItem>,
    ) -> Result<CheckoutReceipt, CheckoutServiceError> {
        validate_cart(&cart)?;

        let mut receipt = CheckoutReceipt {
            lines: Vec::with_capacity(cart.len()),
        };

        // Lines already fulfilled stay applied if a later line fails.
        for item in cart {
            let outcome = self.checkout_item(item).await?;

            receipt.lines.push(CheckoutLine { item, outcome });
        }

        tracing::info!(
            lines = receipt.lines.len(),
            skipped = receipt.skipped(),
            "checkout processed"
        );

        Ok(receipt)
    }
}

#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Decrement spaces for every cart line that can be satisfied.
    ///
    /// Lines that cannot be satisfied are reported as skipped and leave the
    /// lesson untouched.
    async fn submit_checkout(
        &self,
        cart: Vec<CartItem>,
    ) -> Result<CheckoutReceipt, CheckoutServiceError>;
}
