//! Orders Data

use crate::domain::orders::records::{OrderLine, OrderUuid};

/// Customer-submitted order, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSubmission {
    pub name: String,
    pub phone: String,
    pub lines: Vec<OrderLine>,
}

/// Validated order ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub uuid: OrderUuid,
    pub name: String,
    pub phone: String,
    pub lines: Vec<OrderLine>,
}
