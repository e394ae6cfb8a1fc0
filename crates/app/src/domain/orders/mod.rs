//! Orders

pub mod data;
mod errors;
pub mod records;
pub mod repositories;
mod service;

pub use errors::OrdersServiceError;
pub use service::*;
