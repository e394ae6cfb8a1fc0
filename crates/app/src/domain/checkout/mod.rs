//! Checkout

pub mod data;
mod errors;
mod service;

pub use errors::CheckoutServiceError;
pub use service::*;
