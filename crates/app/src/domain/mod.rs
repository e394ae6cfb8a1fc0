//! Afterschool Domain Concerns

pub mod checkout;
pub mod lessons;
pub mod orders;
