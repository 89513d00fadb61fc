//! Domain models for users, categories and transactions.

pub mod category;
pub mod transaction;
pub mod user;
