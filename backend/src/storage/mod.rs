//! # Storage Module
//!
//! Persistence for accounts, sessions, categories and transactions.
//!
//! SQLite through SQLx with runtime-checked queries. Money is stored as integer
//! cents and timestamps as fixed-width text, so every conversion between rows
//! and domain models happens in the repositories and nowhere else.
//!
//! Every repository method that touches user data takes the owning `user_id`
//! and filters on it. A row belonging to somebody else is indistinguishable
//! from a missing row.

pub mod connection;
pub mod repositories;

#[cfg(test)]
pub mod test_utils;

pub use connection::{format_timestamp, parse_timestamp, DbConnection, TIMESTAMP_FORMAT};
pub use repositories::{
    CategoryRepository,
    SessionRepository,
    TransactionRepository,
    UserRepository,
};
