//! # REST API Interface Layer
//!
//! HTTP endpoints of the finance tracker, all mounted under `/api`.
//!
//! - **account_apis**: register, login, logout, initial balance setup
//! - **dashboard_apis**: the aggregated period view
//! - **category_apis**: the caller's categories
//! - **transaction_apis**: add, edit and delete
//!
//! Everything except register and login sits behind `auth::require_session`,
//! which turns the bearer token into an `AuthUser` request extension.

pub mod account_apis;
pub mod auth;
pub mod category_apis;
pub mod dashboard_apis;
pub mod error;
pub mod mappers;
pub mod transaction_apis;

pub use account_apis::*;
pub use auth::{require_session, AuthUser};
pub use category_apis::*;
pub use dashboard_apis::*;
pub use transaction_apis::*;
