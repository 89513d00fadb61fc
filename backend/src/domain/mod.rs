//! # Domain Module
//!
//! Business rules of the finance tracker, independent of HTTP and SQL.
//!
//! ## Module Organization
//!
//! - **money**: locale-tolerant decimal parsing, storage units and display formatting
//! - **period**: turning a period name into a start timestamp
//! - **aggregation**: pure totals, breakdowns and chart series over loaded transactions
//! - **commands**: parse-then-validate conversion of raw form fields into typed commands
//! - **credentials**: password hashing and session tokens
//! - **account_service**: registration, login, logout and the one-time initial balance
//! - **category_service**: listing a user's categories
//! - **transaction_service**: add, edit and delete of transactions
//! - **dashboard_service**: the aggregated view for a period
//!
//! ## Business Rules
//!
//! - Amounts are exact decimals with two fractional digits; transaction amounts are positive
//! - A transaction's type always matches the type of its category
//! - Users only ever see and modify their own categories and transactions
//! - The initial balance is recorded exactly once and gates the dashboard
//! - Services receive the current time through `RequestContext`; nothing reads the clock itself

pub mod account_service;
pub mod aggregation;
pub mod category_service;
pub mod commands;
pub mod credentials;
pub mod dashboard_service;
pub mod errors;
pub mod models;
pub mod money;
pub mod period;
pub mod transaction_service;

pub use account_service::{AccountService, Session};
pub use category_service::CategoryService;
pub use commands::RequestContext;
pub use dashboard_service::{Dashboard, DashboardService};
pub use errors::{DomainError, DomainResult, ValidationError};
pub use transaction_service::{EditView, TransactionService};
