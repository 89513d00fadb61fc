//! Domain model for an account owner.
use chrono::NaiveDateTime;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    /// Trimmed and lower-cased; unique across accounts
    pub email: String,
    /// Argon2 PHC string
    pub password_hash: String,
    /// Set exactly once after registration
    pub initial_balance: Option<Decimal>,
    pub created_at: NaiveDateTime,
}

impl User {
    /// Aggregation views stay locked until the starting balance is known
    pub fn needs_initial_balance(&self) -> bool {
        self.initial_balance.is_none()
    }
}

/// Fields required to insert a user row
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}
