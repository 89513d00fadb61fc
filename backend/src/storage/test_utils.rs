//! Shared fixtures for storage and service tests
//!
//! Every environment gets its own shared-cache in-memory database, so tests
//! never see each other's rows.

use anyhow::{anyhow, Result};
use chrono::{NaiveDate, NaiveDateTime};
use shared::TransactionType;

use super::connection::DbConnection;
use super::repositories::{CategoryRepository, UserRepository};
use crate::domain::models::category::{Category, DEFAULT_CATEGORIES};
use crate::domain::models::user::{NewUser, User};

pub struct TestEnvironment {
    pub connection: DbConnection,
}

impl TestEnvironment {
    pub async fn new() -> Result<Self> {
        Ok(Self {
            connection: DbConnection::init_test().await?,
        })
    }

    /// Register a user with the default categories
    pub async fn seed_user(&self, email: &str) -> Result<User> {
        UserRepository::new(self.connection.clone())
            .create_user(&new_user(email), DEFAULT_CATEGORIES)
            .await?
            .ok_or_else(|| anyhow!("email {email} already seeded"))
    }

    /// Look up one of the user's categories by name
    pub async fn category(&self, user_id: i64, name: &str) -> Result<Category> {
        CategoryRepository::new(self.connection.clone())
            .list_categories(user_id, None)
            .await?
            .into_iter()
            .find(|c| c.name == name)
            .ok_or_else(|| anyhow!("no category {name} for user {user_id}"))
    }
}

pub fn new_user(email: &str) -> NewUser {
    NewUser {
        name: "Test User".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
        created_at: at(2025, 1, 1, 12),
    }
}

pub fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .expect("valid test timestamp")
}

pub fn expense_and_income_counts(categories: &[Category]) -> (usize, usize) {
    let expense = categories
        .iter()
        .filter(|c| c.category_type == TransactionType::Expense)
        .count();
    (expense, categories.len() - expense)
}
