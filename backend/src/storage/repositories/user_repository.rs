use anyhow::{anyhow, Result};
use rust_decimal::Decimal;
use shared::TransactionType;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::{info, warn};

use crate::domain::models::user::{NewUser, User};
use crate::domain::money::{from_minor_units, to_minor_units};
use crate::storage::connection::{format_timestamp, parse_timestamp, DbConnection};

/// Repository for account rows
#[derive(Clone)]
pub struct UserRepository {
    db: DbConnection,
}

impl UserRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Insert a user together with their starting categories.
    ///
    /// Both inserts share one transaction. Returns `None` when the email is
    /// already taken.
    pub async fn create_user(
        &self,
        user: &NewUser,
        categories: &[(&str, TransactionType)],
    ) -> Result<Option<User>> {
        let mut tx = self.db.pool().begin().await?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO users (name, email, password_hash, initial_balance_cents, created_at)
            VALUES (?, ?, ?, NULL, ?)
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(format_timestamp(&user.created_at))
        .execute(&mut *tx)
        .await;

        let user_id = match inserted {
            Ok(result) => result.last_insert_rowid(),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                warn!("Registration rejected, email already in use: {}", user.email);
                tx.rollback().await?;
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        for (name, category_type) in categories {
            sqlx::query("INSERT INTO categories (user_id, name, type) VALUES (?, ?, ?)")
                .bind(user_id)
                .bind(*name)
                .bind(category_type.as_str())
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        info!("Created user {} with {} categories", user_id, categories.len());

        Ok(Some(User {
            id: user_id,
            name: user.name.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            initial_balance: None,
            created_at: user.created_at,
        }))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, password_hash, initial_balance_cents, created_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(row_to_user).transpose()
    }

    pub async fn get_user(&self, user_id: i64) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, password_hash, initial_balance_cents, created_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(row_to_user).transpose()
    }

    /// Record the starting balance unless one is already stored.
    ///
    /// Returns `false` if the balance was set before (or the user is gone).
    pub async fn set_initial_balance_once(&self, user_id: i64, balance: Decimal) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET initial_balance_cents = ?
            WHERE id = ? AND initial_balance_cents IS NULL
            "#,
        )
        .bind(to_minor_units(balance)?)
        .bind(user_id)
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected() == 1)
    }
}

fn row_to_user(row: &SqliteRow) -> Result<User> {
    let created_at: String = row.get("created_at");
    let initial_balance: Option<i64> = row.get("initial_balance_cents");
    let id: i64 = row.get("id");

    Ok(User {
        id,
        name: row.get("name"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        initial_balance: initial_balance.map(from_minor_units),
        created_at: parse_timestamp(&created_at)
            .map_err(|e| anyhow!("user {id}: {e}"))?,
    })
}
