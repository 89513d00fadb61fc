use anyhow::{anyhow, Context, Result};
use chrono::NaiveDateTime;
use shared::TransactionType;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::domain::models::transaction::{Transaction, TransactionFields};
use crate::domain::money::{from_minor_units, to_minor_units};
use crate::storage::connection::{format_timestamp, parse_timestamp, DbConnection};

const SELECT_TRANSACTION: &str = r#"
    SELECT t.id, t.user_id, t.category_id, c.name AS category_name,
           t.amount_cents, t.type, t.description, t.created_at
    FROM transactions t
    JOIN categories c ON c.id = t.category_id
"#;

/// Repository for transaction operations
#[derive(Clone)]
pub struct TransactionRepository {
    db: DbConnection,
}

impl TransactionRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Store a new transaction and return it as read back from the database
    pub async fn insert_transaction(
        &self,
        user_id: i64,
        fields: &TransactionFields,
    ) -> Result<Transaction> {
        let result = sqlx::query(
            r#"
            INSERT INTO transactions (user_id, category_id, amount_cents, type, description, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(fields.category_id)
        .bind(to_minor_units(fields.amount)?)
        .bind(fields.transaction_type.as_str())
        .bind(&fields.description)
        .bind(format_timestamp(&fields.created_at))
        .execute(self.db.pool())
        .await?;

        let id = result.last_insert_rowid();
        self.get_transaction(user_id, id)
            .await?
            .ok_or_else(|| anyhow!("transaction {id} vanished after insert"))
    }

    /// Get one of the user's transactions by id
    pub async fn get_transaction(&self, user_id: i64, id: i64) -> Result<Option<Transaction>> {
        let sql = format!("{SELECT_TRANSACTION} WHERE t.id = ? AND t.user_id = ?");
        let row = sqlx::query(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(self.db.pool())
            .await?;

        row.as_ref().map(row_to_transaction).transpose()
    }

    /// Overwrite the writable fields. Returns `false` if the user has no such transaction.
    pub async fn update_transaction(
        &self,
        user_id: i64,
        id: i64,
        fields: &TransactionFields,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE transactions
            SET category_id = ?, amount_cents = ?, type = ?, description = ?, created_at = ?
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(fields.category_id)
        .bind(to_minor_units(fields.amount)?)
        .bind(fields.transaction_type.as_str())
        .bind(&fields.description)
        .bind(format_timestamp(&fields.created_at))
        .bind(id)
        .bind(user_id)
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Returns `false` if the user has no such transaction
    pub async fn delete_transaction(&self, user_id: i64, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() == 1)
    }

    /// List the user's transactions created at or after `since`, newest first.
    /// `None` lists everything.
    pub async fn list_transactions_since(
        &self,
        user_id: i64,
        since: Option<NaiveDateTime>,
    ) -> Result<Vec<Transaction>> {
        let rows = match since {
            Some(since) => {
                let sql = format!(
                    "{SELECT_TRANSACTION} WHERE t.user_id = ? AND t.created_at >= ? \
                     ORDER BY t.created_at DESC, t.id DESC"
                );
                sqlx::query(&sql)
                    .bind(user_id)
                    .bind(format_timestamp(&since))
                    .fetch_all(self.db.pool())
                    .await?
            }
            None => {
                let sql = format!(
                    "{SELECT_TRANSACTION} WHERE t.user_id = ? ORDER BY t.created_at DESC, t.id DESC"
                );
                sqlx::query(&sql)
                    .bind(user_id)
                    .fetch_all(self.db.pool())
                    .await?
            }
        };

        rows.iter().map(row_to_transaction).collect()
    }
}

fn row_to_transaction(row: &SqliteRow) -> Result<Transaction> {
    let id: i64 = row.get("id");
    let raw_type: String = row.get("type");
    let created_at: String = row.get("created_at");

    Ok(Transaction {
        id,
        user_id: row.get("user_id"),
        category_id: row.get("category_id"),
        category_name: row.get("category_name"),
        amount: from_minor_units(row.get("amount_cents")),
        transaction_type: TransactionType::parse(&raw_type)
            .ok_or_else(|| anyhow!("transaction {id} has unknown type '{raw_type}'"))?,
        description: row.get("description"),
        created_at: parse_timestamp(&created_at)
            .with_context(|| format!("transaction {id}"))?,
    })
}
