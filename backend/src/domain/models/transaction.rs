//! Domain model for a recorded income or expense.
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use shared::TransactionType;

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: i64,
    pub user_id: i64,
    pub category_id: i64,
    /// Name of the referenced category, joined in at read time
    pub category_name: String,
    /// Strictly positive, two fractional digits
    pub amount: Decimal,
    pub transaction_type: TransactionType,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }
}

/// Writable columns of a transaction, shared by insert and update
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionFields {
    pub category_id: i64,
    pub amount: Decimal,
    pub transaction_type: TransactionType,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}
