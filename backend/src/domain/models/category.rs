//! Domain model for a spending or income category.
use shared::TransactionType;

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub category_type: TransactionType,
}

/// Categories every new account starts with, in display order
pub const DEFAULT_CATEGORIES: &[(&str, TransactionType)] = &[
    ("Food", TransactionType::Expense),
    ("Transport", TransactionType::Expense),
    ("Entertainment", TransactionType::Expense),
    ("Rent", TransactionType::Expense),
    ("Subscriptions", TransactionType::Expense),
    ("Other", TransactionType::Expense),
    ("Salary", TransactionType::Income),
    ("Freelance", TransactionType::Income),
    ("Gifts", TransactionType::Income),
];
