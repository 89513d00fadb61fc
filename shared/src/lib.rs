use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a money movement. Categories and transactions both carry one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in (salary, gifts, ...)
    Income,
    /// Money going out (food, rent, ...)
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// Parse the wire/storage representation. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "income" => Some(TransactionType::Income),
            "expense" => Some(TransactionType::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named time window used to filter transactions on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Week,
    #[default]
    Month,
    Year,
    All,
}

impl Period {
    /// Resolve the `period` query parameter. Missing or unknown selectors fall back to month.
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("week") => Period::Week,
            Some("month") => Period::Month,
            Some("year") => Period::Year,
            Some("all") => Period::All,
            _ => Period::Month,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
            Period::All => "all",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// Public view of an account. Never carries the credential hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Starting balance; `None` until the one-time setup has been done
    pub initial_balance: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: TransactionType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub category_id: i64,
    pub category_name: String,
    /// Always positive; direction comes from `transaction_type`
    pub amount: Decimal,
    /// Amount rendered for display, e.g. "1 234,56 ₽"
    pub formatted_amount: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Sum of expenses for one category name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category_name: String,
    pub total: Decimal,
}

/// Labels and values ready to hand to a chart widget.
/// Values are floats; they are for drawing only and never feed a balance.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

// ---------------------------------------------------------------------------
// Form submissions (application/x-www-form-urlencoded)
//
// Every field is an optional raw string; the domain layer parses and
// validates them into typed commands.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetupBalanceForm {
    pub initial_balance: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionForm {
    pub amount: Option<String>,
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    pub category_id: Option<String>,
    pub description: Option<String>,
    /// Calendar date as YYYY-MM-DD
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardParams {
    pub period: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryParams {
    #[serde(rename = "type")]
    pub category_type: Option<String>,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Returned by register and login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Bearer token for the `Authorization` header
    pub token: String,
    pub user: UserProfile,
    /// True while the account still has no initial balance
    pub needs_initial_balance: bool,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetupBalanceResponse {
    pub initial_balance: Decimal,
    pub formatted_initial_balance: String,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryListResponse {
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub transaction: Transaction,
    pub success_message: String,
}

/// Data needed to render the edit form of a single transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditTransactionView {
    pub transaction: Transaction,
    /// Owner's categories of the same type as the transaction's category
    pub categories: Vec<Category>,
    pub date: NaiveDate,
}

/// Everything the dashboard shows for one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub period: Period,
    /// The date the period window was computed from
    pub today: NaiveDate,
    pub balance: Decimal,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub formatted_balance: String,
    pub formatted_total_income: String,
    pub formatted_total_expense: String,
    /// Newest first, at most 50
    pub transactions: Vec<Transaction>,
    /// Largest expenses first, at most 5
    pub top_expenses: Vec<Transaction>,
    pub expense_breakdown: Vec<CategoryTotal>,
    pub expense_chart: ChartSeries,
    pub income_vs_expense_chart: ChartSeries,
    pub expense_categories: Vec<Category>,
    pub income_categories: Vec<Category>,
}
