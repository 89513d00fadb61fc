//! Period aggregation of transactions.
//!
//! Everything here is a pure function over already-loaded transactions so the
//! dashboard numbers can be checked without a database. Sums use `Decimal`;
//! floats only appear in the chart series.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use shared::{CategoryTotal, ChartSeries, TransactionType};
use std::collections::HashMap;

use crate::domain::models::transaction::Transaction;
use crate::domain::period::PeriodWindow;

pub const TOP_EXPENSES_LIMIT: usize = 5;
pub const RECENT_TRANSACTIONS_LIMIT: usize = 50;

pub const INCOME_LABEL: &str = "Income";
pub const EXPENSE_LABEL: &str = "Expense";

/// Aggregated figures for one user and one window
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodSummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    /// initial balance + income - expense
    pub balance: Decimal,
    pub expense_breakdown: Vec<CategoryTotal>,
    pub top_expenses: Vec<Transaction>,
    pub recent_transactions: Vec<Transaction>,
}

/// Aggregate the transactions that fall inside `window`.
///
/// Transactions outside the window are ignored even if the caller passed them in.
pub fn summarize(
    initial_balance: Decimal,
    window: &PeriodWindow,
    transactions: &[Transaction],
) -> PeriodSummary {
    let in_window: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| window.contains(t.created_at))
        .collect();

    let total_income = total_for(&in_window, TransactionType::Income);
    let total_expense = total_for(&in_window, TransactionType::Expense);

    PeriodSummary {
        total_income,
        total_expense,
        balance: balance(initial_balance, total_income, total_expense),
        expense_breakdown: expense_breakdown(&in_window),
        top_expenses: top_expenses(&in_window, TOP_EXPENSES_LIMIT),
        recent_transactions: recent_transactions(&in_window, RECENT_TRANSACTIONS_LIMIT),
    }
}

pub fn balance(initial_balance: Decimal, total_income: Decimal, total_expense: Decimal) -> Decimal {
    initial_balance + total_income - total_expense
}

/// Sum of amounts of one type; zero when there are none.
pub fn total_for(transactions: &[&Transaction], transaction_type: TransactionType) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.transaction_type == transaction_type)
        .map(|t| t.amount)
        .sum()
}

/// Expense totals grouped by category name, largest first, ties by name.
pub fn expense_breakdown(transactions: &[&Transaction]) -> Vec<CategoryTotal> {
    let mut totals: HashMap<&str, Decimal> = HashMap::new();
    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        *totals
            .entry(transaction.category_name.as_str())
            .or_insert(Decimal::ZERO) += transaction.amount;
    }

    let mut breakdown: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(name, total)| CategoryTotal {
            category_name: name.to_string(),
            total,
        })
        .collect();
    breakdown.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| a.category_name.cmp(&b.category_name))
    });
    breakdown
}

/// The `limit` largest expenses, descending by amount.
/// Equal amounts keep newest first.
pub fn top_expenses(transactions: &[&Transaction], limit: usize) -> Vec<Transaction> {
    let mut expenses: Vec<&Transaction> = transactions
        .iter()
        .copied()
        .filter(|t| t.is_expense())
        .collect();
    expenses.sort_by(|a, b| {
        b.amount
            .cmp(&a.amount)
            .then_with(|| newest_first(a, b))
    });
    expenses.into_iter().take(limit).cloned().collect()
}

/// The `limit` newest transactions of any type.
pub fn recent_transactions(transactions: &[&Transaction], limit: usize) -> Vec<Transaction> {
    let mut recent: Vec<&Transaction> = transactions.to_vec();
    recent.sort_by(|a, b| newest_first(a, b));
    recent.into_iter().take(limit).cloned().collect()
}

pub fn expense_chart(breakdown: &[CategoryTotal]) -> ChartSeries {
    ChartSeries {
        labels: breakdown.iter().map(|c| c.category_name.clone()).collect(),
        values: breakdown.iter().map(|c| chart_value(c.total)).collect(),
    }
}

pub fn income_vs_expense_chart(total_income: Decimal, total_expense: Decimal) -> ChartSeries {
    ChartSeries {
        labels: vec![INCOME_LABEL.to_string(), EXPENSE_LABEL.to_string()],
        values: vec![chart_value(total_income), chart_value(total_expense)],
    }
}

fn chart_value(amount: Decimal) -> f64 {
    amount.to_f64().unwrap_or(0.0)
}

fn newest_first(a: &Transaction, b: &Transaction) -> std::cmp::Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| b.id.cmp(&a.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal_macros::dec;
    use shared::Period;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn tx(
        id: i64,
        transaction_type: TransactionType,
        category: &str,
        amount: Decimal,
        created_at: NaiveDateTime,
    ) -> Transaction {
        Transaction {
            id,
            user_id: 1,
            category_id: id,
            category_name: category.to_string(),
            amount,
            transaction_type,
            description: None,
            created_at,
        }
    }

    fn march_window() -> PeriodWindow {
        PeriodWindow::resolve(Period::Month, NaiveDate::from_ymd_opt(2025, 3, 20).unwrap())
    }

    #[test]
    fn test_scenario_month_balance() {
        let transactions = vec![
            tx(1, TransactionType::Expense, "Food", dec!(200.00), at(10, 12)),
            tx(2, TransactionType::Income, "Salary", dec!(500.00), at(11, 9)),
        ];

        let summary = summarize(dec!(1000.00), &march_window(), &transactions);

        assert_eq!(summary.total_income, dec!(500.00));
        assert_eq!(summary.total_expense, dec!(200.00));
        assert_eq!(summary.balance, dec!(1300.00));
    }

    #[test]
    fn test_empty_window_yields_zero_totals() {
        let summary = summarize(dec!(42.10), &march_window(), &[]);
        assert_eq!(summary.total_income, Decimal::ZERO);
        assert_eq!(summary.total_expense, Decimal::ZERO);
        assert_eq!(summary.balance, dec!(42.10));
        assert!(summary.expense_breakdown.is_empty());
        assert!(summary.top_expenses.is_empty());
        assert!(summary.recent_transactions.is_empty());
    }

    #[test]
    fn test_transactions_outside_window_are_ignored() {
        let before_march = NaiveDate::from_ymd_opt(2025, 2, 28)
            .unwrap()
            .and_hms_opt(23, 0, 0)
            .unwrap();
        let transactions = vec![
            tx(1, TransactionType::Expense, "Rent", dec!(900), before_march),
            tx(2, TransactionType::Expense, "Food", dec!(15.50), at(1, 0)),
        ];

        let summary = summarize(dec!(0), &march_window(), &transactions);

        assert_eq!(summary.total_expense, dec!(15.50));
        assert_eq!(summary.top_expenses.len(), 1);
        assert_eq!(summary.top_expenses[0].id, 2);
        assert_eq!(summary.recent_transactions.len(), 1);
    }

    #[test]
    fn test_balance_identity_holds_for_every_period() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
        let transactions = vec![
            tx(1, TransactionType::Income, "Salary", dec!(0.10), at(19, 8)),
            tx(2, TransactionType::Expense, "Food", dec!(0.20), at(2, 8)),
            tx(
                3,
                TransactionType::Income,
                "Gifts",
                dec!(1000000.01),
                NaiveDate::from_ymd_opt(2025, 1, 5).unwrap().and_hms_opt(0, 0, 0).unwrap(),
            ),
            tx(
                4,
                TransactionType::Expense,
                "Rent",
                dec!(333.33),
                NaiveDate::from_ymd_opt(2023, 6, 1).unwrap().and_hms_opt(0, 0, 0).unwrap(),
            ),
        ];

        for period in [Period::Week, Period::Month, Period::Year, Period::All] {
            let window = PeriodWindow::resolve(period, today);
            let summary = summarize(dec!(-50.05), &window, &transactions);
            assert_eq!(
                summary.balance,
                dec!(-50.05) + summary.total_income - summary.total_expense,
                "period {}",
                period
            );
        }

        let all = summarize(dec!(0), &PeriodWindow::resolve(Period::All, today), &transactions);
        assert_eq!(all.total_income, dec!(1000000.11));
        assert_eq!(all.total_expense, dec!(333.53));
    }

    #[test]
    fn test_expense_breakdown_groups_by_category_name() {
        let transactions = vec![
            tx(1, TransactionType::Expense, "Food", dec!(10), at(1, 1)),
            tx(2, TransactionType::Expense, "Transport", dec!(30), at(2, 1)),
            tx(3, TransactionType::Expense, "Food", dec!(25.5), at(3, 1)),
            tx(4, TransactionType::Income, "Salary", dec!(1000), at(4, 1)),
            tx(5, TransactionType::Expense, "Rent", dec!(30), at(5, 1)),
        ];

        let summary = summarize(dec!(0), &march_window(), &transactions);

        assert_eq!(
            summary.expense_breakdown,
            vec![
                CategoryTotal { category_name: "Food".to_string(), total: dec!(35.5) },
                CategoryTotal { category_name: "Rent".to_string(), total: dec!(30) },
                CategoryTotal { category_name: "Transport".to_string(), total: dec!(30) },
            ]
        );
    }

    #[test]
    fn test_top_expenses_limited_and_sorted() {
        let amounts = [dec!(5), dec!(70), dec!(12.5), dec!(300), dec!(1), dec!(45), dec!(70.01)];
        let mut transactions: Vec<Transaction> = amounts
            .iter()
            .enumerate()
            .map(|(i, amount)| {
                tx(i as i64 + 1, TransactionType::Expense, "Food", *amount, at(i as u32 + 1, 10))
            })
            .collect();
        transactions.push(tx(99, TransactionType::Income, "Salary", dec!(5000), at(15, 10)));

        let summary = summarize(dec!(0), &march_window(), &transactions);
        let top: Vec<Decimal> = summary.top_expenses.iter().map(|t| t.amount).collect();

        assert_eq!(top, vec![dec!(300), dec!(70.01), dec!(70), dec!(45), dec!(12.5)]);
        assert!(summary.top_expenses.iter().all(|t| t.is_expense()));
    }

    #[test]
    fn test_recent_transactions_newest_first_and_capped() {
        let transactions: Vec<Transaction> = (0..60)
            .map(|i| {
                let created_at = at(1 + (i / 24) as u32, (i % 24) as u32);
                tx(i + 1, TransactionType::Income, "Salary", dec!(1), created_at)
            })
            .collect();

        let summary = summarize(dec!(0), &march_window(), &transactions);

        assert_eq!(summary.recent_transactions.len(), RECENT_TRANSACTIONS_LIMIT);
        assert_eq!(summary.recent_transactions[0].id, 60);
        assert!(summary
            .recent_transactions
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at));
    }

    #[test]
    fn test_chart_series() {
        let breakdown = vec![
            CategoryTotal { category_name: "Food".to_string(), total: dec!(35.5) },
            CategoryTotal { category_name: "Rent".to_string(), total: dec!(30) },
        ];
        let chart = expense_chart(&breakdown);
        assert_eq!(chart.labels, vec!["Food", "Rent"]);
        assert_eq!(chart.values, vec![35.5, 30.0]);

        let pair = income_vs_expense_chart(dec!(500), dec!(200.25));
        assert_eq!(pair.labels, vec![INCOME_LABEL, EXPENSE_LABEL]);
        assert_eq!(pair.values, vec![500.0, 200.25]);
    }
}
