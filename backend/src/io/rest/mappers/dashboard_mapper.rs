use crate::domain::money::format_currency;
use crate::domain::Dashboard;
use crate::io::rest::mappers::{CategoryMapper, TransactionMapper};
use shared::DashboardResponse;

pub struct DashboardMapper;

impl DashboardMapper {
    pub fn to_response(dashboard: Dashboard) -> DashboardResponse {
        let summary = dashboard.summary;

        DashboardResponse {
            period: dashboard.period,
            today: dashboard.today,
            formatted_balance: format_currency(summary.balance),
            formatted_total_income: format_currency(summary.total_income),
            formatted_total_expense: format_currency(summary.total_expense),
            balance: summary.balance,
            total_income: summary.total_income,
            total_expense: summary.total_expense,
            transactions: TransactionMapper::to_dto_list(summary.recent_transactions),
            top_expenses: TransactionMapper::to_dto_list(summary.top_expenses),
            expense_breakdown: summary.expense_breakdown,
            expense_chart: dashboard.expense_chart,
            income_vs_expense_chart: dashboard.income_vs_expense_chart,
            expense_categories: CategoryMapper::to_dto_list(dashboard.expense_categories),
            income_categories: CategoryMapper::to_dto_list(dashboard.income_categories),
        }
    }
}
