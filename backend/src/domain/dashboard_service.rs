use chrono::NaiveDate;
use shared::{ChartSeries, Period};
use tracing::{info, warn};

use crate::domain::aggregation::{expense_chart, income_vs_expense_chart, summarize, PeriodSummary};
use crate::domain::category_service::CategoryService;
use crate::domain::commands::dashboard::DashboardQuery;
use crate::domain::commands::RequestContext;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::category::Category;
use crate::domain::period::PeriodWindow;
use crate::storage::{TransactionRepository, UserRepository};

/// Everything the dashboard page shows for one period
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub period: Period,
    pub today: NaiveDate,
    pub summary: PeriodSummary,
    pub expense_chart: ChartSeries,
    pub income_vs_expense_chart: ChartSeries,
    pub expense_categories: Vec<Category>,
    pub income_categories: Vec<Category>,
}

/// Service assembling the aggregated period view
#[derive(Clone)]
pub struct DashboardService {
    users: UserRepository,
    transactions: TransactionRepository,
    category_service: CategoryService,
}

impl DashboardService {
    pub fn new(
        users: UserRepository,
        transactions: TransactionRepository,
        category_service: CategoryService,
    ) -> Self {
        Self {
            users,
            transactions,
            category_service,
        }
    }

    /// Build the dashboard for the period as seen on the request's date.
    ///
    /// Fails with `InitialBalanceNotSet` until the user has recorded a starting balance.
    pub async fn build_dashboard(
        &self,
        context: &RequestContext,
        query: DashboardQuery,
    ) -> DomainResult<Dashboard> {
        info!(
            "Building dashboard for user {} (period={})",
            context.user_id, query.period
        );

        let user = self
            .users
            .get_user(context.user_id)
            .await?
            .ok_or(DomainError::Unauthenticated)?;
        let Some(initial_balance) = user.initial_balance else {
            warn!("Dashboard requested before initial balance for user {}", user.id);
            return Err(DomainError::InitialBalanceNotSet);
        };

        let today = context.today();
        let window = PeriodWindow::resolve(query.period, today);
        let transactions = self
            .transactions
            .list_transactions_since(user.id, window.start)
            .await?;

        let summary = summarize(initial_balance, &window, &transactions);
        let (expense_categories, income_categories) =
            self.category_service.categories_by_type(user.id).await?;

        info!(
            "Dashboard for user {}: {} transactions, balance {}",
            user.id,
            transactions.len(),
            summary.balance
        );

        Ok(Dashboard {
            period: query.period,
            today,
            expense_chart: expense_chart(&summary.expense_breakdown),
            income_vs_expense_chart: income_vs_expense_chart(
                summary.total_income,
                summary.total_expense,
            ),
            summary,
            expense_categories,
            income_categories,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::transaction::TransactionFields;
    use crate::storage::test_utils::{at, TestEnvironment};
    use crate::storage::CategoryRepository;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use shared::TransactionType;

    struct Fixture {
        env: TestEnvironment,
        service: DashboardService,
        user_id: i64,
    }

    impl Fixture {
        async fn new(initial_balance: Option<Decimal>) -> Self {
            let env = TestEnvironment::new().await.unwrap();
            let user = env.seed_user("anna@example.com").await.unwrap();
            let users = UserRepository::new(env.connection.clone());
            if let Some(balance) = initial_balance {
                users.set_initial_balance_once(user.id, balance).await.unwrap();
            }
            let service = DashboardService::new(
                users,
                TransactionRepository::new(env.connection.clone()),
                CategoryService::new(CategoryRepository::new(env.connection.clone())),
            );
            Self {
                env,
                service,
                user_id: user.id,
            }
        }

        async fn record(&self, category: &str, amount: Decimal, created_at: chrono::NaiveDateTime) {
            let category = self.env.category(self.user_id, category).await.unwrap();
            TransactionRepository::new(self.env.connection.clone())
                .insert_transaction(
                    self.user_id,
                    &TransactionFields {
                        category_id: category.id,
                        amount,
                        transaction_type: category.category_type,
                        description: None,
                        created_at,
                    },
                )
                .await
                .unwrap();
        }

        async fn dashboard(&self, period: Period, now: chrono::NaiveDateTime) -> DomainResult<Dashboard> {
            self.service
                .build_dashboard(&RequestContext::new(self.user_id, now), DashboardQuery { period })
                .await
        }
    }

    #[tokio::test]
    async fn test_dashboard_requires_initial_balance() {
        let fixture = Fixture::new(None).await;
        let result = fixture.dashboard(Period::Month, at(2025, 3, 14, 12)).await;
        assert!(matches!(result, Err(DomainError::InitialBalanceNotSet)));
    }

    #[tokio::test]
    async fn test_month_scenario() {
        let fixture = Fixture::new(Some(dec!(1000.00))).await;
        fixture.record("Food", dec!(200.00), at(2025, 3, 5, 12)).await;
        fixture.record("Salary", dec!(500.00), at(2025, 3, 10, 9)).await;

        let dashboard = fixture.dashboard(Period::Month, at(2025, 3, 14, 12)).await.unwrap();

        assert_eq!(dashboard.period, Period::Month);
        assert_eq!(dashboard.today, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        assert_eq!(dashboard.summary.total_income, dec!(500.00));
        assert_eq!(dashboard.summary.total_expense, dec!(200.00));
        assert_eq!(dashboard.summary.balance, dec!(1300.00));
        assert_eq!(dashboard.expense_chart.labels, vec!["Food".to_string()]);
        assert_eq!(dashboard.income_vs_expense_chart.values, vec![500.0, 200.0]);
        assert_eq!(dashboard.expense_categories.len(), 6);
        assert_eq!(dashboard.income_categories.len(), 3);
    }

    #[tokio::test]
    async fn test_period_selects_window() {
        let fixture = Fixture::new(Some(dec!(0.00))).await;
        fixture.record("Rent", dec!(900.00), at(2024, 12, 31, 20)).await;
        fixture.record("Food", dec!(40.00), at(2025, 2, 20, 12)).await;
        fixture.record("Food", dec!(10.00), at(2025, 3, 13, 12)).await;
        let now = at(2025, 3, 14, 12);

        let week = fixture.dashboard(Period::Week, now).await.unwrap();
        assert_eq!(week.summary.total_expense, dec!(10.00));

        let month = fixture.dashboard(Period::Month, now).await.unwrap();
        assert_eq!(month.summary.total_expense, dec!(10.00));

        let year = fixture.dashboard(Period::Year, now).await.unwrap();
        assert_eq!(year.summary.total_expense, dec!(50.00));

        let all = fixture.dashboard(Period::All, now).await.unwrap();
        assert_eq!(all.summary.total_expense, dec!(950.00));
        assert_eq!(all.summary.balance, dec!(-950.00));
        assert_eq!(all.summary.top_expenses[0].category_name, "Rent");
    }

    #[tokio::test]
    async fn test_top_expenses_are_capped() {
        let fixture = Fixture::new(Some(dec!(100.00))).await;
        for (day, amount) in [(1, dec!(1)), (2, dec!(7)), (3, dec!(3)), (4, dec!(9)), (5, dec!(5)), (6, dec!(2))] {
            fixture.record("Food", amount, at(2025, 3, day, 12)).await;
        }

        let dashboard = fixture.dashboard(Period::Month, at(2025, 3, 14, 12)).await.unwrap();
        let amounts: Vec<Decimal> = dashboard
            .summary
            .top_expenses
            .iter()
            .map(|t| t.amount)
            .collect();

        assert_eq!(amounts, vec![dec!(9), dec!(7), dec!(5), dec!(3), dec!(2)]);
        assert!(dashboard
            .summary
            .top_expenses
            .iter()
            .all(|t| t.transaction_type == TransactionType::Expense));
    }
}
