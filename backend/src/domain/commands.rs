// backend/src/domain/commands.rs

//! Domain-level command and query types
//! Form submissions from the `shared` crate arrive as raw optional strings.
//! The constructors here parse them into typed commands, so services only
//! ever see validated values.

use chrono::{NaiveDate, NaiveDateTime};

/// Per-request context handed from the IO layer to services.
/// Carries the authenticated user and the clock reading for this request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    pub user_id: i64,
    pub now: NaiveDateTime,
}

impl RequestContext {
    pub fn new(user_id: i64, now: NaiveDateTime) -> Self {
        Self { user_id, now }
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date()
    }
}

fn non_empty_trimmed(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub mod accounts {
    use rust_decimal::Decimal;
    use shared::{LoginForm, RegisterForm, SetupBalanceForm};

    use super::non_empty_trimmed;
    use crate::domain::errors::ValidationError;
    use crate::domain::money::{normalize_amount, parse_decimal};

    /// Input for creating a new account.
    #[derive(Debug, Clone, PartialEq)]
    pub struct RegisterCommand {
        pub name: String,
        pub email: String,
        pub password: String,
    }

    impl RegisterCommand {
        pub fn from_form(form: RegisterForm) -> Result<Self, ValidationError> {
            let name = non_empty_trimmed(form.name.as_deref());
            let email = non_empty_trimmed(form.email.as_deref()).map(|e| e.to_lowercase());
            let password = form.password.filter(|p| !p.is_empty());

            let (Some(name), Some(email), Some(password)) = (name, email, password) else {
                return Err(ValidationError::MissingRequiredFields);
            };

            if form.confirm.as_deref() != Some(password.as_str()) {
                return Err(ValidationError::PasswordMismatch);
            }

            Ok(Self {
                name,
                email,
                password,
            })
        }
    }

    /// Input for opening a session.
    #[derive(Debug, Clone, PartialEq)]
    pub struct LoginCommand {
        pub email: String,
        pub password: String,
    }

    impl LoginCommand {
        /// Missing fields are not rejected here; they simply fail to authenticate.
        pub fn from_form(form: LoginForm) -> Self {
            Self {
                email: form.email.unwrap_or_default().trim().to_lowercase(),
                password: form.password.unwrap_or_default(),
            }
        }
    }

    /// Input for the one-time initial balance setup.
    #[derive(Debug, Clone, PartialEq)]
    pub struct SetupBalanceCommand {
        pub initial_balance: Decimal,
    }

    impl SetupBalanceCommand {
        pub fn from_form(form: SetupBalanceForm) -> Result<Self, ValidationError> {
            let initial_balance = parse_decimal(form.initial_balance.as_deref())
                .and_then(normalize_amount)
                .map_err(|_| ValidationError::InvalidInitialBalance)?;
            Ok(Self { initial_balance })
        }
    }
}

pub mod transactions {
    use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
    use rust_decimal::Decimal;
    use shared::{TransactionForm, TransactionType};

    use super::non_empty_trimmed;
    use crate::domain::errors::ValidationError;
    use crate::domain::money::{normalize_amount, parse_decimal};

    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    /// Validated add/edit submission.
    ///
    /// The category has not been resolved yet; only its id was parsed.
    #[derive(Debug, Clone, PartialEq)]
    pub struct TransactionDraft {
        pub amount: Decimal,
        pub transaction_type: TransactionType,
        pub category_id: i64,
        pub description: Option<String>,
        /// `None` when the date was missing or not YYYY-MM-DD
        pub date: Option<NaiveDateTime>,
    }

    impl TransactionDraft {
        /// Parse a submitted form.
        ///
        /// `fallback_type` applies when the form carries no type at all. A type
        /// string that is present but unknown can never match a category and is
        /// reported as `CategoryNotFound`.
        pub fn from_form(
            form: TransactionForm,
            fallback_type: TransactionType,
        ) -> Result<Self, ValidationError> {
            let amount = parse_decimal(form.amount.as_deref())
                .and_then(normalize_amount)
                .map_err(|_| ValidationError::InvalidAmount)?;
            if amount <= Decimal::ZERO {
                return Err(ValidationError::InvalidAmount);
            }

            let date = form.date.as_deref().and_then(parse_form_date);

            let category_id = form
                .category_id
                .as_deref()
                .map(str::trim)
                .and_then(|id| id.parse::<i64>().ok())
                .ok_or(ValidationError::CategoryNotSelected)?;

            let transaction_type = match form.transaction_type.as_deref() {
                None => fallback_type,
                Some(raw) => {
                    TransactionType::parse(raw).ok_or(ValidationError::CategoryNotFound)?
                }
            };

            Ok(Self {
                amount,
                transaction_type,
                category_id,
                description: non_empty_trimmed(form.description.as_deref()),
                date,
            })
        }
    }

    /// Parse a YYYY-MM-DD form date as midnight of that day.
    ///
    /// Only four-digit years are accepted. Stored timestamps must sort as
    /// text, and `%Y` would otherwise take signed years like `+10000`.
    pub fn parse_form_date(raw: &str) -> Option<NaiveDateTime> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .ok()
            .filter(|date| (0..=9999).contains(&date.year()))
            .map(|date| date.and_time(NaiveTime::MIN))
    }
}

pub mod dashboard {
    use shared::{DashboardParams, Period};

    /// Query for the aggregated dashboard view.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DashboardQuery {
        pub period: Period,
    }

    impl DashboardQuery {
        pub fn from_params(params: &DashboardParams) -> Self {
            Self {
                period: Period::from_param(params.period.as_deref()),
            }
        }
    }
}
