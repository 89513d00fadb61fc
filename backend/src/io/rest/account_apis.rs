//! # REST API for Accounts
//!
//! Registration, login, logout and the one-time initial balance.

use axum::{
    extract::{Extension, Form, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Utc;
use shared::{LoginForm, MessageResponse, RegisterForm, SetupBalanceForm, SetupBalanceResponse};
use tracing::{info, warn};

use crate::domain::commands::accounts::{LoginCommand, RegisterCommand, SetupBalanceCommand};
use crate::domain::money::format_currency;
use crate::domain::DomainError;
use crate::io::rest::auth::AuthUser;
use crate::io::rest::mappers::UserMapper;
use crate::AppState;

const REGISTERED_MESSAGE: &str = "Account created";
const LOGGED_IN_MESSAGE: &str = "Welcome!";
const LOGGED_OUT_MESSAGE: &str = "You have logged out";
const BALANCE_SAVED_MESSAGE: &str = "Initial balance saved";

/// Create an account and open a session for it
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> impl IntoResponse {
    info!("POST /api/register - email: {:?}", form.email);

    let command = match RegisterCommand::from_form(form) {
        Ok(command) => command,
        Err(e) => {
            warn!("Registration rejected: {}", e);
            return DomainError::from(e).into_response();
        }
    };

    match state
        .account_service
        .register(command, Utc::now().naive_utc())
        .await
    {
        Ok(session) => (
            StatusCode::CREATED,
            Json(UserMapper::to_session_response(session, REGISTERED_MESSAGE)),
        )
            .into_response(),
        Err(e) => {
            warn!("Failed to register: {}", e);
            e.into_response()
        }
    }
}

/// Open a session for existing credentials
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> impl IntoResponse {
    info!("POST /api/login - email: {:?}", form.email);

    let command = LoginCommand::from_form(form);
    match state.account_service.login(command, Utc::now().naive_utc()).await {
        Ok(session) => (
            StatusCode::OK,
            Json(UserMapper::to_session_response(session, LOGGED_IN_MESSAGE)),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn logout(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> impl IntoResponse {
    info!("POST /api/logout - user: {}", auth.user_id);

    match state.account_service.logout(&auth.token).await {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse {
                success_message: LOGGED_OUT_MESSAGE.to_string(),
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Record the starting balance; a second attempt is a conflict
pub async fn setup_balance(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Form(form): Form<SetupBalanceForm>,
) -> impl IntoResponse {
    info!("POST /api/setup-balance - user: {}, request: {:?}", auth.user_id, form);

    if let Err(e) = state
        .account_service
        .ensure_initial_balance_unset(auth.user_id)
        .await
    {
        return e.into_response();
    }

    let command = match SetupBalanceCommand::from_form(form) {
        Ok(command) => command,
        Err(e) => {
            warn!("Initial balance rejected: {}", e);
            return DomainError::from(e).into_response();
        }
    };

    match state
        .account_service
        .setup_initial_balance(auth.user_id, command)
        .await
    {
        Ok(initial_balance) => (
            StatusCode::OK,
            Json(SetupBalanceResponse {
                initial_balance,
                formatted_initial_balance: format_currency(initial_balance),
                success_message: BALANCE_SAVED_MESSAGE.to_string(),
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
