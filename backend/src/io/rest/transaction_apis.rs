//! # REST API for Transactions
//!
//! Endpoints for adding, editing and deleting the caller's transactions.

use axum::{
    extract::{Extension, Form, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use shared::{MessageResponse, TransactionForm, TransactionResponse};
use tracing::{info, warn};

use crate::io::rest::auth::AuthUser;
use crate::io::rest::mappers::TransactionMapper;
use crate::AppState;

const ADDED_MESSAGE: &str = "Transaction added";
const UPDATED_MESSAGE: &str = "Transaction updated";
const DELETED_MESSAGE: &str = "Transaction deleted";

/// Create a new transaction
pub async fn create_transaction(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Form(form): Form<TransactionForm>,
) -> impl IntoResponse {
    info!("POST /api/transactions - user: {}, request: {:?}", auth.user_id, form);

    match state
        .transaction_service
        .add_transaction(&auth.context(), form)
        .await
    {
        Ok(transaction) => (
            StatusCode::CREATED,
            Json(TransactionResponse {
                transaction: TransactionMapper::to_dto(transaction),
                success_message: ADDED_MESSAGE.to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            warn!("Failed to create transaction: {}", e);
            e.into_response()
        }
    }
}

/// Fetch a transaction and its candidate categories for the edit form
pub async fn get_transaction_for_edit(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(transaction_id): Path<i64>,
) -> impl IntoResponse {
    info!("GET /api/transactions/{}/edit - user: {}", transaction_id, auth.user_id);

    match state
        .transaction_service
        .edit_view(auth.user_id, transaction_id)
        .await
    {
        Ok(view) => (StatusCode::OK, Json(TransactionMapper::to_edit_view(view))).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn update_transaction(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(transaction_id): Path<i64>,
    Form(form): Form<TransactionForm>,
) -> impl IntoResponse {
    info!(
        "POST /api/transactions/{}/edit - user: {}, request: {:?}",
        transaction_id, auth.user_id, form
    );

    match state
        .transaction_service
        .update_transaction(&auth.context(), transaction_id, form)
        .await
    {
        Ok(transaction) => (
            StatusCode::OK,
            Json(TransactionResponse {
                transaction: TransactionMapper::to_dto(transaction),
                success_message: UPDATED_MESSAGE.to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            warn!("Failed to update transaction {}: {}", transaction_id, e);
            e.into_response()
        }
    }
}

pub async fn delete_transaction(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(transaction_id): Path<i64>,
) -> impl IntoResponse {
    info!("POST /api/transactions/{}/delete - user: {}", transaction_id, auth.user_id);

    match state
        .transaction_service
        .delete_transaction(auth.user_id, transaction_id)
        .await
    {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse {
                success_message: DELETED_MESSAGE.to_string(),
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
