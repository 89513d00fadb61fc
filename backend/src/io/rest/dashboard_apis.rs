//! # REST API for the Dashboard

use axum::{
    extract::{Extension, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use shared::DashboardParams;
use tracing::info;

use crate::domain::commands::dashboard::DashboardQuery;
use crate::io::rest::auth::AuthUser;
use crate::io::rest::mappers::DashboardMapper;
use crate::AppState;

/// Aggregated view for `?period=week|month|year|all` (default month)
pub async fn get_dashboard(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Query(params): Query<DashboardParams>,
) -> impl IntoResponse {
    info!("GET /api/dashboard - user: {}, query: {:?}", auth.user_id, params);

    let query = DashboardQuery::from_params(&params);
    match state
        .dashboard_service
        .build_dashboard(&auth.context(), query)
        .await
    {
        Ok(dashboard) => (StatusCode::OK, Json(DashboardMapper::to_response(dashboard))).into_response(),
        Err(e) => e.into_response(),
    }
}
