//! Bearer-token session middleware.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use tracing::warn;

use crate::domain::{DomainError, RequestContext};
use crate::AppState;

/// The authenticated caller, inserted as a request extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i64,
    pub token: String,
}

impl AuthUser {
    /// Context for one request, stamped with the current UTC time
    pub fn context(&self) -> RequestContext {
        RequestContext::new(self.user_id, Utc::now().naive_utc())
    }
}

/// Reject requests without a live session; otherwise attach `AuthUser`.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = bearer_token(request.headers()) else {
        warn!("{} {} - missing bearer token", request.method(), request.uri().path());
        return DomainError::Unauthenticated.into_response();
    };

    match state.account_service.resolve_session(&token).await {
        Ok(user_id) => {
            request.extensions_mut().insert(AuthUser { user_id, token });
            next.run(request).await
        }
        Err(e) => {
            warn!("{} {} - {}", request.method(), request.uri().path(), e);
            e.into_response()
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}
