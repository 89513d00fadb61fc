use axum::{
    extract::{Extension, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use shared::{CategoryListResponse, CategoryParams};
use tracing::info;

use crate::io::rest::auth::AuthUser;
use crate::io::rest::mappers::CategoryMapper;
use crate::AppState;

/// List the caller's categories, optionally `?type=income|expense`
pub async fn list_categories(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Query(params): Query<CategoryParams>,
) -> impl IntoResponse {
    info!("GET /api/categories - user: {}, query: {:?}", auth.user_id, params);

    match state
        .category_service
        .list_categories(auth.user_id, &params)
        .await
    {
        Ok(categories) => (
            StatusCode::OK,
            Json(CategoryListResponse {
                categories: CategoryMapper::to_dto_list(categories),
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
