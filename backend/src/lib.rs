//! # minicash backend
//!
//! Personal finance tracker: accounts, categorised income and expenses, and
//! per-period aggregation, served as a JSON API.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (axum handlers, mappers, auth middleware)
//!     ↓
//! Domain Layer (commands, services, pure aggregation)
//!     ↓
//! Storage Layer (sqlx SQLite repositories)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{AccountService, CategoryService, DashboardService, TransactionService};
use crate::storage::{
    CategoryRepository, DbConnection, SessionRepository, TransactionRepository, UserRepository,
};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub account_service: AccountService,
    pub category_service: CategoryService,
    pub transaction_service: TransactionService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    /// Wire every service to one database connection
    pub fn new(db: DbConnection) -> Self {
        let users = UserRepository::new(db.clone());
        let sessions = SessionRepository::new(db.clone());
        let categories = CategoryRepository::new(db.clone());
        let transactions = TransactionRepository::new(db);

        let category_service = CategoryService::new(categories.clone());

        Self {
            account_service: AccountService::new(users.clone(), sessions),
            transaction_service: TransactionService::new(transactions.clone(), categories),
            dashboard_service: DashboardService::new(users, transactions, category_service.clone()),
            category_service,
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up database at {}", config.database_url);
    let db = DbConnection::new(&config.database_url).await?;

    info!("Setting up application state");
    Ok(AppState::new(db))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, cors_origin: &str) -> Result<Router> {
    // CORS setup to allow frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin(
            cors_origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid CORS origin '{cors_origin}'"))?,
        )
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    let public_routes = Router::new()
        .route("/register", post(io::register))
        .route("/login", post(io::login));

    let protected_routes = Router::new()
        .route("/logout", post(io::logout))
        .route("/setup-balance", post(io::setup_balance))
        .route("/dashboard", get(io::get_dashboard))
        .route("/categories", get(io::list_categories))
        .route("/transactions", post(io::create_transaction))
        .route(
            "/transactions/:id/edit",
            get(io::get_transaction_for_edit).post(io::update_transaction),
        )
        .route("/transactions/:id/delete", post(io::delete_transaction))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            io::require_session,
        ));

    Ok(Router::new()
        .nest("/api", public_routes.merge(protected_routes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state))
}
