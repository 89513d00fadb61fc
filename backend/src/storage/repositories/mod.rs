// Repository modules
pub mod category_repository;
pub mod session_repository;
pub mod transaction_repository;
pub mod user_repository;

// Re-export repository types
pub use category_repository::CategoryRepository;
pub use session_repository::SessionRepository;
pub use transaction_repository::TransactionRepository;
pub use user_repository::UserRepository;
