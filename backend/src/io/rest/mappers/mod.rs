// Mapper modules
pub mod category_mapper;
pub mod dashboard_mapper;
pub mod transaction_mapper;
pub mod user_mapper;

pub use category_mapper::CategoryMapper;
pub use dashboard_mapper::DashboardMapper;
pub use transaction_mapper::TransactionMapper;
pub use user_mapper::UserMapper;
