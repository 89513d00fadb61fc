use shared::{CategoryParams, TransactionType};
use tracing::{info, warn};

use crate::domain::errors::DomainResult;
use crate::domain::models::category::Category;
use crate::storage::CategoryRepository;

/// Service for reading a user's categories
#[derive(Clone)]
pub struct CategoryService {
    categories: CategoryRepository,
}

impl CategoryService {
    pub fn new(categories: CategoryRepository) -> Self {
        Self { categories }
    }

    /// List the user's categories, filtered by `type` when given.
    ///
    /// A type that is neither income nor expense matches nothing.
    pub async fn list_categories(
        &self,
        user_id: i64,
        params: &CategoryParams,
    ) -> DomainResult<Vec<Category>> {
        let filter = match params.category_type.as_deref() {
            None => None,
            Some(raw) => match TransactionType::parse(raw) {
                Some(category_type) => Some(category_type),
                None => {
                    warn!("Unknown category type filter: {}", raw);
                    return Ok(Vec::new());
                }
            },
        };

        let categories = self.categories.list_categories(user_id, filter).await?;
        info!("Found {} categories for user {}", categories.len(), user_id);
        Ok(categories)
    }

    /// Categories split by type, in creation order
    pub async fn categories_by_type(
        &self,
        user_id: i64,
    ) -> DomainResult<(Vec<Category>, Vec<Category>)> {
        let (expense, income): (Vec<Category>, Vec<Category>) = self
            .categories
            .list_categories(user_id, None)
            .await?
            .into_iter()
            .partition(|c| c.category_type == TransactionType::Expense);
        Ok((expense, income))
    }
}
