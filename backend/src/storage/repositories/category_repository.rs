use anyhow::{anyhow, Result};
use shared::TransactionType;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::domain::models::category::Category;
use crate::storage::connection::DbConnection;

/// Repository for per-user categories
#[derive(Clone)]
pub struct CategoryRepository {
    db: DbConnection,
}

impl CategoryRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// List a user's categories in creation order, optionally of one type only
    pub async fn list_categories(
        &self,
        user_id: i64,
        category_type: Option<TransactionType>,
    ) -> Result<Vec<Category>> {
        let rows = match category_type {
            Some(category_type) => {
                sqlx::query(
                    r#"
                    SELECT id, user_id, name, type
                    FROM categories
                    WHERE user_id = ? AND type = ?
                    ORDER BY id
                    "#,
                )
                .bind(user_id)
                .bind(category_type.as_str())
                .fetch_all(self.db.pool())
                .await?
            }
            None => {
                sqlx::query(
                    r#"
                    SELECT id, user_id, name, type
                    FROM categories
                    WHERE user_id = ?
                    ORDER BY id
                    "#,
                )
                .bind(user_id)
                .fetch_all(self.db.pool())
                .await?
            }
        };

        rows.iter().map(row_to_category).collect()
    }

    /// Find a category only if it belongs to the user and has the given type
    pub async fn find_category(
        &self,
        user_id: i64,
        category_id: i64,
        category_type: TransactionType,
    ) -> Result<Option<Category>> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, name, type
            FROM categories
            WHERE id = ? AND user_id = ? AND type = ?
            "#,
        )
        .bind(category_id)
        .bind(user_id)
        .bind(category_type.as_str())
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(row_to_category).transpose()
    }
}

fn row_to_category(row: &SqliteRow) -> Result<Category> {
    let raw_type: String = row.get("type");
    let category_type = TransactionType::parse(&raw_type)
        .ok_or_else(|| anyhow!("unknown category type '{raw_type}'"))?;

    Ok(Category {
        id: row.get("id"),
        user_id: row.get("user_id"),
        name: row.get("name"),
        category_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::category::DEFAULT_CATEGORIES;
    use crate::storage::test_utils::{expense_and_income_counts, TestEnvironment};

    #[tokio::test]
    async fn test_list_categories_by_type() {
        let env = TestEnvironment::new().await.unwrap();
        let user = env.seed_user("anna@example.com").await.unwrap();
        let repo = CategoryRepository::new(env.connection.clone());

        let all = repo.list_categories(user.id, None).await.unwrap();
        assert_eq!(all.len(), DEFAULT_CATEGORIES.len());
        assert_eq!(all[0].name, "Food");
        assert_eq!(expense_and_income_counts(&all), (6, 3));

        let income = repo
            .list_categories(user.id, Some(TransactionType::Income))
            .await
            .unwrap();
        let names: Vec<&str> = income.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Salary", "Freelance", "Gifts"]);
    }

    #[tokio::test]
    async fn test_categories_are_private_to_their_owner() {
        let env = TestEnvironment::new().await.unwrap();
        let anna = env.seed_user("anna@example.com").await.unwrap();
        let boris = env.seed_user("boris@example.com").await.unwrap();
        let repo = CategoryRepository::new(env.connection.clone());

        let annas_food = env.category(anna.id, "Food").await.unwrap();

        let own = repo
            .find_category(anna.id, annas_food.id, TransactionType::Expense)
            .await
            .unwrap();
        assert_eq!(own, Some(annas_food.clone()));

        let foreign = repo
            .find_category(boris.id, annas_food.id, TransactionType::Expense)
            .await
            .unwrap();
        assert!(foreign.is_none());
    }

    #[tokio::test]
    async fn test_find_category_checks_type() {
        let env = TestEnvironment::new().await.unwrap();
        let user = env.seed_user("anna@example.com").await.unwrap();
        let repo = CategoryRepository::new(env.connection.clone());
        let salary = env.category(user.id, "Salary").await.unwrap();

        let mismatched = repo
            .find_category(user.id, salary.id, TransactionType::Expense)
            .await
            .unwrap();
        assert!(mismatched.is_none());
    }
}
