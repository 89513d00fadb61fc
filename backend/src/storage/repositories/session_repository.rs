use anyhow::Result;
use chrono::NaiveDateTime;
use sqlx::Row;

use crate::storage::connection::{format_timestamp, DbConnection};

/// Repository for login sessions keyed by bearer token
#[derive(Clone)]
pub struct SessionRepository {
    db: DbConnection,
}

impl SessionRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    pub async fn create_session(
        &self,
        token: &str,
        user_id: i64,
        created_at: NaiveDateTime,
    ) -> Result<()> {
        sqlx::query("INSERT INTO sessions (token, user_id, created_at) VALUES (?, ?, ?)")
            .bind(token)
            .bind(user_id)
            .bind(format_timestamp(&created_at))
            .execute(self.db.pool())
            .await?;
        Ok(())
    }

    /// Resolve a token to the id of the user it belongs to
    pub async fn find_user_id(&self, token: &str) -> Result<Option<i64>> {
        let row = sqlx::query("SELECT user_id FROM sessions WHERE token = ?")
            .bind(token)
            .fetch_optional(self.db.pool())
            .await?;

        Ok(row.map(|r| r.get("user_id")))
    }

    /// Returns whether a session was removed
    pub async fn delete_session(&self, token: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM sessions WHERE token = ?")
            .bind(token)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::{at, TestEnvironment};

    #[tokio::test]
    async fn test_session_lifecycle() {
        let env = TestEnvironment::new().await.unwrap();
        let user = env.seed_user("anna@example.com").await.unwrap();
        let repo = SessionRepository::new(env.connection.clone());

        repo.create_session("token-1", user.id, at(2025, 3, 1, 9)).await.unwrap();
        assert_eq!(repo.find_user_id("token-1").await.unwrap(), Some(user.id));

        assert!(repo.delete_session("token-1").await.unwrap());
        assert_eq!(repo.find_user_id("token-1").await.unwrap(), None);
        assert!(!repo.delete_session("token-1").await.unwrap());
    }

    #[tokio::test]
    async fn test_unknown_token() {
        let env = TestEnvironment::new().await.unwrap();
        let repo = SessionRepository::new(env.connection.clone());
        assert_eq!(repo.find_user_id("missing").await.unwrap(), None);
    }
}
