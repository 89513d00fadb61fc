use chrono::NaiveDate;
use shared::{TransactionForm, TransactionType};
use tracing::{info, warn};

use crate::domain::commands::transactions::TransactionDraft;
use crate::domain::commands::RequestContext;
use crate::domain::errors::{DomainError, DomainResult, ValidationError};
use crate::domain::models::category::Category;
use crate::domain::models::transaction::{Transaction, TransactionFields};
use crate::storage::{CategoryRepository, TransactionRepository};

/// A transaction prepared for the edit form
#[derive(Debug, Clone, PartialEq)]
pub struct EditView {
    pub transaction: Transaction,
    /// The owner's categories of the transaction's type
    pub categories: Vec<Category>,
    pub date: NaiveDate,
}

/// Service for adding, editing and deleting transactions
#[derive(Clone)]
pub struct TransactionService {
    transactions: TransactionRepository,
    categories: CategoryRepository,
}

impl TransactionService {
    pub fn new(transactions: TransactionRepository, categories: CategoryRepository) -> Self {
        Self {
            transactions,
            categories,
        }
    }

    /// Record a new transaction.
    ///
    /// Type defaults to expense and the date to the request time.
    pub async fn add_transaction(
        &self,
        context: &RequestContext,
        form: TransactionForm,
    ) -> DomainResult<Transaction> {
        info!("Adding transaction for user {}: {:?}", context.user_id, form);

        let draft = TransactionDraft::from_form(form, TransactionType::Expense).map_err(|e| {
            warn!("Rejected transaction for user {}: {}", context.user_id, e);
            e
        })?;
        let category = self.resolve_category(context.user_id, &draft).await?;

        let fields = TransactionFields {
            category_id: category.id,
            amount: draft.amount,
            transaction_type: draft.transaction_type,
            description: draft.description,
            created_at: draft.date.unwrap_or(context.now),
        };

        let transaction = self
            .transactions
            .insert_transaction(context.user_id, &fields)
            .await?;
        info!(
            "Added {} {} to '{}' with ID {}",
            transaction.transaction_type, transaction.amount, transaction.category_name, transaction.id
        );
        Ok(transaction)
    }

    /// Load one of the user's transactions together with the categories it may be moved to
    pub async fn edit_view(&self, user_id: i64, transaction_id: i64) -> DomainResult<EditView> {
        let transaction = self.owned_transaction(user_id, transaction_id).await?;
        let categories = self
            .categories
            .list_categories(user_id, Some(transaction.transaction_type))
            .await?;

        Ok(EditView {
            date: transaction.created_at.date(),
            transaction,
            categories,
        })
    }

    /// Replace the fields of an existing transaction.
    ///
    /// Missing type and date keep the stored values.
    pub async fn update_transaction(
        &self,
        context: &RequestContext,
        transaction_id: i64,
        form: TransactionForm,
    ) -> DomainResult<Transaction> {
        info!(
            "Updating transaction {} for user {}: {:?}",
            transaction_id, context.user_id, form
        );

        let existing = self.owned_transaction(context.user_id, transaction_id).await?;

        let draft = TransactionDraft::from_form(form, existing.transaction_type).map_err(|e| {
            warn!("Rejected update of transaction {}: {}", transaction_id, e);
            e
        })?;
        let category = self.resolve_category(context.user_id, &draft).await?;

        let fields = TransactionFields {
            category_id: category.id,
            amount: draft.amount,
            transaction_type: draft.transaction_type,
            description: draft.description,
            created_at: draft.date.unwrap_or(existing.created_at),
        };

        if !self
            .transactions
            .update_transaction(context.user_id, transaction_id, &fields)
            .await?
        {
            // Deleted between the lookup and the update
            return Err(DomainError::NotFound);
        }

        info!("Updated transaction {}", transaction_id);
        self.owned_transaction(context.user_id, transaction_id).await
    }

    pub async fn delete_transaction(&self, user_id: i64, transaction_id: i64) -> DomainResult<()> {
        info!("Deleting transaction {} for user {}", transaction_id, user_id);

        if !self
            .transactions
            .delete_transaction(user_id, transaction_id)
            .await?
        {
            warn!("Transaction {} not found for user {}", transaction_id, user_id);
            return Err(DomainError::NotFound);
        }

        Ok(())
    }

    async fn owned_transaction(&self, user_id: i64, transaction_id: i64) -> DomainResult<Transaction> {
        self.transactions
            .get_transaction(user_id, transaction_id)
            .await?
            .ok_or_else(|| {
                warn!("Transaction {} not found for user {}", transaction_id, user_id);
                DomainError::NotFound
            })
    }

    /// The category must belong to the user and carry the submitted type
    async fn resolve_category(&self, user_id: i64, draft: &TransactionDraft) -> DomainResult<Category> {
        self.categories
            .find_category(user_id, draft.category_id, draft.transaction_type)
            .await?
            .ok_or_else(|| {
                warn!(
                    "Category {} ({}) not found for user {}",
                    draft.category_id, draft.transaction_type, user_id
                );
                ValidationError::CategoryNotFound.into()
            })
    }
}
