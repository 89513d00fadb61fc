//! Error taxonomy for domain operations.
//!
//! Validation failures carry the message shown to the user. Storage failures
//! are wrapped untouched and surface as server errors.

/// Rejected user input. The display text is user-facing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingRequiredFields,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("A user with this email already exists")]
    DuplicateEmail,
    #[error("Invalid amount")]
    InvalidAmount,
    #[error("Invalid balance")]
    InvalidInitialBalance,
    #[error("No category selected")]
    CategoryNotSelected,
    #[error("Category not found")]
    CategoryNotFound,
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Authentication required")]
    Unauthenticated,
    #[error("Not found")]
    NotFound,
    #[error("Initial balance has already been set")]
    InitialBalanceAlreadySet,
    #[error("Initial balance has not been set yet")]
    InitialBalanceNotSet,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;
