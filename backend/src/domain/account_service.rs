use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::domain::commands::accounts::{LoginCommand, RegisterCommand, SetupBalanceCommand};
use crate::domain::credentials::{generate_session_token, hash_password, verify_password};
use crate::domain::errors::{DomainError, DomainResult, ValidationError};
use crate::domain::models::category::DEFAULT_CATEGORIES;
use crate::domain::models::user::{NewUser, User};
use crate::storage::{SessionRepository, UserRepository};

/// An opened login session
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Service for registration, login and the one-time balance setup
#[derive(Clone)]
pub struct AccountService {
    users: UserRepository,
    sessions: SessionRepository,
}

impl AccountService {
    pub fn new(users: UserRepository, sessions: SessionRepository) -> Self {
        Self { users, sessions }
    }

    /// Create an account with the default categories and log it in
    pub async fn register(&self, command: RegisterCommand, now: NaiveDateTime) -> DomainResult<Session> {
        info!("Registering user: email={}", command.email);

        if self.users.find_by_email(&command.email).await?.is_some() {
            warn!("Registration rejected, email already in use: {}", command.email);
            return Err(ValidationError::DuplicateEmail.into());
        }

        let new_user = NewUser {
            name: command.name,
            email: command.email,
            password_hash: hash_password(&command.password)?,
            created_at: now,
        };

        // A concurrent registration can still win the race; the unique index catches it
        let user = self
            .users
            .create_user(&new_user, DEFAULT_CATEGORIES)
            .await?
            .ok_or(ValidationError::DuplicateEmail)?;

        let session = self.open_session(user, now).await?;
        info!("Registered user {} ({})", session.user.id, session.user.email);
        Ok(session)
    }

    /// Check credentials and open a session.
    ///
    /// Unknown email and wrong password are reported identically.
    pub async fn login(&self, command: LoginCommand, now: NaiveDateTime) -> DomainResult<Session> {
        info!("Login attempt: email={}", command.email);

        let Some(user) = self.users.find_by_email(&command.email).await? else {
            warn!("Login failed, unknown email: {}", command.email);
            return Err(DomainError::InvalidCredentials);
        };

        if !verify_password(&command.password, &user.password_hash)? {
            warn!("Login failed, wrong password for user {}", user.id);
            return Err(DomainError::InvalidCredentials);
        }

        self.open_session(user, now).await
    }

    pub async fn logout(&self, token: &str) -> DomainResult<()> {
        if self.sessions.delete_session(token).await? {
            info!("Session closed");
        } else {
            warn!("Logout for a session that no longer exists");
        }
        Ok(())
    }

    /// Map a bearer token to its user id
    pub async fn resolve_session(&self, token: &str) -> DomainResult<i64> {
        self.sessions
            .find_user_id(token)
            .await?
            .ok_or(DomainError::Unauthenticated)
    }

    pub async fn get_user(&self, user_id: i64) -> DomainResult<User> {
        self.users
            .get_user(user_id)
            .await?
            .ok_or(DomainError::Unauthenticated)
    }

    /// Fails once the starting balance has been recorded, whatever is submitted next
    pub async fn ensure_initial_balance_unset(&self, user_id: i64) -> DomainResult<()> {
        if self.get_user(user_id).await?.needs_initial_balance() {
            Ok(())
        } else {
            warn!("Initial balance for user {} was already set", user_id);
            Err(DomainError::InitialBalanceAlreadySet)
        }
    }

    /// Store the starting balance. Only the first call succeeds.
    pub async fn setup_initial_balance(
        &self,
        user_id: i64,
        command: SetupBalanceCommand,
    ) -> DomainResult<Decimal> {
        info!("Setting initial balance for user {}: {}", user_id, command.initial_balance);

        if !self
            .users
            .set_initial_balance_once(user_id, command.initial_balance)
            .await?
        {
            warn!("Initial balance for user {} was already set", user_id);
            return Err(DomainError::InitialBalanceAlreadySet);
        }

        Ok(command.initial_balance)
    }

    async fn open_session(&self, user: User, now: NaiveDateTime) -> DomainResult<Session> {
        let token = generate_session_token();
        self.sessions.create_session(&token, user.id, now).await?;
        Ok(Session { token, user })
    }
}
