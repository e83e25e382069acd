use async_trait::async_trait;
use chrono::Duration;
use thiserror::Error;

use crate::domain::{
    error::{AppError, AppResult, TokenError},
    models::jsonwebtoken::{SignedToken, TokenPair},
    models::refresh_token::RefreshToken,
    models::user::User,
    repositories::repository::RepositoryError,
};

#[derive(Debug, Error)]
pub enum RefreshError {
    #[error(transparent)]
    Rejected(#[from] TokenError),
    #[error(transparent)]
    Internal(#[from] AppError),
}

impl From<RepositoryError> for RefreshError {
    fn from(error: RepositoryError) -> Self {
        RefreshError::Internal(error.into())
    }
}

impl From<RefreshError> for AppError {
    fn from(error: RefreshError) -> Self {
        match error {
            RefreshError::Rejected(error) => error.into(),
            RefreshError::Internal(error) => error,
        }
    }
}

#[async_trait]
pub trait SessionService: 'static + Sync + Send {
    /// Issues an access token and a persisted refresh token for `user`.
    async fn open(&self, user: &User) -> AppResult<TokenPair>;
    async fn issue_refresh_token(
        &self,
        user_id: i64,
        validity: Option<Duration>,
    ) -> AppResult<RefreshToken>;
    /// Redeems a refresh token exactly once for a new access token.
    async fn refresh(&self, token: &str) -> Result<SignedToken, RefreshError>;
}
