use async_trait::async_trait;

use crate::domain::models::refresh_token::{CreateRefreshToken, RefreshToken};

use super::repository::RepositoryResult;

#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    async fn insert(&self, new_token: CreateRefreshToken) -> RepositoryResult<RefreshToken>;
    async fn find(&self, token: &str) -> RepositoryResult<Option<RefreshToken>>;
    /// Returns whether a row was removed by this call.
    async fn delete(&self, id: &str) -> RepositoryResult<bool>;
}
