use async_trait::async_trait;

use crate::domain::models::telegram::TelegramLink;

use super::repository::RepositoryResult;

#[async_trait]
pub trait TelegramLinkRepository: Send + Sync {
    async fn find_user_id(&self, telegram_id: &str) -> RepositoryResult<Option<i64>>;
    /// Fails with `RepositoryError::Conflict` when either side is already linked.
    async fn link(&self, link: TelegramLink) -> RepositoryResult<()>;
}
