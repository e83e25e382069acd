use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::jsonwebtoken::TokenPair;

/// Sign-in on behalf of the Telegram bot, authenticated by a shared service key.
#[async_trait]
pub trait TelegramAuthService: 'static + Sync + Send {
    /// Opens a session for the user linked to `telegram_id`, creating both on first use.
    async fn authorize(&self, telegram_id: String, service_key: &str) -> AppResult<TokenPair>;
}
