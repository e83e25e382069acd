use serde::{Deserialize, Serialize};

use crate::domain::models::telegram::TelegramLink;

#[derive(Debug, Serialize, Deserialize)]
pub struct SurrealTelegramLink {
    telegram_id: String,
    user_id: i64,
}

impl From<TelegramLink> for SurrealTelegramLink {
    fn from(link: TelegramLink) -> Self {
        SurrealTelegramLink {
            telegram_id: link.telegram_id,
            user_id: link.user_id,
        }
    }
}
