use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::user::Contact;

/// Delivers one-time verification codes to a user's contact.
#[async_trait]
pub trait CodeSender: 'static + Sync + Send {
    async fn send(&self, contact: &Contact, code: u32) -> AppResult<()>;
}
