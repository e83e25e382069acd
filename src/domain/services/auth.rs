use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::jsonwebtoken::TokenPair;
use crate::domain::models::user::{Contact, Registration, User};

#[async_trait]
pub trait AuthService: 'static + Sync + Send {
    async fn register(&self, registration: Registration) -> AppResult<User>;
    async fn confirm(&self, contact: Contact, code: u32) -> AppResult<TokenPair>;
    async fn request_code(&self, contact: Contact) -> AppResult<()>;
    async fn authenticate(&self, contact: Contact, code: u32) -> AppResult<TokenPair>;
    async fn profile(&self, id: i64) -> AppResult<User>;
}
