use async_trait::async_trait;

use crate::domain::models::user::{Contact, CreateUser, User};

use super::repository::RepositoryResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn is_registered(&self, contact: &Contact) -> RepositoryResult<bool>;
    async fn create(&self, new_user: CreateUser) -> RepositoryResult<User>;
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<User>>;
    async fn find_one(&self, contact: &Contact) -> RepositoryResult<Option<User>>;
    async fn delete(&self, id: i64) -> RepositoryResult<bool>;
    /// Stores a pending code for the contact, returns whether the user exists.
    async fn store_code(&self, contact: &Contact, code: u32) -> RepositoryResult<bool>;
    /// Clears the pending code and marks the contact verified, but only when
    /// `code` is still the pending one.
    async fn consume_code(&self, contact: &Contact, code: u32) -> RepositoryResult<bool>;
}
