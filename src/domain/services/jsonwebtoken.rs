use chrono::Duration;

use crate::domain::{
    error::{AppResult, TokenError},
    models::jsonwebtoken::{AccessClaims, RefreshClaims, SignedToken},
    models::role::Role,
};

/// Issues and verifies tokens. A `None` validity falls back to the
/// configured lifetime of that token kind.
pub trait JsonWebTokenService: 'static + Sync + Send {
    fn issue_access_token(
        &self,
        id: i64,
        role: Role,
        validity: Option<Duration>,
    ) -> AppResult<SignedToken>;
    fn issue_refresh_token(&self, user_id: i64, validity: Option<Duration>)
    -> AppResult<SignedToken>;
    fn verify_access_token(&self, token: &str) -> Result<AccessClaims, TokenError>;
    fn verify_refresh_token(&self, token: &str) -> Result<RefreshClaims, TokenError>;
}
