use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use crate::domain::models::refresh_token::{CreateRefreshToken, RefreshToken};

#[derive(Debug, Deserialize)]
pub struct SurrealRefreshToken {
    id: Thing,
    user_id: i64,
    token: String,
    expires_at: i64,
}

#[derive(Serialize)]
pub struct SurrealRefreshTokenCreate {
    user_id: i64,
    token: String,
    expires_at: i64,
}

impl From<CreateRefreshToken> for SurrealRefreshTokenCreate {
    fn from(token: CreateRefreshToken) -> Self {
        SurrealRefreshTokenCreate {
            user_id: token.user_id,
            token: token.token,
            expires_at: token.expires_at,
        }
    }
}

impl From<SurrealRefreshToken> for RefreshToken {
    fn from(token: SurrealRefreshToken) -> Self {
        RefreshToken {
            id: token.id.id.to_string(),
            user_id: token.user_id,
            token: token.token,
            expires_at: token.expires_at,
        }
    }
}
