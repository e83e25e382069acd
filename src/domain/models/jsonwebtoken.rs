use serde::{Deserialize, Serialize};

use super::role::Role;

/// A signed token together with its `exp` timestamp.
#[derive(Debug, Clone)]
pub struct SignedToken {
    pub token: String,
    pub expiration: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AccessClaims {
    pub id: i64,
    pub role: Role,
    pub exp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RefreshClaims {
    pub user_id: i64,
    pub jti: String,
    pub exp: i64,
}

#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: SignedToken,
    pub refresh_token: SignedToken,
    pub role: Role,
}
