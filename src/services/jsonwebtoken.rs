use crate::domain::error::{AppError, AppResult, TokenError};
use crate::domain::models::jsonwebtoken::{AccessClaims, RefreshClaims, SignedToken};
use crate::domain::models::role::Role;
use crate::domain::services::jsonwebtoken::JsonWebTokenService;
use chrono::{Duration, Utc};
use jsonwebtoken::errors::{Error as JsonWebTokenError, ErrorKind};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::Deserialize;
use uuid::Uuid;

const ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Clone)]
pub struct KeyPair {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl KeyPair {
    pub fn from_secret(secret: &[u8]) -> Self {
        KeyPair {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

/// Validity used when the caller does not pass one.
#[derive(Debug, Clone, Copy)]
pub struct TokenLifetimes {
    pub access: Duration,
    pub refresh: Duration,
}

impl Default for TokenLifetimes {
    fn default() -> Self {
        TokenLifetimes {
            access: Duration::days(365),
            refresh: Duration::days(365 * 2),
        }
    }
}

/// Union of both claim shapes; the kind is decided after signature checks.
#[derive(Debug, Deserialize)]
struct RawClaims {
    id: Option<i64>,
    user_id: Option<i64>,
    role: Option<Role>,
    jti: Option<String>,
    exp: i64,
}

pub struct JsonWebTokenServiceImpl {
    keys: KeyPair,
    lifetimes: TokenLifetimes,
    validation: Validation,
}

impl JsonWebTokenServiceImpl {
    pub fn new(keys: KeyPair, lifetimes: TokenLifetimes) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;

        JsonWebTokenServiceImpl {
            keys,
            lifetimes,
            validation,
        }
    }

    fn sign<T: serde::Serialize>(&self, claims: &T, expiration: i64) -> AppResult<SignedToken> {
        let token = encode(&Header::new(ALGORITHM), claims, &self.keys.encoding)
            .map_err(|err| AppError::InternalError().trace(&err.to_string()))?;

        Ok(SignedToken { token, expiration })
    }

    fn decode(&self, token: &str) -> Result<RawClaims, TokenError> {
        decode::<RawClaims>(token, &self.keys.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(token_error)
    }
}

fn expiration(validity: Duration) -> AppResult<i64> {
    Utc::now()
        .checked_add_signed(validity)
        .map(|at| at.timestamp())
        .ok_or_else(|| AppError::InternalError().trace("token expiration is out of range"))
}

fn token_error(error: JsonWebTokenError) -> TokenError {
    match error.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => TokenError::InvalidSignature,
        _ => TokenError::Malformed,
    }
}

impl JsonWebTokenService for JsonWebTokenServiceImpl {
    fn issue_access_token(
        &self,
        id: i64,
        role: Role,
        validity: Option<Duration>,
    ) -> AppResult<SignedToken> {
        let exp = expiration(validity.unwrap_or(self.lifetimes.access))?;

        self.sign(&AccessClaims { id, role, exp }, exp)
    }

    fn issue_refresh_token(
        &self,
        user_id: i64,
        validity: Option<Duration>,
    ) -> AppResult<SignedToken> {
        let exp = expiration(validity.unwrap_or(self.lifetimes.refresh))?;

        let claims = RefreshClaims {
            user_id,
            jti: Uuid::new_v4().to_string(),
            exp,
        };

        self.sign(&claims, exp)
    }

    fn verify_access_token(&self, token: &str) -> Result<AccessClaims, TokenError> {
        let claims = self.decode(token)?;

        match (claims.role, claims.id) {
            (None, _) => Err(TokenError::WrongKind),
            (Some(role), Some(id)) => Ok(AccessClaims {
                id,
                role,
                exp: claims.exp,
            }),
            (Some(_), None) => Err(TokenError::Malformed),
        }
    }

    fn verify_refresh_token(&self, token: &str) -> Result<RefreshClaims, TokenError> {
        let claims = self.decode(token)?;

        if claims.role.is_some() {
            return Err(TokenError::WrongKind);
        }

        match (claims.user_id, claims.jti) {
            (Some(user_id), Some(jti)) => Ok(RefreshClaims {
                user_id,
                jti,
                exp: claims.exp,
            }),
            _ => Err(TokenError::Malformed),
        }
    }
}
