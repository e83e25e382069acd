use serde::{Deserialize, Serialize};
use surrealdb::sql::{Id, Thing};

use crate::domain::models::role::Role;
use crate::domain::models::user::{CreateUser, User};
use crate::domain::repositories::repository::RepositoryError;

#[derive(Debug, Deserialize)]
pub struct SurrealUser {
    id: Thing,
    name: String,
    surname: String,
    patronymic: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    #[serde(default)]
    is_verified_email: bool,
    #[serde(default)]
    is_verified_phone: bool,
    verification_code_email: Option<u32>,
    verification_code_phone: Option<u32>,
    #[serde(default)]
    role: Role,
}

#[derive(Serialize)]
pub struct SurrealUserCreate {
    name: String,
    surname: String,
    patronymic: Option<String>,
    // Absent contacts stay out of the unique indexes.
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    is_verified_email: bool,
    is_verified_phone: bool,
    verification_code_email: Option<u32>,
    verification_code_phone: Option<u32>,
    role: Role,
}

impl From<CreateUser> for SurrealUserCreate {
    fn from(user: CreateUser) -> Self {
        SurrealUserCreate {
            name: user.name,
            surname: user.surname,
            patronymic: user.patronymic,
            email: user.email,
            phone: user.phone,
            is_verified_email: false,
            is_verified_phone: false,
            verification_code_email: user.verification_code_email,
            verification_code_phone: user.verification_code_phone,
            role: user.role,
        }
    }
}

impl TryFrom<SurrealUser> for User {
    type Error = RepositoryError;

    fn try_from(user: SurrealUser) -> Result<Self, Self::Error> {
        let id = match user.id.id {
            Id::Number(id) => id,
            other => return Err(RepositoryError::RecordId(other.to_string())),
        };

        Ok(User {
            id,
            name: user.name,
            surname: user.surname,
            patronymic: user.patronymic,
            email: user.email,
            phone: user.phone,
            is_verified_email: user.is_verified_email,
            is_verified_phone: user.is_verified_phone,
            verification_code_email: user.verification_code_email,
            verification_code_phone: user.verification_code_phone,
            role: user.role,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct SurrealCount {
    pub count: i64,
}
