use crate::domain::models::role::Role;
use crate::domain::models::user::User;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct UserDTO {
    id: i64,
    name: String,
    surname: String,
    patronymic: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    is_verified_email: bool,
    is_verified_phone: bool,
    role: Role,
}

impl From<User> for UserDTO {
    fn from(val: User) -> Self {
        UserDTO {
            id: val.id,
            name: val.name,
            surname: val.surname,
            patronymic: val.patronymic,
            email: val.email,
            phone: val.phone,
            is_verified_email: val.is_verified_email,
            is_verified_phone: val.is_verified_phone,
            role: val.role,
        }
    }
}
