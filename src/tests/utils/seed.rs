use std::sync::Arc;

use ::surrealdb::{Surreal, engine::remote::ws::Client};

use crate::domain::models::role::Role;
use crate::domain::models::user::{Contact, CreateUser, User};
use crate::domain::repositories::user::UserRepository;
use crate::infrastructure::repositories::user::UserRepositoryImpl;

pub fn user(id: i64, role: Role) -> User {
    User {
        id,
        name: "Ivan".to_string(),
        surname: "Petrov".to_string(),
        patronymic: None,
        email: None,
        phone: Some(format!("+7999000{id:04}")),
        is_verified_email: false,
        is_verified_phone: true,
        verification_code_email: None,
        verification_code_phone: None,
        role,
    }
}

/// Stores a user whose email is already confirmed.
pub async fn seed_user(conn: &Surreal<Client>, email: &str, role: Role) -> User {
    let users = UserRepositoryImpl::new(Arc::new(conn.clone()));
    let contact = Contact::Email(email.to_string());

    let created = users
        .create(CreateUser {
            name: "Test".to_string(),
            surname: "User".to_string(),
            patronymic: None,
            email: Some(email.to_string()),
            phone: None,
            verification_code_email: Some(111_111),
            verification_code_phone: None,
            role,
        })
        .await
        .unwrap();

    assert!(users.consume_code(&contact, 111_111).await.unwrap());

    users.find_by_id(created.id).await.unwrap().unwrap()
}
