use std::sync::Arc;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::models::user::{Contact, CreateUser, User};
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
use crate::domain::repositories::user::UserRepository;
use crate::infrastructure::models::user::{SurrealCount, SurrealUser, SurrealUserCreate};

pub struct UserRepositoryImpl {
    db: Arc<Surreal<Client>>,
}

impl UserRepositoryImpl {
    pub fn new(db: Arc<Surreal<Client>>) -> Self {
        Self { db }
    }

    /// Next integer id for the user table.
    async fn next_id(&self) -> RepositoryResult<i64> {
        let id: Option<i64> = self
            .db
            .query("UPSERT type::thing($counter, $table) SET value += 1 RETURN VALUE value")
            .bind(("counter", COUNTER))
            .bind(("table", USER))
            .await?
            .take(0)?;

        id.ok_or(RepositoryError::MissingRecord(COUNTER))
    }
}

const USER: &str = "user";
const COUNTER: &str = "counter";

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn is_registered(&self, contact: &Contact) -> RepositoryResult<bool> {
        let mut res = self
            .db
            .query(format!(
                "(SELECT count() FROM type::table($table) WHERE {contact} = type::string($value) GROUP ALL)[0] or {{ count: 0 }}"
            ))
            .bind(("table", USER))
            .bind(("value", contact.value().to_owned()))
            .await?;

        let counter = res.take::<Option<SurrealCount>>(0)?;

        Ok(counter.is_some_and(|counter| counter.count > 0))
    }

    async fn create(&self, new_user: CreateUser) -> RepositoryResult<User> {
        let id = self.next_id().await?;

        let user: Option<SurrealUser> = self
            .db
            .create((USER, id))
            .content(SurrealUserCreate::from(new_user))
            .await?;

        user.ok_or(RepositoryError::MissingRecord(USER))?
            .try_into()
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<User>> {
        let user: Option<SurrealUser> = self.db.select((USER, id)).await?;

        user.map(User::try_from).transpose()
    }

    async fn find_one(&self, contact: &Contact) -> RepositoryResult<Option<User>> {
        let user: Option<SurrealUser> = self
            .db
            .query(format!(
                "SELECT * FROM type::table($table) WHERE {contact} = type::string($value) LIMIT 1"
            ))
            .bind(("table", USER))
            .bind(("value", contact.value().to_owned()))
            .await?
            .take(0)?;

        user.map(User::try_from).transpose()
    }

    async fn delete(&self, id: i64) -> RepositoryResult<bool> {
        let deleted: Option<SurrealUser> = self.db.delete((USER, id)).await?;

        Ok(deleted.is_some())
    }

    async fn store_code(&self, contact: &Contact, code: u32) -> RepositoryResult<bool> {
        let updated: Vec<SurrealUser> = self
            .db
            .query(format!(
                "UPDATE type::table($table) SET {code_column} = $code WHERE {contact} = type::string($value)",
                code_column = contact.code_column(),
            ))
            .bind(("table", USER))
            .bind(("value", contact.value().to_owned()))
            .bind(("code", code))
            .await?
            .take(0)?;

        Ok(!updated.is_empty())
    }

    async fn consume_code(&self, contact: &Contact, code: u32) -> RepositoryResult<bool> {
        let updated: Vec<SurrealUser> = self
            .db
            .query(format!(
                "UPDATE type::table($table) SET {code_column} = NONE, {verified_column} = true WHERE {contact} = type::string($value) AND {code_column} = $code",
                code_column = contact.code_column(),
                verified_column = contact.verified_column(),
            ))
            .bind(("table", USER))
            .bind(("value", contact.value().to_owned()))
            .bind(("code", code))
            .await?
            .take(0)?;

        Ok(!updated.is_empty())
    }
}

#[cfg(test)]
pub mod mock {
    use tokio::sync::Mutex;

    use super::*;

    #[derive(Default)]
    pub struct UserRepositoryImpl {
        pub users: Mutex<Vec<User>>,
    }

    fn has_contact(user: &User, contact: &Contact) -> bool {
        match contact {
            Contact::Email(email) => user.email.as_deref() == Some(email.as_str()),
            Contact::Phone(phone) => user.phone.as_deref() == Some(phone.as_str()),
        }
    }

    #[async_trait]
    impl UserRepository for UserRepositoryImpl {
        async fn is_registered(&self, contact: &Contact) -> RepositoryResult<bool> {
            let users = self.users.lock().await;
            Ok(users.iter().any(|u| has_contact(u, contact)))
        }

        async fn create(&self, new_user: CreateUser) -> RepositoryResult<User> {
            let mut users = self.users.lock().await;

            for (index, taken) in [
                ("user_email", new_user.email.as_ref().map(|e| Contact::Email(e.clone()))),
                ("user_phone", new_user.phone.as_ref().map(|p| Contact::Phone(p.clone()))),
            ] {
                if taken.is_some_and(|contact| users.iter().any(|u| has_contact(u, &contact))) {
                    return Err(RepositoryError::Conflict(index.to_string()));
                }
            }

            let user = User {
                id: users.iter().map(|u| u.id).max().unwrap_or(0) + 1,
                name: new_user.name,
                surname: new_user.surname,
                patronymic: new_user.patronymic,
                email: new_user.email,
                phone: new_user.phone,
                is_verified_email: false,
                is_verified_phone: false,
                verification_code_email: new_user.verification_code_email,
                verification_code_phone: new_user.verification_code_phone,
                role: new_user.role,
            };

            users.push(user.clone());

            Ok(user)
        }

        async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<User>> {
            let users = self.users.lock().await;
            Ok(users.iter().find(|u| u.id == id).cloned())
        }

        async fn find_one(&self, contact: &Contact) -> RepositoryResult<Option<User>> {
            let users = self.users.lock().await;
            Ok(users.iter().find(|u| has_contact(u, contact)).cloned())
        }

        async fn delete(&self, id: i64) -> RepositoryResult<bool> {
            let mut users = self.users.lock().await;
            let before = users.len();

            users.retain(|u| u.id != id);

            Ok(users.len() < before)
        }

        async fn store_code(&self, contact: &Contact, code: u32) -> RepositoryResult<bool> {
            let mut users = self.users.lock().await;

            match users.iter_mut().find(|u| has_contact(u, contact)) {
                Some(user) => {
                    match contact {
                        Contact::Email(_) => user.verification_code_email = Some(code),
                        Contact::Phone(_) => user.verification_code_phone = Some(code),
                    }
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn consume_code(&self, contact: &Contact, code: u32) -> RepositoryResult<bool> {
            let mut users = self.users.lock().await;

            let Some(user) = users
                .iter_mut()
                .find(|u| has_contact(u, contact) && u.verification_code(contact) == Some(code))
            else {
                return Ok(false);
            };

            match contact {
                Contact::Email(_) => {
                    user.verification_code_email = None;
                    user.is_verified_email = true;
                }
                Contact::Phone(_) => {
                    user.verification_code_phone = None;
                    user.is_verified_phone = true;
                }
            }

            Ok(true)
        }
    }
}
