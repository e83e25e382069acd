use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Database(surrealdb::Error),
    #[error("unique index `{0}` already holds this value")]
    Conflict(String),
    #[error("record `{0}` was not returned by the database")]
    MissingRecord(&'static str),
    #[error("unexpected record id `{0}`")]
    RecordId(String),
}

impl From<surrealdb::Error> for RepositoryError {
    fn from(error: surrealdb::Error) -> Self {
        match error {
            surrealdb::Error::Db(surrealdb::error::Db::IndexExists { index, .. }) => {
                RepositoryError::Conflict(index)
            }
            // Remote engines only forward the rendered server message.
            surrealdb::Error::Api(ref api) if api.to_string().contains("already contains") => {
                RepositoryError::Conflict(api.to_string())
            }
            error => RepositoryError::Database(error),
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;
    use surrealdb::sql::Thing;

    #[test]
    fn test_index_exists_is_conflict() {
        let error = surrealdb::Error::Db(surrealdb::error::Db::IndexExists {
            thing: Thing::from(("user", "1")),
            index: "user_email".to_string(),
            value: "'ivan@mail.com'".to_string(),
        });

        assert!(matches!(
            RepositoryError::from(error),
            RepositoryError::Conflict(index) if index == "user_email"
        ));
    }

    #[test]
    fn test_remote_index_message_is_conflict() {
        let error = surrealdb::Error::Api(surrealdb::error::Api::Query(
            "Database index `user_phone` already contains '+79990001122', with record `user:1`"
                .to_string(),
        ));

        assert!(matches!(
            RepositoryError::from(error),
            RepositoryError::Conflict(_)
        ));
    }

    #[test]
    fn test_other_errors_stay_database() {
        let error = surrealdb::Error::Api(surrealdb::error::Api::Query(
            "Parse error".to_string(),
        ));

        assert!(matches!(
            RepositoryError::from(error),
            RepositoryError::Database(_)
        ));
    }
}
