//! Business operations sitting between the HTTP routes and the repository.

use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod teachers;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Entity {entity} with key: {key} does not exist")]
    EntityNotFound { entity: &'static str, key: String },

    #[error("Insert failed: {0}")]
    Insertion(String),

    #[error("Invalid input: {0}")]
    Form(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        ServiceError::EntityNotFound {
            entity,
            key: key.to_string(),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
