use models::errors::{ModelError, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(ValidationError),
    #[error("duplicate name: {0}")]
    DuplicateName(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i32) -> Self { Self::NotFound(format!("{} {} not found", entity, id)) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(v) => Self::Validation(v),
            ModelError::DuplicateName(name) => Self::DuplicateName(name),
            ModelError::NotFound(id) => Self::not_found("cafe", id),
            ModelError::Db(msg) => Self::Db(msg),
        }
    }
}
