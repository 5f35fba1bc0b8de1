use std::fmt;

use thiserror::Error;

/// One failing form field and the message shown next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Every field that failed presence validation, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

impl ValidationError {
    pub fn single(field: &'static str, message: &'static str) -> Self {
        Self { fields: vec![FieldError { field, message }] }
    }

    pub fn push(&mut self, field: &'static str, message: &'static str) {
        self.fields.push(FieldError { field, message });
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn for_field(&self, field: &str) -> Option<&FieldError> {
        self.fields.iter().find(|f| f.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.fields.iter().map(|e| e.field).collect();
        write!(f, "invalid fields: {}", names.join(", "))
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("cafe name already exists: {0}")]
    DuplicateName(String),
    #[error("cafe {0} not found")]
    NotFound(i32),
    #[error("database error: {0}")]
    Db(String),
}
