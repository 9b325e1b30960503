use thiserror::Error;

use crate::models::sessions::Role;

#[derive(Debug, Error)]
pub enum ClinicError {
    #[error("Email {0} is already registered")]
    DuplicateEmail(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Missing required field: {0}")]
    ValidationMissing(&'static str),

    #[error("Please login as {0}")]
    NotAuthorized(Role),

    #[error("DB error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type ClinicResult<T> = Result<T, ClinicError>;
