// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Failure kinds surfaced to the presentation layer. Each kind stays distinct
/// so callers can pick the right user-visible outcome.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("normalization failed: {0}")]
    Normalization(String),

    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("missing asset: {0}")]
    MissingAsset(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn normalization(msg: impl Into<String>) -> Self {
        Self::Normalization(msg.into())
    }

    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn missing_asset(msg: impl Into<String>) -> Self {
        Self::MissingAsset(msg.into())
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::Normalization(msg) => Self::Normalization(msg),
            DomainError::MissingAsset(msg) => Self::MissingAsset(msg),
            DomainError::NotFound(msg) => Self::NotFound(msg),
            DomainError::Fetch(msg) => Self::Fetch(msg),
        }
    }
}
