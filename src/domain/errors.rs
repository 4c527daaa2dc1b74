// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("normalization error: {0}")]
    Normalization(String),
    #[error("missing asset: {0}")]
    MissingAsset(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("fetch error: {0}")]
    Fetch(String),
}
