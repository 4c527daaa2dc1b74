use crate::domain::errors::DomainError;
use reqwest::StatusCode;

pub fn map_reqwest(err: reqwest::Error) -> DomainError {
    if err.is_decode() {
        return DomainError::Fetch(format!("unreadable repository response: {err}"));
    }
    if err.is_timeout() {
        return DomainError::Fetch(format!("repository request timed out: {err}"));
    }
    DomainError::Fetch(format!("repository request failed: {err}"))
}

pub fn map_status(status: StatusCode, body: &str) -> DomainError {
    let detail: String = body.trim().chars().take(200).collect();
    match status {
        StatusCode::NOT_FOUND => DomainError::Fetch(format!("repository resource not found: {detail}")),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            DomainError::Fetch(format!("repository rejected credentials ({status})"))
        }
        other => DomainError::Fetch(format!("repository responded {other}: {detail}")),
    }
}
