// src/domain/document/timestamp.rs
//! The repository emits offsets without a colon (`2021-03-25T19:25:28+0000`),
//! which strict RFC 3339 parsing rejects.
use chrono::{DateTime, Utc};

pub fn parse(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%z"))
        .or_else(|_| DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
