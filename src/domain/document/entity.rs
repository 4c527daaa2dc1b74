// src/domain/document/entity.rs
use crate::domain::document::timestamp;
use crate::domain::document::value_objects::PageCursor;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::rich_text::RichText;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

/// A document exactly as the content repository returned it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawDocument {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(rename = "type", default)]
    pub doc_type: String,
    #[serde(default)]
    pub lang: Option<String>,
    /// Kept as sent; parsed by [`RawDocument::first_published_at`] so a bad
    /// value fails the one document instead of the whole response.
    #[serde(default)]
    pub first_publication_date: Option<String>,
    #[serde(default)]
    pub last_publication_date: Option<String>,
    #[serde(default)]
    pub data: Map<String, Value>,
}

impl RawDocument {
    /// Field lookup that treats an explicit `null` the same as absence.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.data.get(name).filter(|value| !value.is_null())
    }

    pub fn rich_text(&self, name: &str) -> DomainResult<RichText> {
        let value = self.field(name).ok_or_else(|| {
            DomainError::Normalization(format!(
                "document {} is missing required field `{name}`",
                self.id
            ))
        })?;
        RichText::from_value(name, value)
    }

    pub fn first_published_at(&self) -> DomainResult<Option<DateTime<Utc>>> {
        self.first_publication_date
            .as_deref()
            .map(|raw| {
                timestamp::parse(raw).ok_or_else(|| {
                    DomainError::Normalization(format!(
                        "document {}: invalid first_publication_date `{raw}`",
                        self.id
                    ))
                })
            })
            .transpose()
    }

    pub fn optional_rich_text(&self, name: &str) -> DomainResult<Option<RichText>> {
        self.field(name)
            .map(|value| RichText::from_value(name, value))
            .transpose()
    }
}

/// One page of a paginated repository query.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentPage {
    pub results: Vec<RawDocument>,
    pub next_page: Option<PageCursor>,
    pub page: u32,
    pub total_pages: u32,
    pub total_results_size: u64,
}

impl DocumentPage {
    pub fn new(results: Vec<RawDocument>, next_page: Option<PageCursor>) -> Self {
        Self {
            results,
            next_page,
            ..Self::default()
        }
    }
}
