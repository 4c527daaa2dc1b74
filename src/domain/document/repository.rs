use crate::domain::document::entity::{DocumentPage, RawDocument};
use crate::domain::document::value_objects::{DocumentType, PageCursor};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LanguageFilter {
    #[default]
    All,
    Only(String),
}

impl LanguageFilter {
    pub fn as_query_value(&self) -> &str {
        match self {
            Self::All => "*",
            Self::Only(lang) => lang,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    pub page_size: u32,
    pub language: LanguageFilter,
}

/// Read access to the remote content repository.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn query_by_type(
        &self,
        doc_type: &DocumentType,
        options: &QueryOptions,
    ) -> DomainResult<DocumentPage>;

    async fn fetch_page(&self, cursor: &PageCursor) -> DomainResult<DocumentPage>;

    async fn get_by_slug(
        &self,
        doc_type: &DocumentType,
        slug: &str,
    ) -> DomainResult<Option<RawDocument>>;
}
