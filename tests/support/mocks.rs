// tests/support/mocks.rs
use async_trait::async_trait;
use feedpress_core::domain::document::{
    ContentRepository, DocumentPage, DocumentType, PageCursor, QueryOptions, RawDocument,
};
use feedpress_core::domain::errors::{DomainError, DomainResult};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// In-memory content repository. Pages are keyed by the cursor that reaches
/// them; the first page is returned by `query_by_type`.
#[derive(Default)]
pub struct MockContentRepo {
    pub first_page: DocumentPage,
    pub pages: HashMap<String, DocumentPage>,
    pub documents: HashMap<String, RawDocument>,
    pub failing_cursors: HashSet<String>,
    pub fail_queries: bool,
    pub calls: Mutex<Vec<String>>,
}

impl MockContentRepo {
    pub fn with_first_page(first_page: DocumentPage) -> Self {
        Self {
            first_page,
            ..Self::default()
        }
    }

    pub fn unavailable() -> Self {
        Self {
            fail_queries: true,
            ..Self::default()
        }
    }

    pub fn page_at(mut self, cursor: &str, page: DocumentPage) -> Self {
        self.pages.insert(cursor.to_string(), page);
        self
    }

    pub fn document(mut self, doc: RawDocument) -> Self {
        let uid = doc.uid.clone().expect("documents need a uid");
        self.documents.insert(uid, doc);
        self
    }

    pub fn failing_at(mut self, cursor: &str) -> Self {
        self.failing_cursors.insert(cursor.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ContentRepository for MockContentRepo {
    async fn query_by_type(
        &self,
        doc_type: &DocumentType,
        options: &QueryOptions,
    ) -> DomainResult<DocumentPage> {
        self.record(format!(
            "query:{doc_type}:{}:{}",
            options.page_size,
            options.language.as_query_value()
        ));
        if self.fail_queries {
            return Err(DomainError::Fetch("repository unavailable".into()));
        }
        Ok(self.first_page.clone())
    }

    async fn fetch_page(&self, cursor: &PageCursor) -> DomainResult<DocumentPage> {
        self.record(format!("page:{cursor}"));
        if self.failing_cursors.contains(cursor.as_str()) {
            return Err(DomainError::Fetch("connection reset".into()));
        }
        self.pages
            .get(cursor.as_str())
            .cloned()
            .ok_or_else(|| DomainError::Fetch("invalid cursor".into()))
    }

    async fn get_by_slug(
        &self,
        doc_type: &DocumentType,
        slug: &str,
    ) -> DomainResult<Option<RawDocument>> {
        self.record(format!("slug:{doc_type}:{slug}"));
        if self.fail_queries {
            return Err(DomainError::Fetch("repository unavailable".into()));
        }
        Ok(self.documents.get(slug).cloned())
    }
}
