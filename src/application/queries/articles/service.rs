use std::sync::Arc;

use super::StaticArticlePaths;
use crate::domain::document::{ContentRepository, DocumentType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSettings {
    pub doc_type: DocumentType,
    /// Banner used when a document has none. Without it such documents fail
    /// with a missing-asset error.
    pub banner_fallback_url: Option<String>,
}

pub struct ArticleQueryService {
    pub(super) repo: Arc<dyn ContentRepository>,
    pub(super) settings: ArticleSettings,
    pub(super) static_paths: StaticArticlePaths,
}

impl ArticleQueryService {
    pub fn new(repo: Arc<dyn ContentRepository>, settings: ArticleSettings) -> Self {
        Self {
            repo,
            settings,
            static_paths: StaticArticlePaths::default(),
        }
    }

    #[must_use]
    pub fn with_static_paths(mut self, static_paths: StaticArticlePaths) -> Self {
        self.static_paths = static_paths;
        self
    }

    pub fn static_paths(&self) -> &StaticArticlePaths {
        &self.static_paths
    }
}
