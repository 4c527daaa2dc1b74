use std::sync::Arc;

use crate::domain::document::{ContentRepository, DocumentType, LanguageFilter, QueryOptions};

pub const DEFAULT_PAGE_SIZE: u32 = 2;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Fixed query shape used for every list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostListSettings {
    pub doc_type: DocumentType,
    pub page_size: u32,
    pub language: LanguageFilter,
}

impl PostListSettings {
    pub fn new(doc_type: DocumentType, page_size: u32) -> Self {
        let page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size.min(MAX_PAGE_SIZE)
        };

        Self {
            doc_type,
            page_size,
            language: LanguageFilter::All,
        }
    }

    pub(super) fn query_options(&self) -> QueryOptions {
        QueryOptions {
            page_size: self.page_size,
            language: self.language.clone(),
        }
    }
}

/// The list pipeline: fetches pages from the repository and runs each result
/// through the shared post normalizer.
pub struct PostQueryService {
    pub(super) repo: Arc<dyn ContentRepository>,
    pub(super) settings: PostListSettings,
}

impl PostQueryService {
    pub fn new(repo: Arc<dyn ContentRepository>, settings: PostListSettings) -> Self {
        Self { repo, settings }
    }

    pub fn settings(&self) -> &PostListSettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_type() -> DocumentType {
        DocumentType::new("post").unwrap()
    }

    #[test]
    fn zero_page_size_uses_default() {
        assert_eq!(PostListSettings::new(post_type(), 0).page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn page_size_is_capped() {
        assert_eq!(PostListSettings::new(post_type(), 500).page_size, MAX_PAGE_SIZE);
        assert_eq!(PostListSettings::new(post_type(), 7).page_size, 7);
    }

    #[test]
    fn queries_all_languages() {
        let options = PostListSettings::new(post_type(), 5).query_options();
        assert_eq!(options.language.as_query_value(), "*");
    }
}
