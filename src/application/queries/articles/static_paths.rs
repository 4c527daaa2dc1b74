// src/application/queries/articles/static_paths.rs
use std::collections::HashMap;

use super::ArticleQueryService;
use crate::domain::article::{Article, ArticleSlug};

/// How an article request was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Prerendered,
    OnDemand,
}

/// Articles assembled ahead of time. Slugs outside this set are still served,
/// by assembling them when first requested.
#[derive(Debug, Clone, Default)]
pub struct StaticArticlePaths {
    pages: HashMap<ArticleSlug, Article>,
}

impl StaticArticlePaths {
    pub fn insert(&mut self, slug: ArticleSlug, article: Article) {
        self.pages.insert(slug, article);
    }

    pub fn get(&self, slug: &ArticleSlug) -> Option<&Article> {
        self.pages.get(slug)
    }

    pub fn contains(&self, slug: &ArticleSlug) -> bool {
        self.pages.contains_key(slug)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl ArticleQueryService {
    /// Assemble every slug in `slugs` up front. A slug that fails is logged and
    /// left out; requests for it fall through to on-demand assembly.
    pub async fn prerender(&self, slugs: &[String]) -> StaticArticlePaths {
        let mut paths = StaticArticlePaths::default();

        for raw_slug in slugs {
            let slug = match ArticleSlug::new(raw_slug.as_str()) {
                Ok(slug) => slug,
                Err(err) => {
                    tracing::warn!(slug = %raw_slug, error = %err, "skipping invalid prerender slug");
                    continue;
                }
            };

            match self.assemble_by_slug(&slug).await {
                Ok(article) => paths.insert(slug, article),
                Err(err) => {
                    tracing::warn!(slug = %slug, error = %err, "prerender failed; slug will resolve on demand");
                }
            }
        }

        tracing::info!(count = paths.len(), "prerendered article paths");
        paths
    }
}
