// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::queries::{
        articles::{ArticleQueryService, ArticleSettings, StaticArticlePaths},
        posts::{PostListSettings, PostQueryService},
    },
    domain::document::ContentRepository,
};

pub struct ApplicationServices {
    pub post_queries: Arc<PostQueryService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(
        content_repo: Arc<dyn ContentRepository>,
        list_settings: PostListSettings,
        article_settings: ArticleSettings,
        static_paths: StaticArticlePaths,
    ) -> Self {
        let post_queries = Arc::new(PostQueryService::new(
            Arc::clone(&content_repo),
            list_settings,
        ));

        let article_queries = Arc::new(
            ArticleQueryService::new(Arc::clone(&content_repo), article_settings)
                .with_static_paths(static_paths),
        );

        Self {
            post_queries,
            article_queries,
        }
    }

    /// Build the services, prerendering `prerender_slugs` against the
    /// repository before returning.
    pub async fn bootstrap(
        content_repo: Arc<dyn ContentRepository>,
        list_settings: PostListSettings,
        article_settings: ArticleSettings,
        prerender_slugs: &[String],
    ) -> Self {
        let static_paths = if prerender_slugs.is_empty() {
            StaticArticlePaths::default()
        } else {
            ArticleQueryService::new(Arc::clone(&content_repo), article_settings.clone())
                .prerender(prerender_slugs)
                .await
        };

        Self::new(content_repo, list_settings, article_settings, static_paths)
    }
}
