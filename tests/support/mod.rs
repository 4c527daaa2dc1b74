// tests/support/mod.rs
// Shared by several integration test binaries; not every binary uses every
// helper.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use mocks::*;

use feedpress_core::application::queries::{
    articles::ArticleSettings,
    posts::PostListSettings,
};
use feedpress_core::application::services::ApplicationServices;
use feedpress_core::domain::document::DocumentType;
use feedpress_core::presentation::http::{routes::build_router, state::HttpState};
use std::sync::Arc;

/// Router over `repo`, with `prerender` assembled up front.
#[allow(dead_code)]
pub async fn make_test_router(repo: MockContentRepo, prerender: &[&str]) -> axum::Router {
    let doc_type = DocumentType::new("post").unwrap();
    let slugs: Vec<String> = prerender.iter().map(|s| s.to_string()).collect();
    let services = ApplicationServices::bootstrap(
        Arc::new(repo),
        PostListSettings::new(doc_type.clone(), 2),
        ArticleSettings {
            doc_type,
            banner_fallback_url: None,
        },
        &slugs,
    )
    .await;
    build_router(
        HttpState {
            services: Arc::new(services),
        },
        &["http://localhost:3000".to_string()],
    )
}
