mod get_by_slug;
mod service;
mod static_paths;

pub use get_by_slug::{GetArticleBySlugQuery, ResolvedArticle};
pub use service::{ArticleQueryService, ArticleSettings};
pub use static_paths::{Resolution, StaticArticlePaths};
