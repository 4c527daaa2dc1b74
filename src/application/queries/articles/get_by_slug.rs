use super::{ArticleQueryService, Resolution};
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::{Article, ArticleSlug, assemble, assemble_with_banner_fallback},
};

pub struct GetArticleBySlugQuery {
    pub slug: String,
}

#[derive(Debug, Clone)]
pub struct ResolvedArticle {
    pub article: Article,
    pub resolution: Resolution,
}

impl ArticleQueryService {
    /// Fetch and assemble one article straight from the repository.
    pub async fn get_article_by_slug(
        &self,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<Article> {
        let slug = ArticleSlug::new(query.slug)?;
        self.assemble_by_slug(&slug).await
    }

    /// Serve a prerendered article when one exists, otherwise assemble it on
    /// demand. Only a slug the repository does not know yields `NotFound`.
    pub async fn resolve(&self, query: GetArticleBySlugQuery) -> ApplicationResult<ResolvedArticle> {
        let slug = ArticleSlug::new(query.slug)?;

        if let Some(article) = self.static_paths.get(&slug) {
            tracing::debug!(slug = %slug, "serving prerendered article");
            return Ok(ResolvedArticle {
                article: article.clone(),
                resolution: Resolution::Prerendered,
            });
        }

        tracing::debug!(slug = %slug, "assembling article on demand");
        let article = self.assemble_by_slug(&slug).await?;
        Ok(ResolvedArticle {
            article,
            resolution: Resolution::OnDemand,
        })
    }

    pub(super) async fn assemble_by_slug(&self, slug: &ArticleSlug) -> ApplicationResult<Article> {
        let raw = self
            .repo
            .get_by_slug(&self.settings.doc_type, slug.as_str())
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("article `{slug}` not found")))?;

        let article = match self.settings.banner_fallback_url.as_deref() {
            Some(fallback) => assemble_with_banner_fallback(&raw, fallback)?,
            None => assemble(&raw)?,
        };

        tracing::info!(slug = %slug, sections = article.content.len(), "assembled article");
        Ok(article)
    }
}
