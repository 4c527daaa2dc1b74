use super::PostQueryService;
use crate::{
    application::error::ApplicationResult,
    domain::post::{PostPagination, normalize_all},
};

impl PostQueryService {
    /// First page of the list, used as the initial render state.
    pub async fn load_initial(&self) -> ApplicationResult<PostPagination> {
        let page = self
            .repo
            .query_by_type(&self.settings.doc_type, &self.settings.query_options())
            .await?;

        let results = normalize_all(&page.results)?;
        let pagination = PostPagination {
            results,
            next_page: page.next_page,
        };

        tracing::info!(
            doc_type = %self.settings.doc_type,
            count = pagination.results.len(),
            has_more = pagination.has_more(),
            "loaded initial posts"
        );
        tracing::debug!(results = ?pagination.results, "initial post page");

        Ok(pagination)
    }
}
