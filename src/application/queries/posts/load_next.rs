use super::PostQueryService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        document::PageCursor,
        post::{PostFeed, PostPage, normalize_all},
    },
};

pub struct LoadNextPostsQuery {
    pub cursor: String,
}

impl PostQueryService {
    /// Fetch and normalize the page at `query.cursor`. The result is not
    /// merged; feed it to [`PostFeed::merge`] once it has arrived.
    ///
    /// A blank cursor is a malformed request and fails with `Validation`
    /// before the repository is called. A non-blank cursor the repository
    /// cannot follow fails with `Fetch`.
    pub async fn load_next(&self, query: LoadNextPostsQuery) -> ApplicationResult<PostPage> {
        let cursor = PageCursor::new(query.cursor)?;
        self.fetch_next(&cursor).await
    }

    /// Advance `feed` by one page. On failure the borrowed feed is untouched,
    /// so the caller can retry from the same state.
    pub async fn load_more(&self, feed: &PostFeed) -> ApplicationResult<PostFeed> {
        let cursor = feed
            .next_page()
            .ok_or_else(|| ApplicationError::validation("no further pages to load"))?;

        let page = self.fetch_next(cursor).await?;
        Ok(feed.clone().merge(page))
    }

    async fn fetch_next(&self, cursor: &PageCursor) -> ApplicationResult<PostPage> {
        let page = self.repo.fetch_page(cursor).await.map_err(|err| {
            tracing::warn!(cursor = %cursor, error = %err, "continuation fetch failed");
            ApplicationError::from(err)
        })?;

        let new_posts = normalize_all(&page.results)?;
        let next = PostPage {
            new_posts,
            next_page: page.next_page,
        };

        tracing::info!(
            count = next.new_posts.len(),
            has_more = next.next_page.is_some(),
            "loaded next posts"
        );
        tracing::debug!(results = ?next.new_posts, "continuation post page");

        Ok(next)
    }
}
