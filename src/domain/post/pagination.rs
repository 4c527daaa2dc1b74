// src/domain/post/pagination.rs
use crate::domain::document::PageCursor;
use crate::domain::post::entity::Post;

/// Initial list state: the first page of posts plus the continuation cursor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostPagination {
    pub results: Vec<Post>,
    pub next_page: Option<PageCursor>,
}

impl PostPagination {
    pub fn has_more(&self) -> bool {
        self.next_page.is_some()
    }
}

/// Result of one continuation fetch, before it is merged into a feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostPage {
    pub new_posts: Vec<Post>,
    pub next_page: Option<PageCursor>,
}

/// Accumulated list state for one browsing session.
///
/// `append` consumes the feed and returns the successor, so a caller that
/// wants to keep the previous state on a failed fetch simply never calls it.
/// Merges are expected to be serialized by the caller: there is no ordering
/// logic for interleaved responses.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostFeed {
    accumulated: Vec<Post>,
    cursor: Option<PageCursor>,
}

impl PostFeed {
    pub fn from_page(page: PostPagination) -> Self {
        Self {
            accumulated: page.results,
            cursor: page.next_page,
        }
    }

    #[must_use]
    pub fn append(mut self, new_posts: Vec<Post>, new_cursor: Option<PageCursor>) -> Self {
        self.accumulated.extend(new_posts);
        self.cursor = new_cursor;
        self
    }

    #[must_use]
    pub fn merge(self, page: PostPage) -> Self {
        self.append(page.new_posts, page.next_page)
    }

    pub fn has_more(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn posts(&self) -> &[Post] {
        &self.accumulated
    }

    pub fn next_page(&self) -> Option<&PageCursor> {
        self.cursor.as_ref()
    }

    pub fn into_pagination(self) -> PostPagination {
        PostPagination {
            results: self.accumulated,
            next_page: self.cursor,
        }
    }
}
