use crate::domain::post::{PostFeed, PostPage, PostPagination};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::PostDto;

/// List view model: the accumulated posts and the cursor for the next page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostPaginationDto {
    pub results: Vec<PostDto>,
    pub next_page: Option<String>,
    pub has_more: bool,
}

impl PostPaginationDto {
    pub fn new(results: Vec<PostDto>, next_page: Option<String>) -> Self {
        let has_more = next_page.is_some();
        Self {
            results,
            next_page,
            has_more,
        }
    }
}

impl From<PostPagination> for PostPaginationDto {
    fn from(page: PostPagination) -> Self {
        Self::new(
            page.results.into_iter().map(Into::into).collect(),
            page.next_page.map(Into::into),
        )
    }
}

impl From<PostFeed> for PostPaginationDto {
    fn from(feed: PostFeed) -> Self {
        feed.into_pagination().into()
    }
}

/// One continuation page, to be appended by the client to what it already has.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostPageDto {
    pub new_posts: Vec<PostDto>,
    pub next_page: Option<String>,
    pub has_more: bool,
}

impl From<PostPage> for PostPageDto {
    fn from(page: PostPage) -> Self {
        let next_page: Option<String> = page.next_page.map(Into::into);
        Self {
            new_posts: page.new_posts.into_iter().map(Into::into).collect(),
            has_more: next_page.is_some(),
            next_page,
        }
    }
}
