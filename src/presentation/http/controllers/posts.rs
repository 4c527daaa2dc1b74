// src/presentation/http/controllers/posts.rs
use crate::application::{
    dto::{PostPageDto, PostPaginationDto},
    error::ApplicationError,
    queries::posts::LoadNextPostsQuery,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct NextPageParams {
    /// Opaque `next_page` value from the previous response.
    #[serde(default)]
    pub cursor: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/posts",
    responses(
        (status = 200, description = "First page of posts.", body = PostPaginationDto),
        (status = 502, description = "Content repository failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<PostPaginationDto>> {
    state
        .services
        .post_queries
        .load_initial()
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/next",
    params(NextPageParams),
    responses(
        (status = 200, description = "Next page of posts, to be appended to the current list.", body = PostPageDto),
        (status = 400, description = "No cursor supplied.", body = crate::presentation::http::error::ErrorResponse),
        (status = 502, description = "Invalid cursor or content repository failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn next_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<NextPageParams>,
) -> HttpResult<Json<PostPageDto>> {
    let cursor = params
        .cursor
        .filter(|cursor| !cursor.trim().is_empty())
        .ok_or_else(|| {
            HttpError::from_error(ApplicationError::validation(
                "cursor is required; the list has no further pages once next_page is null",
            ))
        })?;

    state
        .services
        .post_queries
        .load_next(LoadNextPostsQuery { cursor })
        .await
        .into_http()
        .map(|page| Json(page.into()))
}
