// src/presentation/http/controllers/articles.rs
use crate::application::{
    dto::ArticleDto,
    queries::articles::{GetArticleBySlugQuery, Resolution},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::{HeaderName, HeaderValue},
    response::{IntoResponse, Response},
};

pub const RESOLUTION_HEADER: &str = "x-article-resolution";

#[utoipa::path(
    get,
    path = "/api/v1/post/{slug}",
    params(("slug" = String, Path, description = "Article UID")),
    responses(
        (status = 200, description = "Article detail view.", body = ArticleDto),
        (status = 404, description = "No document with this slug.", body = crate::presentation::http::error::ErrorResponse),
        (status = 502, description = "Content repository failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Response> {
    let resolved = state
        .services
        .article_queries
        .resolve(GetArticleBySlugQuery { slug })
        .await
        .into_http()?;

    let resolution = match resolved.resolution {
        Resolution::Prerendered => "prerendered",
        Resolution::OnDemand => "on-demand",
    };

    Ok((
        [(
            HeaderName::from_static(RESOLUTION_HEADER),
            HeaderValue::from_static(resolution),
        )],
        Json(ArticleDto::from(resolved.article)),
    )
        .into_response())
}
