// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::posts::list_posts,
        crate::presentation::http::controllers::posts::next_posts,
        crate::presentation::http::controllers::articles::get_article_by_slug,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::posts::NextPageParams,
            crate::application::dto::PostDto,
            crate::application::dto::PostDataDto,
            crate::application::dto::PostPaginationDto,
            crate::application::dto::PostPageDto,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleDataDto,
            crate::application::dto::BannerDto,
            crate::application::dto::ArticleContentDto
        )
    ),
    tags(
        (name = "Posts", description = "Paginated post list"),
        (name = "Articles", description = "Article detail pages"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Feedpress API",
        description = "Post list and article views over a headless content repository",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi);
    Router::new()
        .merge(swagger)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Path the snapshot binary writes to, overridable via `OPENAPI_SNAPSHOT_PATH`.
pub fn snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string())
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path = snapshot_path();
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
