use anyhow::Result;
use feedpress_core::application::queries::{articles::ArticleSettings, posts::PostListSettings};
use feedpress_core::application::services::ApplicationServices;
use feedpress_core::config::AppConfig;
use feedpress_core::domain::document::{ContentRepository, DocumentType};
use feedpress_core::infrastructure::PrismicContentRepository;
use feedpress_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let content_repo: Arc<dyn ContentRepository> = Arc::new(PrismicContentRepository::new(
        config.prismic_endpoint(),
        config.prismic_access_token().map(str::to_string),
    )?);

    let doc_type = DocumentType::new(config.post_document_type())?;
    let list_settings = PostListSettings::new(doc_type.clone(), config.posts_page_size());
    let article_settings = ArticleSettings {
        doc_type,
        banner_fallback_url: config.banner_placeholder_url().map(str::to_string),
    };

    let services = Arc::new(
        ApplicationServices::bootstrap(
            Arc::clone(&content_repo),
            list_settings,
            article_settings,
            config.prerender_slugs(),
        )
        .await,
    );

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,reqwest=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
