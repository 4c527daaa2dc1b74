// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    prismic_endpoint: String,
    prismic_access_token: Option<String>,
    listen_addr: String,
    posts_page_size: u32,
    post_document_type: String,
    prerender_slugs: Vec<String>,
    banner_placeholder_url: Option<String>,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_page_size() -> u32 {
    2
}

fn default_document_type() -> String {
    "post".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

impl AppConfig {
    /// Build configuration from environment variables, loading `.env` first
    /// when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] over an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prismic_endpoint = lookup("PRISMIC_API_ENDPOINT")
            .and_then(non_empty)
            .ok_or(ConfigError::Missing("PRISMIC_API_ENDPOINT"))?;
        if !(prismic_endpoint.starts_with("http://") || prismic_endpoint.starts_with("https://")) {
            return Err(ConfigError::Invalid(
                "PRISMIC_API_ENDPOINT must be an http(s) URL".into(),
            ));
        }

        let prismic_access_token = lookup("PRISMIC_ACCESS_TOKEN").and_then(non_empty);
        let listen_addr = lookup("LISTEN_ADDR")
            .and_then(non_empty)
            .unwrap_or_else(default_listen_addr);

        let posts_page_size = match lookup("POSTS_PAGE_SIZE").and_then(non_empty) {
            None => default_page_size(),
            Some(raw) => match raw.parse::<u32>() {
                Ok(size) if (1..=100).contains(&size) => size,
                _ => {
                    return Err(ConfigError::Invalid(format!(
                        "POSTS_PAGE_SIZE must be between 1 and 100, got `{raw}`"
                    )));
                }
            },
        };

        let post_document_type = lookup("POST_DOCUMENT_TYPE")
            .and_then(non_empty)
            .unwrap_or_else(default_document_type);

        let prerender_slugs = lookup("PRERENDER_SLUGS")
            .map(|raw| split_list(&raw))
            .unwrap_or_default();

        let banner_placeholder_url = lookup("BANNER_PLACEHOLDER_URL").and_then(non_empty);

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|raw| split_list(&raw))
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            prismic_endpoint,
            prismic_access_token,
            listen_addr,
            posts_page_size,
            post_document_type,
            prerender_slugs,
            banner_placeholder_url,
            allowed_origins,
        })
    }

    pub fn prismic_endpoint(&self) -> &str {
        &self.prismic_endpoint
    }

    pub fn prismic_access_token(&self) -> Option<&str> {
        self.prismic_access_token.as_deref()
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn posts_page_size(&self) -> u32 {
        self.posts_page_size
    }

    pub fn post_document_type(&self) -> &str {
        &self.post_document_type
    }

    /// Slugs assembled at startup; everything else resolves on demand.
    pub fn prerender_slugs(&self) -> &[String] {
        &self.prerender_slugs
    }

    pub fn banner_placeholder_url(&self) -> Option<&str> {
        self.banner_placeholder_url.as_deref()
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}
