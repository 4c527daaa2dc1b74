// src/infrastructure/prismic/client.rs
use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;

use super::api::{ApiRoot, SearchResponse};
use super::error::{map_reqwest, map_status};
use crate::domain::document::{
    ContentRepository, DocumentPage, DocumentType, PageCursor, QueryOptions, RawDocument,
};
use crate::domain::errors::{DomainError, DomainResult};

/// [`ContentRepository`] over the Prismic REST API (v2).
///
/// The master ref is resolved on every query so newly published documents
/// show up without a restart. Page cursors are the `next_page` URLs the API
/// hands back; they are only followed when they point at the configured
/// repository.
pub struct PrismicContentRepository {
    client: reqwest::Client,
    endpoint: Url,
    access_token: Option<String>,
}

impl PrismicContentRepository {
    pub fn new(endpoint: &str, access_token: Option<String>) -> DomainResult<Self> {
        Self::with_client(reqwest::Client::new(), endpoint, access_token)
    }

    pub fn with_client(
        client: reqwest::Client,
        endpoint: &str,
        access_token: Option<String>,
    ) -> DomainResult<Self> {
        let endpoint = Url::parse(endpoint.trim_end_matches('/')).map_err(|err| {
            DomainError::Validation(format!("invalid repository endpoint `{endpoint}`: {err}"))
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(DomainError::Validation(format!(
                "repository endpoint must be http(s), got `{endpoint}`"
            )));
        }

        Ok(Self {
            client,
            endpoint,
            access_token: access_token.filter(|token| !token.trim().is_empty()),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, mut url: Url) -> DomainResult<T> {
        if let Some(token) = &self.access_token {
            if !url.query_pairs().any(|(key, _)| key == "access_token") {
                url.query_pairs_mut().append_pair("access_token", token);
            }
        }

        tracing::debug!(url = %redacted(&url), "content repository request");
        let resp = self.client.get(url).send().await.map_err(map_reqwest)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(map_status(status, &body));
        }

        resp.json::<T>().await.map_err(map_reqwest)
    }

    async fn master_ref(&self) -> DomainResult<String> {
        let root: ApiRoot = self.get_json(self.endpoint.clone()).await?;
        root.master_ref()
            .map(str::to_string)
            .ok_or_else(|| DomainError::Fetch("repository exposes no master ref".into()))
    }

    async fn search(&self, predicate: String, page_size: u32, lang: &str) -> DomainResult<DocumentPage> {
        let reference = self.master_ref().await?;
        let mut url = self.search_url()?;
        url.query_pairs_mut()
            .append_pair("ref", &reference)
            .append_pair("q", &predicate)
            .append_pair("pageSize", &page_size.to_string())
            .append_pair("lang", lang);

        let response: SearchResponse = self.get_json(url).await?;
        Ok(response.into())
    }

    fn search_url(&self) -> DomainResult<Url> {
        let base = self.endpoint.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}/documents/search"))
            .map_err(|err| DomainError::Fetch(format!("cannot build search url: {err}")))
    }

    fn cursor_url(&self, cursor: &PageCursor) -> DomainResult<Url> {
        let url = Url::parse(cursor.as_str())
            .map_err(|_| DomainError::Fetch("invalid cursor".into()))?;
        if !matches!(url.scheme(), "http" | "https") || url.origin() != self.endpoint.origin() {
            return Err(DomainError::Fetch(
                "invalid cursor: not issued by this repository".into(),
            ));
        }
        Ok(url)
    }
}

#[async_trait]
impl ContentRepository for PrismicContentRepository {
    async fn query_by_type(
        &self,
        doc_type: &DocumentType,
        options: &QueryOptions,
    ) -> DomainResult<DocumentPage> {
        let predicate = format!(r#"[[at(document.type, "{doc_type}")]]"#);
        self.search(predicate, options.page_size, options.language.as_query_value())
            .await
    }

    async fn fetch_page(&self, cursor: &PageCursor) -> DomainResult<DocumentPage> {
        let url = self.cursor_url(cursor)?;
        let response: SearchResponse = self.get_json(url).await?;
        Ok(response.into())
    }

    async fn get_by_slug(
        &self,
        doc_type: &DocumentType,
        slug: &str,
    ) -> DomainResult<Option<RawDocument>> {
        let escaped = slug.replace('\\', "\\\\").replace('"', "\\\"");
        let predicate = format!(r#"[[at(my.{doc_type}.uid, "{escaped}")]]"#);
        let page = self.search(predicate, 1, "*").await?;
        Ok(page.results.into_iter().next())
    }
}

fn redacted(url: &Url) -> String {
    let mut shown = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "access_token" { "***".to_string() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    if pairs.is_empty() {
        return shown.to_string();
    }
    shown.query_pairs_mut().clear().extend_pairs(pairs);
    shown.to_string()
}
