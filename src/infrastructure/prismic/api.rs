// Wire shapes of the repository REST API.
use reqwest::Url;
use serde::Deserialize;

use crate::domain::document::{DocumentPage, PageCursor, RawDocument};

#[derive(Debug, Deserialize)]
pub struct ApiRoot {
    #[serde(default)]
    pub refs: Vec<ApiRef>,
}

impl ApiRoot {
    pub fn master_ref(&self) -> Option<&str> {
        self.refs
            .iter()
            .find(|r| r.is_master_ref)
            .map(|r| r.reference.as_str())
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiRef {
    #[serde(rename = "ref")]
    pub reference: String,
    #[serde(rename = "isMasterRef", default)]
    pub is_master_ref: bool,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results_size: u64,
    #[serde(default)]
    pub next_page: Option<String>,
    #[serde(default)]
    pub results: Vec<RawDocument>,
}

impl From<SearchResponse> for DocumentPage {
    fn from(response: SearchResponse) -> Self {
        Self {
            results: response.results,
            next_page: response
                .next_page
                .map(without_access_token)
                .and_then(|next| PageCursor::new(next).ok()),
            page: response.page,
            total_pages: response.total_pages,
            total_results_size: response.total_results_size,
        }
    }
}

/// Cursors are handed to HTTP clients; the repository echoes the token back
/// in `next_page`, and `get_json` appends it again when the cursor is followed.
fn without_access_token(next: String) -> String {
    let Ok(mut url) = Url::parse(&next) else {
        return next;
    };
    if !url.query_pairs().any(|(key, _)| key == "access_token") {
        return next;
    }

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != "access_token")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    if kept.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(kept);
    }
    url.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn picks_master_ref() {
        let root: ApiRoot = serde_json::from_value(json!({
            "refs": [
                { "id": "preview", "ref": "p1", "isMasterRef": false },
                { "id": "master", "ref": "YFzF7hIAACQA", "isMasterRef": true }
            ]
        }))
        .unwrap();
        assert_eq!(root.master_ref(), Some("YFzF7hIAACQA"));
    }

    #[test]
    fn null_next_page_ends_pagination() {
        let response: SearchResponse = serde_json::from_value(json!({
            "page": 2, "total_pages": 2, "total_results_size": 3,
            "next_page": null, "results": []
        }))
        .unwrap();
        let page = DocumentPage::from(response);
        assert!(page.next_page.is_none());
        assert_eq!(page.page, 2);
        assert_eq!(page.total_results_size, 3);
    }

    #[test]
    fn next_page_drops_access_token() {
        let response: SearchResponse = serde_json::from_value(json!({
            "next_page": "https://blog.cdn.prismic.io/api/v2/documents/search?ref=m&page=2&access_token=SECRET",
            "results": []
        }))
        .unwrap();
        let cursor = DocumentPage::from(response).next_page.unwrap();
        assert!(!cursor.as_str().contains("SECRET"));
        assert!(cursor.as_str().contains("page=2"));
        assert!(cursor.as_str().contains("ref=m"));
    }

    #[test]
    fn cursor_without_other_params_keeps_path() {
        let cleaned = without_access_token(
            "https://blog.cdn.prismic.io/api/v2/documents/search?access_token=SECRET".into(),
        );
        assert_eq!(cleaned, "https://blog.cdn.prismic.io/api/v2/documents/search");
    }
}
