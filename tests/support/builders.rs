// tests/support/builders.rs
use feedpress_core::domain::document::{DocumentPage, PageCursor, RawDocument};
use serde_json::{Value, json};

pub fn rich(text: &str) -> Value {
    json!([{ "type": "heading1", "text": text, "spans": [] }])
}

pub struct DocumentBuilder {
    uid: String,
    published: Option<String>,
    data: serde_json::Map<String, Value>,
}

impl DocumentBuilder {
    /// A well-formed post: title, subtitle and author all present.
    pub fn post(uid: &str) -> Self {
        let mut data = serde_json::Map::new();
        data.insert("title".into(), rich(&format!("Title {uid}")));
        data.insert("subtitle".into(), rich(&format!("Subtitle {uid}")));
        data.insert("author".into(), rich("Joseph Oliveira"));
        Self {
            uid: uid.to_string(),
            published: Some("2021-03-25T19:25:28+0000".into()),
            data,
        }
    }

    /// A post that also carries the detail-page fields.
    pub fn article(uid: &str, headings: &[&str]) -> Self {
        let content: Vec<Value> = headings
            .iter()
            .map(|heading| {
                json!({
                    "heading": rich(heading),
                    "body": [{ "type": "paragraph", "text": format!("body of {heading}"), "spans": [] }]
                })
            })
            .collect();
        Self::post(uid)
            .field("banner", json!({ "url": format!("https://images.example/{uid}.png"), "alt": null }))
            .field("content", Value::Array(content))
    }

    pub fn field(mut self, name: &str, value: Value) -> Self {
        self.data.insert(name.into(), value);
        self
    }

    pub fn without(mut self, name: &str) -> Self {
        self.data.remove(name);
        self
    }

    pub fn published(mut self, raw: &str) -> Self {
        self.published = Some(raw.to_string());
        self
    }

    pub fn unpublished(mut self) -> Self {
        self.published = None;
        self
    }

    pub fn build(self) -> RawDocument {
        serde_json::from_value(json!({
            "id": format!("id-{}", self.uid),
            "uid": self.uid,
            "type": "post",
            "lang": "pt-br",
            "first_publication_date": self.published,
            "data": Value::Object(self.data)
        }))
        .expect("builder produces a valid document")
    }
}

pub fn page(uids: &[&str], next: Option<&str>) -> DocumentPage {
    DocumentPage::new(
        uids.iter().map(|uid| DocumentBuilder::post(uid).build()).collect(),
        next.map(|cursor| PageCursor::new(cursor).unwrap()),
    )
}
