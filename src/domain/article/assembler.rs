// src/domain/article/assembler.rs
use crate::domain::article::entity::{Article, ArticleContentSection, Banner};
use crate::domain::document::RawDocument;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::publication_date;
use crate::domain::rich_text::{RichText, as_html, as_text};
use serde_json::Value;

/// Build the detail view for one document. Sections keep their authoring
/// order; a document without a banner image fails with `MissingAsset`.
pub fn assemble(raw: &RawDocument) -> DomainResult<Article> {
    build(raw, None)
}

/// Same as [`assemble`], substituting `fallback_url` when the document has no
/// banner image.
pub fn assemble_with_banner_fallback(raw: &RawDocument, fallback_url: &str) -> DomainResult<Article> {
    build(raw, Some(fallback_url))
}

fn build(raw: &RawDocument, fallback_url: Option<&str>) -> DomainResult<Article> {
    let title = as_text(&raw.rich_text("title")?);
    let author = as_text(&raw.rich_text("author")?);
    let content = content_sections(raw)?;

    let banner = match (banner(raw), fallback_url) {
        (Some(banner), _) => banner,
        (None, Some(url)) => Banner {
            url: url.to_string(),
            alt: None,
        },
        (None, None) => {
            return Err(DomainError::MissingAsset(format!(
                "document {} has no banner.url",
                raw.id
            )));
        }
    };

    Ok(Article {
        uid: raw.uid.clone(),
        first_publication_date: publication_date::format_optional(raw.first_published_at()?),
        title,
        banner,
        author,
        content,
    })
}

fn banner(raw: &RawDocument) -> Option<Banner> {
    let image = raw.field("banner")?.as_object()?;
    let url = image
        .get("url")
        .and_then(Value::as_str)
        .filter(|url| !url.trim().is_empty())?;
    Some(Banner {
        url: url.to_string(),
        alt: image.get("alt").and_then(Value::as_str).map(str::to_string),
    })
}

fn content_sections(raw: &RawDocument) -> DomainResult<Vec<ArticleContentSection>> {
    let Some(value) = raw.field("content") else {
        return Err(DomainError::Normalization(format!(
            "document {} is missing required field `content`",
            raw.id
        )));
    };
    let groups = value.as_array().ok_or_else(|| {
        DomainError::Normalization(format!(
            "document {}: field `content` is not a list of sections",
            raw.id
        ))
    })?;

    groups
        .iter()
        .enumerate()
        .map(|(index, group)| {
            let heading = section_field(group, "heading", index)?;
            let body = section_field(group, "body", index)?;
            Ok(ArticleContentSection {
                heading: as_text(&heading),
                body: as_html(&body),
            })
        })
        .collect()
}

fn section_field(group: &Value, name: &str, index: usize) -> DomainResult<RichText> {
    let group = group.as_object().ok_or_else(|| {
        DomainError::Normalization(format!("content[{index}] is not an object"))
    })?;
    match group.get(name) {
        None | Some(Value::Null) => Ok(RichText::default()),
        Some(value) => RichText::from_value(&format!("content[{index}].{name}"), value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn heading(text: &str) -> Value {
        json!([{ "type": "heading2", "text": text, "spans": [] }])
    }

    fn document(data: Value) -> RawDocument {
        serde_json::from_value(json!({
            "id": "doc-9",
            "uid": "como-utilizar-hooks",
            "type": "post",
            "first_publication_date": "2021-03-25T00:00:00Z",
            "data": data
        }))
        .unwrap()
    }

    fn article_data() -> Value {
        json!({
            "title": heading("Como utilizar Hooks"),
            "author": heading("Joseph Oliveira"),
            "banner": { "url": "https://images.prismic.io/banner.png", "alt": "banner" },
            "content": [
                { "heading": heading("A"), "body": [{ "type": "paragraph", "text": "first", "spans": [] }] },
                { "heading": heading("B"), "body": [
                    { "type": "list-item", "text": "x", "spans": [{ "start": 0, "end": 1, "type": "em" }] }
                ] }
            ]
        })
    }

    #[test]
    fn assembles_sections_in_authoring_order() {
        let article = assemble(&document(article_data())).unwrap();
        let headings: Vec<&str> = article.content.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(headings, ["A", "B"]);
        assert_eq!(article.content[0].body, "<p>first</p>");
        assert_eq!(article.content[1].body, "<ul><li><em>x</em></li></ul>");
    }

    #[test]
    fn carries_plain_fields() {
        let article = assemble(&document(article_data())).unwrap();
        assert_eq!(article.title, "Como utilizar Hooks");
        assert_eq!(article.author, "Joseph Oliveira");
        assert_eq!(article.banner.url, "https://images.prismic.io/banner.png");
        assert_eq!(article.banner.alt.as_deref(), Some("banner"));
        assert_eq!(article.first_publication_date.as_deref(), Some("1 mar 2021"));
    }

    #[test]
    fn missing_banner_is_a_missing_asset() {
        let mut data = article_data();
        data["banner"] = json!({});
        let err = assemble(&document(data)).unwrap_err();
        assert!(matches!(err, DomainError::MissingAsset(_)));
    }

    #[test]
    fn fallback_banner_is_used_when_absent() {
        let mut data = article_data();
        data.as_object_mut().unwrap().remove("banner");
        let article =
            assemble_with_banner_fallback(&document(data), "https://cdn.example/placeholder.png")
                .unwrap();
        assert_eq!(article.banner.url, "https://cdn.example/placeholder.png");
    }

    #[test]
    fn missing_title_is_a_normalization_error() {
        let mut data = article_data();
        data.as_object_mut().unwrap().remove("title");
        assert!(matches!(
            assemble(&document(data)),
            Err(DomainError::Normalization(_))
        ));
    }

    #[test]
    fn empty_section_fields_render_empty() {
        let mut data = article_data();
        data["content"] = json!([{ "heading": null }]);
        let article = assemble(&document(data)).unwrap();
        assert_eq!(article.content[0].heading, "");
        assert_eq!(article.content[0].body, "");
    }

    #[test]
    fn unparsable_publication_date_is_a_normalization_error() {
        let mut doc = document(article_data());
        doc.first_publication_date = Some("not a date".into());
        assert!(matches!(assemble(&doc), Err(DomainError::Normalization(_))));
    }

    #[test]
    fn non_list_content_is_rejected() {
        let mut data = article_data();
        data["content"] = json!("text");
        assert!(matches!(
            assemble(&document(data)),
            Err(DomainError::Normalization(_))
        ));
    }
}
