// src/domain/post/normalizer.rs
//! Raw repository document -> [`Post`]. This is the single normalization
//! path shared by the initial list load and every "load more" continuation.
use crate::domain::document::RawDocument;
use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{Post, PostData};
use crate::domain::publication_date;
use crate::domain::rich_text::as_text;

pub fn normalize(raw: &RawDocument) -> DomainResult<Post> {
    let title = as_text(&raw.rich_text("title")?);
    let author = as_text(&raw.rich_text("author")?);
    let subtitle = raw
        .optional_rich_text("subtitle")?
        .map(|rich| as_text(&rich))
        .unwrap_or_default();

    Ok(Post {
        uid: raw.uid.clone(),
        first_publication_date: publication_date::format_optional(raw.first_published_at()?),
        data: PostData {
            title,
            subtitle,
            author,
        },
    })
}

/// Normalize a whole page. One malformed document fails the page rather than
/// leaving a hole in the list.
pub fn normalize_all(raws: &[RawDocument]) -> DomainResult<Vec<Post>> {
    raws.iter().map(normalize).collect()
}
