// src/domain/rich_text.rs
//! Structured text as delivered by the content repository: an ordered list of
//! blocks, each carrying a text run plus formatting spans over that run.
//!
//! [`as_text`] serves fields rendered as plain strings (titles, authors,
//! headings); [`as_html`] serves bodies rendered as markup.

use serde::Deserialize;
use serde_json::Value;
use std::fmt::Write as _;

use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct RichText(Vec<RichTextBlock>);

impl RichText {
    pub fn new(blocks: Vec<RichTextBlock>) -> Self {
        Self(blocks)
    }

    /// Parse a raw field value. Anything other than an array of blocks is
    /// reported as a normalization failure naming the field.
    pub fn from_value(field: &str, value: &Value) -> DomainResult<Self> {
        Self::deserialize(value).map_err(|err| {
            DomainError::Normalization(format!("field `{field}` is not structured text: {err}"))
        })
    }

    pub fn blocks(&self) -> &[RichTextBlock] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RichTextBlock {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub spans: Vec<Span>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub oembed: Option<Embed>,
}

impl RichTextBlock {
    pub fn text(kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: Some(text.into()),
            spans: Vec::new(),
            url: None,
            alt: None,
            oembed: None,
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.spans.push(span);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum BlockKind {
    #[serde(rename = "heading1")]
    Heading1,
    #[serde(rename = "heading2")]
    Heading2,
    #[serde(rename = "heading3")]
    Heading3,
    #[serde(rename = "heading4")]
    Heading4,
    #[serde(rename = "heading5")]
    Heading5,
    #[serde(rename = "heading6")]
    Heading6,
    #[serde(rename = "paragraph")]
    Paragraph,
    #[serde(rename = "preformatted")]
    Preformatted,
    #[serde(rename = "list-item")]
    ListItem,
    #[serde(rename = "o-list-item")]
    OrderedListItem,
    #[serde(rename = "image")]
    Image,
    #[serde(rename = "embed")]
    Embed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    #[serde(rename = "type")]
    pub kind: SpanKind,
    #[serde(default)]
    pub data: Option<SpanData>,
}

impl Span {
    pub fn new(kind: SpanKind, start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            kind,
            data: None,
        }
    }

    pub fn hyperlink(start: usize, end: usize, url: impl Into<String>) -> Self {
        Self {
            start,
            end,
            kind: SpanKind::Hyperlink,
            data: Some(SpanData {
                url: Some(url.into()),
                target: None,
                label: None,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SpanKind {
    #[serde(rename = "strong")]
    Strong,
    #[serde(rename = "em")]
    Em,
    #[serde(rename = "hyperlink")]
    Hyperlink,
    #[serde(rename = "label")]
    Label,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SpanData {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Embed {
    #[serde(default)]
    pub embed_url: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// Concatenate the text runs of every block in source order, separated by a
/// single space. Formatting is discarded.
pub fn as_text(rich_text: &RichText) -> String {
    rich_text
        .blocks()
        .iter()
        .filter_map(|block| block.text.as_deref())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render structured text as display markup. Text and attribute values are
/// escaped, so the output is safe to embed verbatim.
pub fn as_html(rich_text: &RichText) -> String {
    let mut out = String::new();
    let mut open_list: Option<&'static str> = None;

    for block in rich_text.blocks() {
        let list_tag = match block.kind {
            BlockKind::ListItem => Some("ul"),
            BlockKind::OrderedListItem => Some("ol"),
            _ => None,
        };

        if open_list != list_tag {
            if let Some(tag) = open_list {
                let _ = write!(out, "</{tag}>");
            }
            if let Some(tag) = list_tag {
                let _ = write!(out, "<{tag}>");
            }
            open_list = list_tag;
        }

        render_block(&mut out, block);
    }

    if let Some(tag) = open_list {
        let _ = write!(out, "</{tag}>");
    }

    out
}

fn render_block(out: &mut String, block: &RichTextBlock) {
    let text = block.text.as_deref().unwrap_or_default();
    let wrap = |out: &mut String, tag: &str| {
        let _ = write!(out, "<{tag}>{}</{tag}>", render_spans(text, &block.spans));
    };

    match block.kind {
        BlockKind::Heading1 => wrap(out, "h1"),
        BlockKind::Heading2 => wrap(out, "h2"),
        BlockKind::Heading3 => wrap(out, "h3"),
        BlockKind::Heading4 => wrap(out, "h4"),
        BlockKind::Heading5 => wrap(out, "h5"),
        BlockKind::Heading6 => wrap(out, "h6"),
        BlockKind::Paragraph => wrap(out, "p"),
        BlockKind::Preformatted => wrap(out, "pre"),
        BlockKind::ListItem | BlockKind::OrderedListItem => wrap(out, "li"),
        BlockKind::Image => {
            if let Some(url) = block.url.as_deref().filter(|url| is_safe_url(url)) {
                let _ = write!(
                    out,
                    r#"<p class="block-img"><img src="{}" alt="{}"></p>"#,
                    html_escape(url),
                    html_escape(block.alt.as_deref().unwrap_or_default())
                );
            }
        }
        BlockKind::Embed => {
            let Some(embed) = &block.oembed else { return };
            let Some(url) = embed.embed_url.as_deref().filter(|url| is_safe_url(url)) else {
                return;
            };
            let url = html_escape(url);
            let label = embed.title.as_deref().map_or_else(|| url.clone(), html_escape);
            let _ = write!(
                out,
                r#"<div data-oembed="{url}" data-oembed-type="{}"><a href="{url}">{label}</a></div>"#,
                html_escape(embed.kind.as_deref().unwrap_or("embed"))
            );
        }
        BlockKind::Unknown => {}
    }
}

/// Interleave span tags with the escaped text. Span offsets count UTF-16 code
/// units. Overlapping spans are closed and reopened at each boundary so the
/// emitted tags always nest.
fn render_spans(text: &str, spans: &[Span]) -> String {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();

    // utf16_at[i] = code units before chars[i]; the last entry is the total.
    let mut utf16_at = Vec::with_capacity(len + 1);
    let mut units = 0;
    for ch in &chars {
        utf16_at.push(units);
        units += ch.len_utf16();
    }
    utf16_at.push(units);
    let to_char = |offset: usize| utf16_at.partition_point(|&at| at < offset).min(len);

    let mut ordered: Vec<(usize, usize, &Span)> = spans
        .iter()
        .map(|span| (to_char(span.start), to_char(span.end), span))
        .filter(|(start, end, _)| start < end)
        .collect();
    ordered.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

    let mut boundaries: Vec<usize> = vec![0, len];
    for (start, end, _) in &ordered {
        boundaries.push(*start);
        boundaries.push(*end);
    }
    boundaries.sort_unstable();
    boundaries.dedup();

    let mut out = String::with_capacity(text.len());
    let mut stack: Vec<usize> = Vec::new();

    for window in boundaries.windows(2) {
        let (from, to) = (window[0], window[1]);
        let is_active = |idx: usize| ordered[idx].0 <= from && ordered[idx].1 >= to;

        if let Some(cut) = stack.iter().position(|&idx| !is_active(idx)) {
            let mut reopen = Vec::new();
            while stack.len() > cut {
                if let Some(idx) = stack.pop() {
                    close_tag(&mut out, ordered[idx].2);
                    if is_active(idx) {
                        reopen.push(idx);
                    }
                }
            }
            for idx in reopen.into_iter().rev() {
                open_tag(&mut out, ordered[idx].2);
                stack.push(idx);
            }
        }

        for idx in 0..ordered.len() {
            if is_active(idx) && !stack.contains(&idx) {
                open_tag(&mut out, ordered[idx].2);
                stack.push(idx);
            }
        }

        let segment: String = chars[from..to].iter().collect();
        out.push_str(&html_escape(&segment).replace('\n', "<br />"));
    }

    while let Some(idx) = stack.pop() {
        close_tag(&mut out, ordered[idx].2);
    }

    out
}

fn link_url(span: &Span) -> Option<&str> {
    span.data
        .as_ref()
        .and_then(|data| data.url.as_deref())
        .filter(|url| is_safe_url(url))
}

fn open_tag(out: &mut String, span: &Span) {
    match span.kind {
        SpanKind::Strong => out.push_str("<strong>"),
        SpanKind::Em => out.push_str("<em>"),
        SpanKind::Hyperlink => {
            if let Some(url) = link_url(span) {
                let new_tab = span
                    .data
                    .as_ref()
                    .is_some_and(|data| data.target.is_some());
                let _ = write!(out, r#"<a href="{}""#, html_escape(url));
                if new_tab {
                    out.push_str(r#" target="_blank" rel="noopener noreferrer""#);
                }
                out.push('>');
            }
        }
        SpanKind::Label => {
            let label = span
                .data
                .as_ref()
                .and_then(|data| data.label.as_deref())
                .unwrap_or_default();
            let _ = write!(out, r#"<span class="{}">"#, html_escape(label));
        }
        SpanKind::Unknown => {}
    }
}

fn close_tag(out: &mut String, span: &Span) {
    match span.kind {
        SpanKind::Strong => out.push_str("</strong>"),
        SpanKind::Em => out.push_str("</em>"),
        SpanKind::Hyperlink => {
            if link_url(span).is_some() {
                out.push_str("</a>");
            }
        }
        SpanKind::Label => out.push_str("</span>"),
        SpanKind::Unknown => {}
    }
}

fn is_safe_url(url: &str) -> bool {
    let scheme = url.trim_start().to_ascii_lowercase();
    !(scheme.starts_with("javascript:") || scheme.starts_with("vbscript:") || scheme.starts_with("data:"))
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
