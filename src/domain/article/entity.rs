// src/domain/article/entity.rs

/// Detail-view representation of one article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub uid: Option<String>,
    pub first_publication_date: Option<String>,
    pub title: String,
    pub banner: Banner,
    pub author: String,
    pub content: Vec<ArticleContentSection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub url: String,
    pub alt: Option<String>,
}

/// One authored section: a plain-text heading and a markup body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContentSection {
    pub heading: String,
    pub body: String,
}
