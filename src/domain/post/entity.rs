// src/domain/post/entity.rs

/// List-view representation of a post. Built fresh on every normalization
/// pass and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub uid: Option<String>,
    pub first_publication_date: Option<String>,
    pub data: PostData,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostData {
    pub title: String,
    pub subtitle: String,
    pub author: String,
}
