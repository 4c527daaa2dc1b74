use crate::domain::post::{Post, PostData};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    pub first_publication_date: Option<String>,
    pub data: PostDataDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PostDataDto {
    pub title: String,
    pub subtitle: String,
    pub author: String,
}

impl From<PostData> for PostDataDto {
    fn from(data: PostData) -> Self {
        Self {
            title: data.title,
            subtitle: data.subtitle,
            author: data.author,
        }
    }
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            uid: post.uid,
            first_publication_date: post.first_publication_date,
            data: post.data.into(),
        }
    }
}
