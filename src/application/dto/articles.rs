use crate::domain::article::{Article, ArticleContentSection, Banner};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    pub first_publication_date: Option<String>,
    pub data: ArticleDataDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDataDto {
    pub title: String,
    pub banner: BannerDto,
    pub author: String,
    pub content: Vec<ArticleContentDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BannerDto {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// `body` is display markup, already escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleContentDto {
    pub heading: String,
    pub body: String,
}

impl From<Banner> for BannerDto {
    fn from(banner: Banner) -> Self {
        Self {
            url: banner.url,
            alt: banner.alt,
        }
    }
}

impl From<ArticleContentSection> for ArticleContentDto {
    fn from(section: ArticleContentSection) -> Self {
        Self {
            heading: section.heading,
            body: section.body,
        }
    }
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            uid: article.uid,
            first_publication_date: article.first_publication_date,
            data: ArticleDataDto {
                title: article.title,
                banner: article.banner.into(),
                author: article.author,
                content: article.content.into_iter().map(Into::into).collect(),
            },
        }
    }
}
