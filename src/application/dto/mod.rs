pub mod articles;
pub mod pagination;
pub mod posts;

pub use articles::{ArticleContentDto, ArticleDataDto, ArticleDto, BannerDto};
pub use pagination::{PostPageDto, PostPaginationDto};
pub use posts::{PostDataDto, PostDto};
