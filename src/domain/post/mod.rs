pub mod entity;
pub mod normalizer;
pub mod pagination;

pub use entity::{Post, PostData};
pub use normalizer::{normalize, normalize_all};
pub use pagination::{PostFeed, PostPage, PostPagination};
