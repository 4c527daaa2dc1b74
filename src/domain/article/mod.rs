pub mod assembler;
pub mod entity;
pub mod value_objects;

pub use assembler::{assemble, assemble_with_banner_fallback};
pub use entity::{Article, ArticleContentSection, Banner};
pub use value_objects::ArticleSlug;
