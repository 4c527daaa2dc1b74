pub mod entity;
pub mod repository;
pub mod timestamp;
pub mod value_objects;

pub use entity::{DocumentPage, RawDocument};
pub use repository::{ContentRepository, LanguageFilter, QueryOptions};
pub use value_objects::{DocumentType, PageCursor};
