pub mod article;
pub mod document;
pub mod errors;
pub mod post;
pub mod publication_date;
pub mod rich_text;
