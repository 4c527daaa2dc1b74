pub mod articles;
pub mod posts;
