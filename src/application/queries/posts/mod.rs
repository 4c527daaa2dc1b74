mod load_initial;
mod load_next;
mod service;

pub use load_next::LoadNextPostsQuery;
pub use service::{PostListSettings, PostQueryService};
