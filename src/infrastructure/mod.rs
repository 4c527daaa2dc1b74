pub mod prismic;

pub use prismic::PrismicContentRepository;
