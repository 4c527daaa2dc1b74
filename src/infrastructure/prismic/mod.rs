mod api;
mod client;
mod error;

pub use client::PrismicContentRepository;
