#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

//! Read-more separator placement for Markdown blog posts.
//!
//! The [`excerpt::ExcerptInserter`] decides whether and where to insert a
//! separator marker (`<!-- more -->` by default) so that listing pages render
//! a short excerpt while the article page keeps the full text.

pub mod config;
pub mod excerpt;
pub mod frontmatter;
pub mod site;

pub use excerpt::{ExcerptAction, ExcerptInserter, ExcerptOptions, ExcerptOutcome};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub fn doctor_stub() -> String {
    format!("blog-excerpts-core v{} on {}", version(), std::env::consts::OS)
}
