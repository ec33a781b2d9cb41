//! Excerpt separator placement.
//!
//! This module provides:
//! - [`ExcerptOptions`]: validated settings for separator placement
//! - [`is_blog_post`]: the eligibility predicate for documents
//! - [`Scanner`]: the line-scan state machine used for automatic placement
//! - [`ExcerptInserter`]: the component tying it all together

pub mod eligibility;
pub mod inserter;
pub mod options;
pub mod scan;
pub mod types;

pub use eligibility::is_blog_post;
pub use inserter::ExcerptInserter;
pub use options::{DEFAULT_MAX_LINES, DEFAULT_SEPARATOR, ExcerptOptions, OptionsError};
pub use scan::{LineKind, ScanState, Scanner};
pub use types::{ExcerptAction, ExcerptOutcome};
