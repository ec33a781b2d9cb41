//! Discovery of markdown sources under a docs directory.

pub mod walker;

pub use walker::{SiteWalker, SiteWalkerError, WalkedFile};
