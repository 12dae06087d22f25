//! Core type definitions shared by the archive-page crates.
//!
//! This crate defines the plain data the rest of the workspace passes around:
//! - Page identifiers and pages with their parent links
//! - Content types, their rewrite configuration and the explicit registry
//! - Rewrite rules and permastructs produced by the synthesizer
//! - Menu entries with their class sets
//! - The per-request view context
//!
//! Nothing here talks to a store. Lookups live in `pagefor-store`.

mod content_type;
mod ids;
mod menu;
mod page;
mod rewrite;
mod view;

pub use content_type::{ContentType, ContentTypeRegistry, HasArchive, RewriteConfig};
pub use ids::PageId;
pub use menu::{ClassSet, MenuEntry, MenuTarget};
pub use page::{Page, PageKind, PageStatus};
pub use rewrite::{Permastruct, RewriteRule, RulePriority};
pub use view::{POSTS_CONTENT_TYPE, ViewContext};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building the type registry.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("content type already registered: {0}")]
    DuplicateContentType(String),

    #[error("invalid content type name '{name}': {reason}")]
    InvalidContentTypeName { name: String, reason: &'static str },
}
