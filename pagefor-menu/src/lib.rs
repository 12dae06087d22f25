//! Marks navigation menu entries that lead to a content type's archive page.
//!
//! When a visitor views an archive or a single item of a content type with an
//! assigned page, the menu entry for that page and the entries for its
//! ancestor pages get the same "current" classes the host would give them on
//! the page itself.

mod classify;
mod sanitize;

pub use classify::{ArchiveTrail, classify, classify_menu};
pub use sanitize::sanitize_html_class;
