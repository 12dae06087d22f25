//! Host adapter for archive pages.
//!
//! The host's event hooks map onto [`ArchivePageHost`] methods:
//!
//! | Host event                  | Method                                        |
//! |-----------------------------|-----------------------------------------------|
//! | content type registered     | [`ArchivePageHost::register_content_type`]    |
//! | content type re-registered  | [`ArchivePageHost::reregister_content_type`]  |
//! | reading settings saved      | [`ArchivePageHost::save_assignments`]         |
//! | admin request               | [`ArchivePageHost::flush_rewrite_rules_if_dirty`] |
//! | menu rendered               | [`ArchivePageHost::render_menu`]              |
//! | document title / archive description / body classes | the matching query methods |
//!
//! Configuration comes from a TOML file (see [`HostConfig`]); a whole site can
//! be described in a TOML fixture (see [`SiteFixture`]) for the `pagefor` CLI
//! and for tests.

mod config;
mod error;
mod fixture;
mod host;

pub use config::HostConfig;
pub use error::{HostError, HostResult};
pub use fixture::SiteFixture;
pub use host::ArchivePageHost;
