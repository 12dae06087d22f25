//! Rewrite rule synthesis for content types whose archive is served at the
//! path of an assigned page.
//!
//! # Flow
//!
//! 1. The host registers a content type and hands its config to
//!    [`RuleSynthesizer::synthesize`].
//! 2. If a published page is assigned to the type, the archive moves to that
//!    page's path: the config is rewritten and archive, feed and pagination
//!    rules are emitted for the host to install at top priority.
//! 3. A [`Permastruct`](pagefor_types::Permastruct) for singular items is
//!    returned alongside, so items resolve beneath the same path.
//! 4. [`RewriteTable`] collects every synthesis into the ordered rule list
//!    the host installs, and can resolve request paths against it.
//!
//! Nothing here fails: an unassigned or unusable page leaves the content type
//! on its default routing.

mod permastruct;
mod settings;
mod synthesize;
mod table;

pub use permastruct::expand_permastruct;
pub use settings::RewriteSettings;
pub use synthesize::{RuleSynthesizer, Synthesis, archive_rules, escape_path};
pub use table::{ResolvedRoute, RewriteTable};
