//! A whole site described in TOML.
//!
//! ```toml
//! [[content_types]]
//! name = "project"
//! has_archive = true
//! rewrite = { slug = "project", feeds = true }
//!
//! [[pages]]
//! id = 42
//! slug = "projects"
//! title = "Our Projects"
//!
//! [assignments]
//! project = 42
//!
//! [[menu]]
//! id = 1
//! target = { type = "page", id = 42 }
//! ```

use crate::{ArchivePageHost, HostConfig, HostResult};
use pagefor_store::{AssignmentOption, InMemoryMappingStore, InMemoryPageTree, RoutingFlag};
use pagefor_types::{ContentType, MenuEntry, Page};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteFixture {
    /// Content types in registration order.
    pub content_types: Vec<ContentType>,
    pub pages: Vec<Page>,
    /// Assignments as the settings screen would store them.
    pub assignments: AssignmentOption,
    /// Entries of the site's primary menu.
    pub menu: Vec<MenuEntry>,
}

impl SiteFixture {
    pub fn from_toml_str(toml: &str) -> HostResult<Self> {
        Ok(toml::from_str(toml)?)
    }

    pub fn load(path: &Path) -> HostResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let site = Self::from_toml_str(&contents)?;
        info!(
            content_types = site.content_types.len(),
            pages = site.pages.len(),
            "Loaded site from {:?}",
            path
        );
        Ok(site)
    }

    /// Builds a host with every content type registered, routing dirty.
    ///
    /// The fixture's assignments stay in memory: `config.option_path` is
    /// cleared, so saving assignments never touches the stored option file.
    pub fn into_host(self, mut config: HostConfig) -> HostResult<ArchivePageHost<InMemoryPageTree>> {
        config.option_path = None;
        let store = InMemoryMappingStore::with_flag(self.assignments, Arc::new(RoutingFlag::new()));
        let pages: InMemoryPageTree = self.pages.into_iter().collect();
        let mut host = ArchivePageHost::new(config, Arc::new(store), pages);
        for content_type in self.content_types {
            host.register_content_type(content_type)?;
        }
        Ok(host)
    }
}
