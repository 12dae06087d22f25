//! Host configuration loaded from `pagefor.toml`.
//!
//! Example:
//!
//! ```toml
//! option_path = "/var/lib/site/page_for_cpt.json"
//! page_body_classes = ["project"]
//!
//! [rewrite]
//! front = "/blog/"
//! feeds = ["rss2", "atom"]
//! ```

use pagefor_routing::RewriteSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Permalink bases the rules are built against.
    pub rewrite: RewriteSettings,
    /// Content types whose archives render with their page's body classes.
    pub page_body_classes: Vec<String>,
    /// JSON file holding the assignments. In memory only when unset.
    pub option_path: Option<PathBuf>,
}

impl HostConfig {
    /// Loads the config file, falling back to defaults.
    ///
    /// A missing file is normal. An unreadable or malformed one is logged and
    /// ignored so a broken config never takes the site down.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No config file found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Self>(&contents) {
                Ok(config) => {
                    info!("Loaded host config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!("Failed to parse config file {:?}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Whether archives of `content_type` take their page's body classes.
    #[must_use]
    pub fn uses_page_body_classes(&self, content_type: &str) -> bool {
        self.page_body_classes.iter().any(|t| t == content_type)
    }
}
