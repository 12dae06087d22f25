//! Site-wide rewrite settings the synthesized rules are built against.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Permalink bases of the host site.
///
/// Defaults match a site with pretty permalinks and no front prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteSettings {
    /// Prefix every pattern starts with, e.g. `index.php/` on hosts without
    /// server-level rewriting.
    pub root: String,
    /// Front base of the permalink structure, e.g. `/blog/`.
    pub front: String,
    /// Path segment that introduces a page number.
    pub pagination_base: String,
    /// Path segment that introduces a feed name.
    pub feed_base: String,
    /// Feed names the host can serve.
    pub feeds: Vec<String>,
    /// Script every target query is addressed to.
    pub index: String,
}

impl Default for RewriteSettings {
    fn default() -> Self {
        Self {
            root: String::new(),
            front: "/".to_string(),
            pagination_base: "page".to_string(),
            feed_base: "feed".to_string(),
            feeds: ["feed", "rdf", "rss", "rss2", "atom"]
                .into_iter()
                .map(String::from)
                .collect(),
            index: "index.php".to_string(),
        }
    }
}

impl RewriteSettings {
    /// Front base as a pattern prefix: the leading slash dropped, so `/` reads
    /// as empty and `/blog/` as `blog/`.
    #[must_use]
    pub fn front_base(&self) -> &str {
        self.front.strip_prefix('/').unwrap_or(&self.front)
    }

    /// Pattern prefix for a slug, honoring its `with_front` flag.
    #[must_use]
    pub(crate) fn base_for(&self, escaped_path: &str, with_front: bool) -> String {
        let prefix = if with_front {
            format!("{}{}", regex_lite::escape(&self.root), regex_lite::escape(self.front_base()))
        } else {
            regex_lite::escape(&self.root)
        };
        format!("{prefix}{escaped_path}")
    }

    /// Usable feed names as a regex alternation, e.g. `(feed|rss2)`.
    ///
    /// Names outside `[A-Za-z0-9_-]` and duplicates are skipped. `None` when
    /// nothing usable is left.
    #[must_use]
    pub fn feed_alternation(&self) -> Option<String> {
        let mut names: Vec<&str> = Vec::new();
        for name in &self.feeds {
            if !is_feed_name(name) {
                debug!(feed = %name, "Skipping unusable feed name");
                continue;
            }
            if !names.contains(&name.as_str()) {
                names.push(name);
            }
        }
        if names.is_empty() {
            return None;
        }
        Some(format!("({})", names.join("|")))
    }
}

fn is_feed_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}
