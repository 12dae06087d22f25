//! Rewrite rules and permastructs handed to the host's URL dispatcher.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a rule is installed relative to the host's generated rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RulePriority {
    /// Matched before every generated rule.
    Top,
    /// Matched after the generated rules.
    Bottom,
}

/// One pattern-to-target routing entry.
///
/// `pattern` is a regular expression matched against the request path without
/// its leading slash. `target` is a query string where `$matches[n]` stands for
/// the n-th capture group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteRule {
    pub pattern: String,
    pub target: String,
    pub priority: RulePriority,
}

impl RewriteRule {
    pub fn top(pattern: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            target: target.into(),
            priority: RulePriority::Top,
        }
    }

    pub fn bottom(pattern: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            target: target.into(),
            priority: RulePriority::Bottom,
        }
    }
}

impl fmt::Display for RewriteRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let priority = match self.priority {
            RulePriority::Top => "top",
            RulePriority::Bottom => "bottom",
        };
        write!(f, "[{priority}] {} => {}", self.pattern, self.target)
    }
}

/// Permalink structure for singular items of a content type.
///
/// The template is `{path}/%{name}%`; the host expands the tag into a capture
/// for the item slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permastruct {
    /// Content type the structure belongs to.
    pub name: String,
    pub template: String,
    pub with_front: bool,
    /// Item feeds resolve beneath the item permalink.
    pub feeds: bool,
    /// Item pagination resolves beneath the item permalink.
    pub paged: bool,
}

impl Permastruct {
    /// Structure tag of the content type, e.g. `%project%`.
    #[must_use]
    pub fn tag(&self) -> String {
        format!("%{}%", self.name)
    }

    /// Template with the structure tag removed, without trailing slash.
    #[must_use]
    pub fn base(&self) -> &str {
        let tag_len = self.name.len() + 2;
        let without_tag = if self.template.ends_with(&self.tag()) {
            &self.template[..self.template.len() - tag_len]
        } else {
            self.template.as_str()
        };
        without_tag.trim_end_matches('/')
    }
}
