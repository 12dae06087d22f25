use crate::PageId;
use serde::{Deserialize, Serialize};

/// Kind of document a page-like record is.
///
/// Only `Page` records may stand in for an archive. Assignments that point at
/// any other kind are treated as absent by content-rendering consumers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    #[default]
    Page,
    /// Any other post kind, by name.
    Other(String),
}

/// Publication status of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageStatus {
    #[default]
    Publish,
    Draft,
    Pending,
    Private,
    Future,
    Trash,
}

/// A hierarchical page as exposed by the host's page hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    /// URL path segment of this page alone.
    pub slug: String,
    /// Parent page, `None` for top-level pages.
    #[serde(default)]
    pub parent: Option<PageId>,
    #[serde(default)]
    pub kind: PageKind,
    #[serde(default)]
    pub status: PageStatus,
    #[serde(default)]
    pub title: String,
    /// Rendered body content.
    #[serde(default)]
    pub content: String,
}

impl Page {
    /// Creates a published top-level page.
    pub fn new(id: PageId, slug: impl Into<String>) -> Self {
        Self {
            id,
            slug: slug.into(),
            parent: None,
            kind: PageKind::Page,
            status: PageStatus::Publish,
            title: String::new(),
            content: String::new(),
        }
    }

    pub fn with_parent(mut self, parent: PageId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_status(mut self, status: PageStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_kind(mut self, kind: PageKind) -> Self {
        self.kind = kind;
        self
    }

    /// Whether this record is a published page, the only kind that may stand
    /// in for an archive when content is rendered.
    #[must_use]
    pub fn is_published_page(&self) -> bool {
        self.kind == PageKind::Page && self.status == PageStatus::Publish
    }
}
