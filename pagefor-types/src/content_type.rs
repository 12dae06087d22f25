//! Content types and the explicit registry the host builds at startup.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Longest name the host accepts for a content type.
const MAX_NAME_LEN: usize = 20;

/// Whether a content type has an archive view, and at which slug.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "ArchiveRepr", into = "ArchiveRepr")]
pub enum HasArchive {
    /// No archive view.
    #[default]
    Disabled,
    /// Archive served at the rewrite slug.
    Enabled,
    /// Archive served at an explicit slug.
    Slug(String),
}

/// Config files write `has_archive = true` or `has_archive = "slug"`.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ArchiveRepr {
    Flag(bool),
    Slug(String),
}

impl From<ArchiveRepr> for HasArchive {
    fn from(repr: ArchiveRepr) -> Self {
        match repr {
            ArchiveRepr::Flag(false) => Self::Disabled,
            ArchiveRepr::Flag(true) => Self::Enabled,
            ArchiveRepr::Slug(slug) if slug.is_empty() => Self::Disabled,
            ArchiveRepr::Slug(slug) => Self::Slug(slug),
        }
    }
}

impl From<HasArchive> for ArchiveRepr {
    fn from(value: HasArchive) -> Self {
        match value {
            HasArchive::Disabled => Self::Flag(false),
            HasArchive::Enabled => Self::Flag(true),
            HasArchive::Slug(slug) => Self::Slug(slug),
        }
    }
}

/// Rewrite configuration of a content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteConfig {
    /// Path prefix for the type's URLs.
    pub slug: String,
    /// Whether the site's front base is prepended to the slug.
    #[serde(default = "default_true")]
    pub with_front: bool,
    /// Whether feed routes are generated.
    #[serde(default)]
    pub feeds: bool,
    /// Whether pagination routes are generated.
    #[serde(default = "default_true")]
    pub pages: bool,
}

fn default_true() -> bool {
    true
}

impl RewriteConfig {
    /// Rewrite config with the host defaults for the given slug.
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            with_front: true,
            feeds: false,
            pages: true,
        }
    }

    /// Enables or disables feed routes.
    pub fn with_feeds(mut self, feeds: bool) -> Self {
        self.feeds = feeds;
        self
    }

    /// Enables or disables pagination routes.
    pub fn with_pages(mut self, pages: bool) -> Self {
        self.pages = pages;
        self
    }

    /// Sets whether the front base is prepended.
    pub fn with_front(mut self, with_front: bool) -> Self {
        self.with_front = with_front;
        self
    }
}

/// A registered content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentType {
    /// Unique identifier, e.g. "project".
    pub name: String,
    /// Human-readable label. Falls back to the name.
    #[serde(default)]
    pub label: String,
    #[serde(default = "default_true")]
    pub public: bool,
    /// Types shipped by the host itself (posts, pages, attachments).
    #[serde(default)]
    pub builtin: bool,
    #[serde(default)]
    pub has_archive: HasArchive,
    pub rewrite: RewriteConfig,
}

impl ContentType {
    /// Creates a public custom content type whose rewrite slug is its name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            rewrite: RewriteConfig::new(name.clone()),
            name,
            public: true,
            builtin: false,
            has_archive: HasArchive::Disabled,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_archive(mut self, has_archive: HasArchive) -> Self {
        self.has_archive = has_archive;
        self
    }

    pub fn with_rewrite(mut self, rewrite: RewriteConfig) -> Self {
        self.rewrite = rewrite;
        self
    }

    /// Marks the type as one the host ships itself.
    pub fn builtin(mut self) -> Self {
        self.builtin = true;
        self
    }

    /// Slug the archive is served at, if the type has an archive.
    #[must_use]
    pub fn archive_slug(&self) -> Option<&str> {
        match &self.has_archive {
            HasArchive::Disabled => None,
            HasArchive::Enabled => Some(&self.rewrite.slug),
            HasArchive::Slug(slug) => Some(slug),
        }
    }

    /// Label for display, never empty.
    #[must_use]
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() { &self.name } else { &self.label }
    }
}

fn validate_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "name is empty"
    } else if name.len() > MAX_NAME_LEN {
        "name is longer than 20 characters"
    } else if !name
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-')
    {
        "only lowercase letters, digits, '_' and '-' are allowed"
    } else {
        return Ok(());
    };

    Err(Error::InvalidContentTypeName {
        name: name.to_string(),
        reason,
    })
}

/// Content types registered by the host, in registration order.
///
/// Built once at startup and passed by reference to the synthesizer and the
/// classifier. Registration order is the tie-breaker wherever several types
/// compete for the same page.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ContentTypeRegistry {
    types: Vec<ContentType>,
}

impl ContentTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new content type. Names must be unique.
    pub fn register(&mut self, content_type: ContentType) -> Result<()> {
        validate_name(&content_type.name)?;
        if self.contains(&content_type.name) {
            return Err(Error::DuplicateContentType(content_type.name));
        }
        self.types.push(content_type);
        Ok(())
    }

    /// Replaces the config of an already registered type, keeping its
    /// position. Registers it at the end when it is unknown.
    pub fn upsert(&mut self, content_type: ContentType) -> Result<()> {
        match self.types.iter_mut().find(|t| t.name == content_type.name) {
            Some(existing) => {
                *existing = content_type;
                Ok(())
            }
            None => self.register(content_type),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ContentType> {
        self.types.iter().find(|t| t.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }


    pub fn iter(&self) -> impl Iterator<Item = &ContentType> {
        self.types.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|t| t.name.as_str())
    }

    /// Public, non-builtin types: the ones an operator may assign a page to.
    pub fn eligible(&self) -> impl Iterator<Item = &ContentType> {
        self.types.iter().filter(|t| t.public && !t.builtin)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
