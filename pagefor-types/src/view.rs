use serde::{Deserialize, Serialize};

/// Content type whose archive is the posts index.
pub const POSTS_CONTENT_TYPE: &str = "post";

/// What the current request is displaying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewContext {
    /// A single item of a content type.
    Singular {
        content_type: String,
        item_id: u64,
        /// Parent item of the viewed item, `None` at the root.
        #[serde(default)]
        parent_id: Option<u64>,
    },
    /// The archive listing of a content type.
    Archive { content_type: String },
    /// The listing of regular posts.
    PostsIndex,
    Home,
    Search,
    Other,
}

impl ViewContext {
    pub fn singular(content_type: impl Into<String>, item_id: u64) -> Self {
        Self::Singular {
            content_type: content_type.into(),
            item_id,
            parent_id: None,
        }
    }

    pub fn singular_child(content_type: impl Into<String>, item_id: u64, parent_id: u64) -> Self {
        Self::Singular {
            content_type: content_type.into(),
            item_id,
            parent_id: Some(parent_id),
        }
    }

    pub fn archive(content_type: impl Into<String>) -> Self {
        Self::Archive {
            content_type: content_type.into(),
        }
    }

    /// Content type for menu classification: singular items and archives.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        match self {
            Self::Singular { content_type, .. } | Self::Archive { content_type } => {
                Some(content_type)
            }
            _ => None,
        }
    }

    /// Content type whose archive is being displayed. The posts index counts
    /// as the archive of regular posts.
    #[must_use]
    pub fn archive_type(&self) -> Option<&str> {
        match self {
            Self::Archive { content_type } => Some(content_type),
            Self::PostsIndex => Some(POSTS_CONTENT_TYPE),
            _ => None,
        }
    }
}
