//! Navigation menu entries as handed over by the host's menu renderer.

use crate::PageId;
use serde::{Deserialize, Serialize};

/// Ordered set of CSS class tokens.
///
/// Keeps insertion order for rendering; inserting a token that is already
/// present is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassSet(Vec<String>);

impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a token. Returns `true` if it was not present yet.
    pub fn insert(&mut self, class: impl Into<String>) -> bool {
        let class = class.into();
        if class.is_empty() || self.contains(&class) {
            return false;
        }
        self.0.push(class);
        true
    }

    /// Removes a token. Returns `true` if it was present.
    pub fn remove(&mut self, class: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|c| c != class);
        self.0.len() != before
    }

    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Space-separated form, as written into a `class` attribute.
    #[must_use]
    pub fn to_attribute(&self) -> String {
        self.0.join(" ")
    }
}

impl<S: Into<String>> FromIterator<S> for ClassSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

impl<S: Into<String>> Extend<S> for ClassSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for class in iter {
            self.insert(class);
        }
    }
}

/// What a menu entry links to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuTarget {
    /// A page of the hierarchy. Only these entries are classified.
    Page { id: PageId },
    /// Another object: a post, a term, an archive link.
    Object { object: String, id: u64 },
    /// A free-form link.
    Custom { url: String },
}

/// One item of a navigation menu, annotated in place during a render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub id: u64,
    pub target: MenuTarget,
    #[serde(default)]
    pub classes: ClassSet,
    #[serde(default)]
    pub depth: u32,
    /// Parent entry in the menu tree, `None` at the top level.
    #[serde(default)]
    pub menu_parent: Option<u64>,
    /// The entry is the view being displayed.
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub current_item_parent: bool,
    #[serde(default)]
    pub current_item_ancestor: bool,
}

impl MenuEntry {
    /// Creates a top-level entry linking to a page.
    pub fn page(id: u64, page: PageId) -> Self {
        Self::new(id, MenuTarget::Page { id: page })
    }

    pub fn new(id: u64, target: MenuTarget) -> Self {
        Self {
            id,
            target,
            classes: ClassSet::new(),
            depth: 0,
            menu_parent: None,
            current: false,
            current_item_parent: false,
            current_item_ancestor: false,
        }
    }

    pub fn with_classes<S: Into<String>>(mut self, classes: impl IntoIterator<Item = S>) -> Self {
        self.classes.extend(classes);
        self
    }

    pub fn with_menu_parent(mut self, parent: u64, depth: u32) -> Self {
        self.menu_parent = Some(parent);
        self.depth = depth;
        self
    }

    /// Page this entry links to, if it links to a page.
    #[must_use]
    pub fn page_id(&self) -> Option<PageId> {
        match self.target {
            MenuTarget::Page { id } => Some(id),
            _ => None,
        }
    }
}
