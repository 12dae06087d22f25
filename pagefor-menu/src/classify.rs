//! Relationship classes for menu entries pointing at archive pages.

use crate::sanitize_html_class;
use pagefor_store::{MappingStore, PageHierarchy};
use pagefor_types::{MenuEntry, PageId, ViewContext};
use tracing::debug;

/// How the viewed singular item relates to its content type's archive page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relationship {
    /// The item sits directly beneath the archive.
    Parent,
    /// The item is nested below another item of the same type.
    Ancestor,
}

impl Relationship {
    fn as_str(self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Ancestor => "ancestor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Viewing {
    Archive,
    Item(Relationship),
}

/// The archive page of the viewed content type and its ancestors, resolved
/// once per menu render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveTrail {
    content_type: String,
    page: PageId,
    ancestors: Vec<PageId>,
    viewing: Viewing,
}

impl ArchiveTrail {
    /// Resolves the trail for a view.
    ///
    /// `None` for views other than singular items and archives, and for
    /// content types without an assigned page.
    pub fn resolve<M, H>(view: &ViewContext, store: &M, pages: &H) -> Option<Self>
    where
        M: MappingStore + ?Sized,
        H: PageHierarchy + ?Sized,
    {
        let content_type = view.content_type()?;
        let page = store.assigned_page(content_type)?;

        let viewing = match view {
            ViewContext::Singular { parent_id, .. } => match parent_id {
                Some(parent) if *parent != 0 => Viewing::Item(Relationship::Ancestor),
                _ => Viewing::Item(Relationship::Parent),
            },
            _ => Viewing::Archive,
        };

        Some(Self {
            content_type: content_type.to_string(),
            page,
            ancestors: pages.ancestor_ids(page),
            viewing,
        })
    }

    /// Adds the relationship classes and flags to one entry.
    ///
    /// Only entries linking to a page are considered. Existing classes are
    /// kept. Returns `true` if the entry changed.
    pub fn classify(&self, entry: &mut MenuEntry) -> bool {
        let Some(target) = entry.page_id() else {
            return false;
        };

        if target == self.page {
            match self.viewing {
                Viewing::Archive => {
                    let added = entry.classes.insert("current-menu-item");
                    added | set(&mut entry.current)
                }
                Viewing::Item(relationship) => {
                    let rel = relationship.as_str();
                    let type_class = sanitize_html_class(&self.content_type);
                    let mut changed = false;
                    for class in [
                        format!("current-menu-{rel}"),
                        format!("current-post_type-{rel}"),
                        format!("current-{type_class}-{rel}"),
                    ] {
                        changed |= entry.classes.insert(class);
                    }
                    let flag = match relationship {
                        Relationship::Parent => &mut entry.current_item_parent,
                        Relationship::Ancestor => &mut entry.current_item_ancestor,
                    };
                    changed | set(flag)
                }
            }
        } else if self.ancestors.contains(&target) {
            let mut changed = entry.classes.insert("current-menu-ancestor");
            changed |= entry.classes.insert("current-page-ancestor");
            changed | set(&mut entry.current_item_ancestor)
        } else {
            false
        }
    }
}

fn set(flag: &mut bool) -> bool {
    let changed = !*flag;
    *flag = true;
    changed
}

/// Classifies a single entry for a view.
pub fn classify<M, H>(entry: &mut MenuEntry, view: &ViewContext, store: &M, pages: &H) -> bool
where
    M: MappingStore + ?Sized,
    H: PageHierarchy + ?Sized,
{
    ArchiveTrail::resolve(view, store, pages).is_some_and(|trail| trail.classify(entry))
}

/// Classifies every entry of a menu, resolving the trail once.
///
/// Returns the number of entries that changed.
pub fn classify_menu<M, H>(entries: &mut [MenuEntry], view: &ViewContext, store: &M, pages: &H) -> usize
where
    M: MappingStore + ?Sized,
    H: PageHierarchy + ?Sized,
{
    let Some(trail) = ArchiveTrail::resolve(view, store, pages) else {
        return 0;
    };

    let changed = entries
        .iter_mut()
        .map(|entry| trail.classify(entry))
        .filter(|changed| *changed)
        .count();
    debug!(
        content_type = %trail.content_type,
        page = %trail.page,
        entries = entries.len(),
        changed,
        "Menu classified"
    );
    changed
}
