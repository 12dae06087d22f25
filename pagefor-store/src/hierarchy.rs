//! Page hierarchy lookups.

use pagefor_types::{Page, PageId};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Read side of the host's page hierarchy.
///
/// Implementors only provide [`PageHierarchy::page`]; paths and ancestor
/// chains are derived from parent links and stop at missing parents or
/// cycles instead of failing.
pub trait PageHierarchy: Send + Sync {
    /// Page by id, whatever its kind or status.
    fn page(&self, id: PageId) -> Option<Page>;

    /// Page by id, only if it is a published page.
    fn published_page(&self, id: PageId) -> Option<Page> {
        self.page(id).filter(Page::is_published_page)
    }

    /// Ancestor ids, nearest parent first, root last.
    fn ancestor_ids(&self, id: PageId) -> Vec<PageId> {
        let mut ancestors = Vec::new();
        let mut seen = HashSet::from([id]);
        let mut next = self.page(id).and_then(|p| p.parent);

        while let Some(parent) = next {
            if !seen.insert(parent) {
                break;
            }
            ancestors.push(parent);
            next = self.page(parent).and_then(|p| p.parent);
        }
        ancestors
    }

    /// Full URL path of a page: slugs from the root down to the page, joined
    /// by `/`. Empty when the page is missing or not a published page.
    fn page_path(&self, id: PageId) -> String {
        let Some(page) = self.published_page(id) else {
            return String::new();
        };

        let mut segments = vec![page.slug];
        for ancestor in self.ancestor_ids(id) {
            match self.page(ancestor) {
                Some(p) => segments.push(p.slug),
                None => break,
            }
        }

        segments.reverse();
        segments
            .iter()
            .map(|s| s.trim_matches('/'))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl<T: PageHierarchy + ?Sized> PageHierarchy for Arc<T> {
    fn page(&self, id: PageId) -> Option<Page> {
        (**self).page(id)
    }
}

/// Page hierarchy over an in-memory map of pages.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPageTree {
    pages: HashMap<PageId, Page>,
}

impl InMemoryPageTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a page.
    pub fn insert(&mut self, page: Page) -> Option<Page> {
        self.pages.insert(page.id, page)
    }

    pub fn remove(&mut self, id: PageId) -> Option<Page> {
        self.pages.remove(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl FromIterator<Page> for InMemoryPageTree {
    fn from_iter<I: IntoIterator<Item = Page>>(iter: I) -> Self {
        Self {
            pages: iter.into_iter().map(|p| (p.id, p)).collect(),
        }
    }
}

impl PageHierarchy for InMemoryPageTree {
    fn page(&self, id: PageId) -> Option<Page> {
        self.pages.get(&id).cloned()
    }
}
