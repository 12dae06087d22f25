//! Content type → page assignments.

use crate::{AssignmentOption, RoutingFlag, StoreResult};
use pagefor_types::PageId;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info};

/// Snapshot of every assignment, in store enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Assignments(Vec<(String, PageId)>);

impl Assignments {
    /// Page assigned to a content type.
    #[must_use]
    pub fn get(&self, content_type: &str) -> Option<PageId> {
        self.0
            .iter()
            .find(|(name, _)| name == content_type)
            .map(|(_, id)| *id)
    }

    /// First content type, in enumeration order, assigned to a page.
    #[must_use]
    pub fn content_type_for(&self, page: PageId) -> Option<&str> {
        self.0
            .iter()
            .find(|(_, id)| *id == page)
            .map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, PageId)> {
        self.0.iter().map(|(name, id)| (name.as_str(), *id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, PageId)> for Assignments {
    fn from_iter<I: IntoIterator<Item = (S, PageId)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, id)| (name.into(), id)).collect())
    }
}

/// Read side of the assignment store, as consumed by the core.
///
/// Implementations must fail softly: an unknown content type or an
/// unreadable backend reads as "no page assigned".
pub trait MappingStore: Send + Sync {
    /// Page assigned to a content type, `None` when unassigned.
    fn assigned_page(&self, content_type: &str) -> Option<PageId>;

    /// Every assignment, in enumeration order.
    fn assignments(&self) -> Assignments;

    /// First content type assigned to a page, in enumeration order.
    ///
    /// When several types share a page the answer depends on that order.
    fn reverse_lookup(&self, page: PageId) -> Option<String> {
        self.assignments()
            .content_type_for(page)
            .map(str::to_string)
    }
}

/// Assignment store holding the stored option in memory.
///
/// Every write that changes an assignment marks the shared [`RoutingFlag`]
/// dirty, even if a flush is running at the same time.
#[derive(Debug)]
pub struct InMemoryMappingStore {
    option: RwLock<AssignmentOption>,
    flag: Arc<RoutingFlag>,
}

impl InMemoryMappingStore {
    /// Creates an empty store with a fresh (dirty) routing flag.
    pub fn new() -> Self {
        Self::with_flag(AssignmentOption::new(), Arc::new(RoutingFlag::new()))
    }

    /// Creates a store over an existing option and flag.
    pub fn with_flag(option: AssignmentOption, flag: Arc<RoutingFlag>) -> Self {
        Self {
            option: RwLock::new(option),
            flag,
        }
    }

    /// Loads the option from a JSON file. A missing file is an empty option.
    pub fn load_from(path: &Path, flag: Arc<RoutingFlag>) -> StoreResult<Self> {
        let option = if path.exists() {
            let option = AssignmentOption::load_from(path)?;
            info!(path = %path.display(), "Loaded assignment option");
            option
        } else {
            info!(path = %path.display(), "No assignment option file, starting empty");
            AssignmentOption::new()
        };
        Ok(Self::with_flag(option, flag))
    }

    /// Writes the current option to a JSON file.
    pub fn save_to(&self, path: &Path) -> StoreResult<()> {
        self.option().save_to(path)
    }

    /// The routing flag this store marks on writes.
    pub fn flag(&self) -> Arc<RoutingFlag> {
        Arc::clone(&self.flag)
    }

    /// Snapshot of the stored option.
    pub fn option(&self) -> AssignmentOption {
        self.option
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Assigns a page to a content type. Returns `true` if the assignment
    /// changed.
    pub fn assign(&self, content_type: &str, page: PageId) -> bool {
        self.write(content_type, Some(page))
    }

    /// Removes the assignment of a content type. Returns `true` if there was
    /// one.
    pub fn unassign(&self, content_type: &str) -> bool {
        self.write(content_type, None)
    }

    /// Replaces the whole option, as the settings screen does on save.
    ///
    /// Marks routing dirty when the new option assigns different pages.
    /// Returns `true` in that case.
    pub fn replace_option(&self, option: AssignmentOption) -> bool {
        let mut current = self.option.write().unwrap_or_else(PoisonError::into_inner);
        let changed = !current.same_assignments(&option);
        *current = option;
        drop(current);

        if changed {
            self.flag.mark_dirty();
            info!("Assignment option changed, rewrite rules marked for flush");
        }
        changed
    }

    fn write(&self, content_type: &str, page: Option<PageId>) -> bool {
        let mut option = self.option.write().unwrap_or_else(PoisonError::into_inner);
        if option.get(content_type) == page {
            return false;
        }
        option.set(content_type, page);
        drop(option);

        self.flag.mark_dirty();
        debug!(content_type, page = ?page.map(|id| id.get()), "Assignment updated");
        true
    }
}

impl Default for InMemoryMappingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MappingStore for InMemoryMappingStore {
    fn assigned_page(&self, content_type: &str) -> Option<PageId> {
        self.option
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(content_type)
    }

    fn assignments(&self) -> Assignments {
        self.option
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .collect()
    }
}

impl<T: MappingStore + ?Sized> MappingStore for Arc<T> {
    fn assigned_page(&self, content_type: &str) -> Option<PageId> {
        (**self).assigned_page(content_type)
    }

    fn assignments(&self) -> Assignments {
        (**self).assignments()
    }

    fn reverse_lookup(&self, page: PageId) -> Option<String> {
        (**self).reverse_lookup(page)
    }
}
