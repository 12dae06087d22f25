//! Body classes for archives rendered through their assigned page.

use crate::ArchiveQuery;
use pagefor_store::{MappingStore, PageHierarchy};
use pagefor_types::{ClassSet, ViewContext};
use tracing::debug;

const ARCHIVE_CLASSES: [&str; 2] = ["archive", "post-type-archive"];

impl<M, H> ArchiveQuery<'_, M, H>
where
    M: MappingStore + ?Sized,
    H: PageHierarchy + ?Sized,
{
    /// Body classes for a view.
    ///
    /// On the archive of a registered type with an assigned page, and only
    /// when `use_page_classes` allows it for that type, the page classes
    /// replace the generic archive ones. Anything else passes through.
    pub fn body_classes(
        &self,
        view: &ViewContext,
        mut classes: ClassSet,
        use_page_classes: impl Fn(&str) -> bool,
    ) -> ClassSet {
        let ViewContext::Archive { content_type } = view else {
            return classes;
        };
        if !self.registry.contains(content_type) {
            return classes;
        }
        let Some(page) = self.store.assigned_page(content_type) else {
            return classes;
        };
        if !use_page_classes(content_type) {
            return classes;
        }

        classes.insert("page");
        classes.insert(format!("page-{page}"));
        classes.insert("page-template-default");
        for class in ARCHIVE_CLASSES {
            classes.remove(class);
        }
        debug!(content_type = %content_type, page = %page, "Archive rendered with page body classes");
        classes
    }
}
