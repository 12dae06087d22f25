use pagefor_store::{MappingStore, PageHierarchy};
use pagefor_types::{ContentType, ContentTypeRegistry, Page, PageId, ViewContext};

/// Lookups over the registry, the assignment store and the page hierarchy.
pub struct ArchiveQuery<'a, M: ?Sized, H: ?Sized> {
    pub(crate) registry: &'a ContentTypeRegistry,
    pub(crate) store: &'a M,
    pub(crate) pages: &'a H,
}

impl<'a, M, H> ArchiveQuery<'a, M, H>
where
    M: MappingStore + ?Sized,
    H: PageHierarchy + ?Sized,
{
    pub fn new(registry: &'a ContentTypeRegistry, store: &'a M, pages: &'a H) -> Self {
        Self {
            registry,
            store,
            pages,
        }
    }

    /// Published page standing in for a content type's archive.
    #[must_use]
    pub fn archive_page(&self, content_type: &str) -> Option<Page> {
        let id = self.store.assigned_page(content_type)?;
        self.pages.published_page(id)
    }

    /// Archive page for an archive view or the posts index.
    fn view_page(&self, view: &ViewContext) -> Option<Page> {
        self.archive_page(view.archive_type()?)
    }

    /// Document title for a view: the archive page's title, or `default`.
    #[must_use]
    pub fn title_for(&self, view: &ViewContext, default: &str) -> String {
        match self.view_page(view) {
            Some(page) => page.title,
            None => default.to_string(),
        }
    }

    /// Archive description for a view: the archive page's content, or
    /// `default`.
    #[must_use]
    pub fn description_for(&self, view: &ViewContext, default: &str) -> String {
        match self.view_page(view) {
            Some(page) => page.content,
            None => default.to_string(),
        }
    }

    /// Content type a page stands in for.
    ///
    /// When several types share the page, the first registered one wins.
    /// Assignments for unregistered names are consulted last, in store order.
    #[must_use]
    pub fn reverse_type_for_page(&self, page: PageId) -> Option<String> {
        self.registry
            .names()
            .find(|name| self.store.assigned_page(name) == Some(page))
            .map(str::to_string)
            .or_else(|| self.store.reverse_lookup(page))
    }

    /// Types an operator may assign a page to, in registration order.
    pub fn eligible_content_types(&self) -> impl Iterator<Item = &'a ContentType> {
        self.registry.eligible()
    }
}
