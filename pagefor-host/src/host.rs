//! The adapter the host's hooks call into.

use crate::{HostConfig, HostResult};
use pagefor_menu::classify_menu;
use pagefor_query::ArchiveQuery;
use pagefor_routing::{RewriteTable, RuleSynthesizer, Synthesis};
use pagefor_store::{
    AssignmentOption, InMemoryMappingStore, MappingStore, PageHierarchy, RoutingFlag,
};
use pagefor_types::{
    ClassSet, ContentType, ContentTypeRegistry, MenuEntry, Page, PageId, ViewContext,
};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info};

/// Archive-page support for one site.
///
/// Holds the content types as declared by the host. Their effective configs
/// are synthesized from the current assignments whenever they are needed, so
/// a changed assignment never leaves a stale config behind.
pub struct ArchivePageHost<H> {
    config: HostConfig,
    registry: ContentTypeRegistry,
    store: Arc<InMemoryMappingStore>,
    pages: H,
    table: RwLock<Arc<RewriteTable>>,
}

impl<H: PageHierarchy> ArchivePageHost<H> {
    /// Creates a host over an existing store. The rewrite table starts empty
    /// until the first flush.
    pub fn new(config: HostConfig, store: Arc<InMemoryMappingStore>, pages: H) -> Self {
        let table = RewriteTable::from_syntheses(&[], &config.rewrite);
        Self {
            config,
            registry: ContentTypeRegistry::new(),
            store,
            pages,
            table: RwLock::new(Arc::new(table)),
        }
    }

    /// Creates a host whose assignments live in `config.option_path`, or in
    /// memory when no path is configured. Routing starts dirty.
    pub fn open(config: HostConfig, pages: H) -> HostResult<Self> {
        let flag = Arc::new(RoutingFlag::new());
        let store = match &config.option_path {
            Some(path) => InMemoryMappingStore::load_from(path, flag)?,
            None => InMemoryMappingStore::with_flag(AssignmentOption::new(), flag),
        };
        Ok(Self::new(config, Arc::new(store), pages))
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<InMemoryMappingStore> {
        &self.store
    }

    pub fn pages(&self) -> &H {
        &self.pages
    }

    pub fn registry(&self) -> &ContentTypeRegistry {
        &self.registry
    }

    fn synthesizer(&self) -> RuleSynthesizer<'_, InMemoryMappingStore, H> {
        RuleSynthesizer::new(&*self.store, &self.pages, &self.config.rewrite)
    }

    fn query(&self) -> ArchiveQuery<'_, InMemoryMappingStore, H> {
        ArchiveQuery::new(&self.registry, &*self.store, &self.pages)
    }

    // ── Registration and routing ─────────────────────────────────

    /// Registers a content type and returns its synthesized routing.
    ///
    /// The returned config is what the host should register in place of the
    /// declared one.
    pub fn register_content_type(&mut self, content_type: ContentType) -> HostResult<Synthesis> {
        self.registry.register(content_type.clone())?;
        let synthesis = self.synthesizer().synthesize(&content_type);
        debug!(
            content_type = %content_type.name,
            routed = synthesis.is_override(),
            "Content type registered"
        );
        Ok(synthesis)
    }

    /// Registers a content type again, as hosts do on every boot.
    ///
    /// The declared config replaces the earlier one and keeps its
    /// registration order; unknown types are appended. Routing is marked
    /// dirty when the declared config changed.
    pub fn reregister_content_type(&mut self, content_type: ContentType) -> HostResult<Synthesis> {
        let changed = self.registry.get(&content_type.name) != Some(&content_type);
        self.registry.upsert(content_type.clone())?;
        if changed {
            self.store.flag().mark_dirty();
            info!(content_type = %content_type.name, "Content type config changed, rewrite rules marked for flush");
        }
        Ok(self.synthesizer().synthesize(&content_type))
    }

    /// Effective config of a registered type under the current assignments.
    #[must_use]
    pub fn content_type(&self, name: &str) -> Option<ContentType> {
        let declared = self.registry.get(name)?;
        Some(self.synthesizer().synthesize(declared).config)
    }

    /// Stores the assignments posted from the settings screen.
    ///
    /// Marks routing dirty when they differ from the stored ones and writes
    /// them to `option_path` when one is configured. Returns whether anything
    /// changed.
    pub fn save_assignments(&self, option: AssignmentOption) -> HostResult<bool> {
        let changed = self.store.replace_option(option);
        if let Some(path) = &self.config.option_path {
            self.store.save_to(path)?;
        }
        Ok(changed)
    }

    /// Rebuilds the rewrite table if routing is dirty.
    ///
    /// Returns `true` when a rebuild ran. A save that lands while the rebuild
    /// runs keeps routing dirty for the next call.
    pub fn flush_rewrite_rules_if_dirty(&self) -> bool {
        let Some(ticket) = self.store.flag().begin_flush() else {
            return false;
        };

        let table = RewriteTable::build(&self.registry, &*self.store, &self.pages, &self.config.rewrite);
        info!(
            rules = table.len(),
            permastructs = table.permastructs().len(),
            "Rewrite rules flushed"
        );
        *self.table.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(table);
        self.store.flag().complete(ticket);
        true
    }

    /// The rewrite table as of the last flush.
    #[must_use]
    pub fn rewrite_table(&self) -> Arc<RewriteTable> {
        Arc::clone(&*self.table.read().unwrap_or_else(PoisonError::into_inner))
    }

    // ── Rendering ────────────────────────────────────────────────

    /// Classifies the entries of a menu about to be rendered.
    pub fn render_menu(&self, entries: &mut [MenuEntry], view: &ViewContext) -> usize {
        classify_menu(entries, view, &*self.store, &self.pages)
    }

    #[must_use]
    pub fn document_title(&self, view: &ViewContext, default: &str) -> String {
        self.query().title_for(view, default)
    }

    #[must_use]
    pub fn archive_description(&self, view: &ViewContext, default: &str) -> String {
        self.query().description_for(view, default)
    }

    /// Body classes, switched to page classes for the content types listed
    /// in `page_body_classes`.
    #[must_use]
    pub fn body_classes(&self, view: &ViewContext, classes: ClassSet) -> ClassSet {
        self.query()
            .body_classes(view, classes, |ct| self.config.uses_page_body_classes(ct))
    }

    #[must_use]
    pub fn archive_page(&self, content_type: &str) -> Option<Page> {
        self.query().archive_page(content_type)
    }

    #[must_use]
    pub fn reverse_type_for_page(&self, page: PageId) -> Option<String> {
        self.query().reverse_type_for_page(page)
    }

    /// Eligible content types with their current assignment, for the settings
    /// screen.
    #[must_use]
    pub fn settings_rows(&self) -> Vec<(ContentType, Option<PageId>)> {
        self.query()
            .eligible_content_types()
            .map(|ct| (ct.clone(), self.store.assigned_page(&ct.name)))
            .collect()
    }
}
