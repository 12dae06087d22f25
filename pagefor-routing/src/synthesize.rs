//! Archive routing for content types with an assigned page.

use crate::RewriteSettings;
use pagefor_store::{MappingStore, PageHierarchy};
use pagefor_types::{ContentType, HasArchive, PageId, Permastruct, RewriteConfig, RewriteRule};
use tracing::{debug, info};

/// Outcome of synthesizing one content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synthesis {
    /// The content type config, rewritten when the archive moved.
    pub config: ContentType,
    /// Archive rules, all installed at top priority.
    pub rules: Vec<RewriteRule>,
    /// Structure for singular items, `None` when routing is unchanged.
    pub permastruct: Option<Permastruct>,
    /// The page the archive moved to.
    pub page: Option<PageId>,
}

impl Synthesis {
    fn unchanged(config: &ContentType) -> Self {
        Self {
            config: config.clone(),
            rules: Vec::new(),
            permastruct: None,
            page: None,
        }
    }

    /// Whether the archive was moved to an assigned page.
    #[must_use]
    pub fn is_override(&self) -> bool {
        self.permastruct.is_some()
    }
}

/// Builds archive routing from page assignments.
///
/// Holds only borrowed collaborators: one synthesizer per registration pass,
/// no state survives between calls.
pub struct RuleSynthesizer<'a, M: ?Sized, H: ?Sized> {
    store: &'a M,
    pages: &'a H,
    settings: &'a RewriteSettings,
}

impl<'a, M, H> RuleSynthesizer<'a, M, H>
where
    M: MappingStore + ?Sized,
    H: PageHierarchy + ?Sized,
{
    pub fn new(store: &'a M, pages: &'a H, settings: &'a RewriteSettings) -> Self {
        Self {
            store,
            pages,
            settings,
        }
    }

    /// Moves the archive of `content_type` to the path of its assigned page.
    ///
    /// Without an assigned page, or when the page has no usable path (missing,
    /// unpublished, or the site root), the config comes back unchanged with no
    /// rules. Synthesizing an already synthesized config gives the same
    /// result.
    pub fn synthesize(&self, content_type: &ContentType) -> Synthesis {
        let name = content_type.name.as_str();

        let Some(page) = self.store.assigned_page(name) else {
            debug!(content_type = %name, "No page assigned, keeping default routing");
            return Synthesis::unchanged(content_type);
        };

        let path = self.pages.page_path(page);
        if path.is_empty() {
            debug!(
                content_type = %name,
                page = %page,
                "Assigned page has no usable path, keeping default routing"
            );
            return Synthesis::unchanged(content_type);
        }

        let mut config = content_type.clone();
        config.has_archive = HasArchive::Slug(path.clone());
        config.rewrite.slug = path.clone();
        config.rewrite.with_front = false;

        let base = self.settings.base_for(&escape_path(&path), false);
        let rules = archive_rules(name, &base, &config.rewrite, self.settings);

        let permastruct = Permastruct {
            name: name.to_string(),
            template: format!("{path}/%{name}%"),
            with_front: false,
            feeds: config.rewrite.feeds,
            paged: config.rewrite.pages,
        };

        info!(
            content_type = %name,
            page = %page,
            path = %path,
            rules = rules.len(),
            "Archive routed to assigned page"
        );

        Synthesis {
            config,
            rules,
            permastruct: Some(permastruct),
            page: Some(page),
        }
    }
}

/// Archive, feed and pagination rules for an archive served at `base`.
///
/// `base` is already a pattern: escaped and prefixed. Rules come back in
/// installation order, all at top priority.
pub fn archive_rules(
    content_type: &str,
    base: &str,
    rewrite: &RewriteConfig,
    settings: &RewriteSettings,
) -> Vec<RewriteRule> {
    let query = format!("{}?post_type={content_type}", settings.index);
    let mut rules = vec![RewriteRule::top(format!("{base}/?$"), query.clone())];

    if rewrite.feeds
        && let Some(feeds) = settings.feed_alternation()
    {
        let target = format!("{query}&feed=$matches[1]");
        let feed_base = regex_lite::escape(&settings.feed_base);
        rules.push(RewriteRule::top(
            format!("{base}/{feed_base}/{feeds}/?$"),
            target.clone(),
        ));
        rules.push(RewriteRule::top(format!("{base}/{feeds}/?$"), target));
    }

    if rewrite.pages {
        let pagination = regex_lite::escape(&settings.pagination_base);
        rules.push(RewriteRule::top(
            format!("{base}/{pagination}/([0-9]{{1,}})/?$"),
            format!("{query}&paged=$matches[1]"),
        ));
    }

    rules
}

/// Escapes each `/`-separated segment of a page path for use in a pattern.
///
/// Empty segments are dropped, so stray slashes never produce `//`.
#[must_use]
pub fn escape_path(path: &str) -> String {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(regex_lite::escape)
        .collect::<Vec<_>>()
        .join("/")
}
