use pagefor_routing::{RewriteSettings, RewriteTable, RuleSynthesizer, Synthesis};
use pagefor_store::{AssignmentOption, InMemoryMappingStore, InMemoryPageTree, RoutingFlag};
use pagefor_types::{
    ContentType, ContentTypeRegistry, HasArchive, Page, PageId, RewriteConfig, RewriteRule,
    RulePriority,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn id(raw: u64) -> PageId {
    PageId::new(raw).unwrap()
}

fn registry() -> ContentTypeRegistry {
    let mut registry = ContentTypeRegistry::new();
    registry
        .register(
            ContentType::new("project")
                .with_archive(HasArchive::Enabled)
                .with_rewrite(RewriteConfig::new("project").with_feeds(true)),
        )
        .unwrap();
    registry.register(ContentType::new("event")).unwrap();
    registry
        .register(ContentType::new("service").with_rewrite(RewriteConfig::new("service").with_pages(false)))
        .unwrap();
    registry
}

fn table() -> RewriteTable {
    let pages: InMemoryPageTree = [
        Page::new(id(1), "about"),
        Page::new(id(10), "team").with_parent(id(1)),
        Page::new(id(20), "services"),
    ]
    .into_iter()
    .collect();
    let option: AssignmentOption = [("project", id(10)), ("service", id(20))].into_iter().collect();
    let store = InMemoryMappingStore::with_flag(option, Arc::new(RoutingFlag::clean()));
    RewriteTable::build(&registry(), &store, &pages, &RewriteSettings::default())
}

// ── Build ────────────────────────────────────────────────────────

#[test]
fn top_rules_precede_bottom_rules() {
    let table = table();
    let priorities: Vec<RulePriority> = table.rules().map(|r| r.priority).collect();
    let first_bottom = priorities.iter().position(|p| *p == RulePriority::Bottom).unwrap();
    assert!(priorities[..first_bottom].iter().all(|p| *p == RulePriority::Top));
    assert!(priorities[first_bottom..].iter().all(|p| *p == RulePriority::Bottom));
}

#[test]
fn only_assigned_types_contribute() {
    let table = table();
    let names: Vec<&str> = table.permastructs().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["project", "service"]);
    assert!(table.rules().all(|r| !r.target.contains("event")));
    // project: 4 top + 4 bottom, service: 1 top + 1 bottom
    assert_eq!(table.rules_with(RulePriority::Top).count(), 5);
    assert_eq!(table.rules_with(RulePriority::Bottom).count(), 5);
    assert_eq!(table.len(), 10);
}

#[test]
fn item_rules_are_most_specific_first() {
    let table = table();
    let service: Vec<&RewriteRule> = table
        .rules_with(RulePriority::Bottom)
        .filter(|r| r.target.contains("service="))
        .collect();
    let expected = RewriteRule::bottom("services/([^/]+)/?$", "index.php?service=$matches[1]");
    assert_eq!(service, vec![&expected]);
}

#[test]
fn empty_registry_builds_empty_table() {
    let store = InMemoryMappingStore::new();
    let table = RewriteTable::build(
        &ContentTypeRegistry::new(),
        &store,
        &InMemoryPageTree::new(),
        &RewriteSettings::default(),
    );
    assert!(table.is_empty());
    assert!(table.resolve("anything").is_none());
}

#[test]
fn uncompilable_rules_are_skipped() {
    let synthesis = Synthesis {
        config: ContentType::new("broken"),
        rules: vec![
            RewriteRule::top("broken/(unclosed/?$", "index.php?post_type=broken"),
            RewriteRule::top("broken/?$", "index.php?post_type=broken"),
        ],
        permastruct: None,
        page: None,
    };
    let table = RewriteTable::from_syntheses(&[synthesis], &RewriteSettings::default());
    assert_eq!(table.len(), 1);
    assert_eq!(table.resolve("broken").unwrap().var("post_type"), Some("broken"));
}

#[test]
fn from_syntheses_matches_build() {
    let pages: InMemoryPageTree = [Page::new(id(20), "services")].into_iter().collect();
    let option: AssignmentOption = [("service", id(20))].into_iter().collect();
    let store = InMemoryMappingStore::with_flag(option, Arc::new(RoutingFlag::clean()));
    let settings = RewriteSettings::default();

    let synthesizer = RuleSynthesizer::new(&store, &pages, &settings);
    let syntheses: Vec<Synthesis> = registry().iter().map(|ct| synthesizer.synthesize(ct)).collect();
    let manual = RewriteTable::from_syntheses(&syntheses, &settings);
    let built = RewriteTable::build(&registry(), &store, &pages, &settings);

    assert_eq!(manual.rules().collect::<Vec<_>>(), built.rules().collect::<Vec<_>>());
}

// ── Resolve ──────────────────────────────────────────────────────

#[test]
fn archive_paths_resolve_to_post_type() {
    let table = table();
    for path in ["about/team", "/about/team/", "about/team?orderby=title"] {
        let route = table.resolve(path).unwrap();
        assert_eq!(route.query, "index.php?post_type=project", "{path}");
    }
}

#[test]
fn archive_pagination_and_feeds_resolve() {
    let table = table();

    let route = table.resolve("about/team/page/2").unwrap();
    assert_eq!(route.var("post_type"), Some("project"));
    assert_eq!(route.var("paged"), Some("2"));

    let route = table.resolve("about/team/feed/rss2/").unwrap();
    assert_eq!(route.var("feed"), Some("rss2"));

    let route = table.resolve("about/team/atom").unwrap();
    assert_eq!(route.var("feed"), Some("atom"));
}

#[test]
fn items_resolve_beneath_archive_path() {
    let table = table();

    let route = table.resolve("about/team/new-office").unwrap();
    assert_eq!(route.query, "index.php?project=new-office");

    let route = table.resolve("about/team/new-office/page/3").unwrap();
    assert_eq!(route.var("project"), Some("new-office"));
    assert_eq!(route.var("paged"), Some("3"));

    let route = table.resolve("about/team/new-office/feed/rss").unwrap();
    assert_eq!(route.var("project"), Some("new-office"));
    assert_eq!(route.var("feed"), Some("rss"));
}

#[test]
fn disabled_pagination_falls_through_to_items() {
    let table = table();
    assert!(table.resolve("services/page/2").is_none());
    let route = table.resolve("services/consulting").unwrap();
    assert_eq!(route.var("service"), Some("consulting"));
}

#[test]
fn unknown_paths_do_not_resolve() {
    let table = table();
    assert!(table.resolve("").is_none());
    assert!(table.resolve("contact").is_none());
    assert!(table.resolve("xabout/team").is_none());
}

// ── Settings ─────────────────────────────────────────────────────

#[test]
fn settings_fill_missing_keys_with_defaults() {
    let settings: RewriteSettings = toml::from_str(r#"pagination_base = "seite""#).unwrap();
    assert_eq!(settings.pagination_base, "seite");
    assert_eq!(settings.feeds, RewriteSettings::default().feeds);
    assert_eq!(settings.index, "index.php");
}
