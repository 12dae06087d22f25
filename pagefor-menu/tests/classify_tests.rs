use pagefor_menu::{ArchiveTrail, classify, classify_menu};
use pagefor_store::{AssignmentOption, InMemoryMappingStore, InMemoryPageTree, RoutingFlag};
use pagefor_types::{ClassSet, MenuEntry, MenuTarget, Page, PageId, ViewContext};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::sync::Arc;

fn id(raw: u64) -> PageId {
    PageId::new(raw).unwrap()
}

fn store(assignments: &[(&str, u64)]) -> InMemoryMappingStore {
    let option: AssignmentOption = assignments
        .iter()
        .map(|(name, page)| (*name, id(*page)))
        .collect();
    InMemoryMappingStore::with_flag(option, Arc::new(RoutingFlag::clean()))
}

/// 1 → 10 → 42, plus the unrelated page 99.
fn nested_pages() -> InMemoryPageTree {
    [
        Page::new(id(1), "about"),
        Page::new(id(10), "team").with_parent(id(1)),
        Page::new(id(42), "projects").with_parent(id(10)),
        Page::new(id(99), "contact"),
    ]
    .into_iter()
    .collect()
}

/// 42 at the root, plus the unrelated page 99.
fn flat_pages() -> InMemoryPageTree {
    [Page::new(id(42), "projects"), Page::new(id(99), "contact")]
        .into_iter()
        .collect()
}

fn classes(entry: &MenuEntry) -> Vec<&str> {
    entry.classes.iter().collect()
}

// ── Assigned page ────────────────────────────────────────────────

#[test]
fn singular_item_marks_archive_page_as_parent() {
    let (store, pages) = (store(&[("project", 42)]), flat_pages());
    let mut entry = MenuEntry::page(7, id(42)).with_classes(["menu-item", "menu-item-type-post_type"]);

    assert!(classify(&mut entry, &ViewContext::singular("project", 500), &store, &pages));
    assert_eq!(
        classes(&entry),
        vec![
            "menu-item",
            "menu-item-type-post_type",
            "current-menu-parent",
            "current-post_type-parent",
            "current-project-parent",
        ]
    );
    assert!(entry.current_item_parent);
    assert!(!entry.current_item_ancestor);
    assert!(!entry.current);
}

#[test]
fn nested_singular_item_marks_archive_page_as_ancestor() {
    let (store, pages) = (store(&[("project", 42)]), flat_pages());
    let mut entry = MenuEntry::page(7, id(42));

    classify(&mut entry, &ViewContext::singular_child("project", 501, 500), &store, &pages);
    assert_eq!(
        classes(&entry),
        vec!["current-menu-ancestor", "current-post_type-ancestor", "current-project-ancestor"]
    );
    assert!(entry.current_item_ancestor);
    assert!(!entry.current_item_parent);
}

#[test]
fn zero_parent_counts_as_root() {
    let (store, pages) = (store(&[("project", 42)]), flat_pages());
    let mut entry = MenuEntry::page(7, id(42));
    classify(&mut entry, &ViewContext::singular_child("project", 501, 0), &store, &pages);
    assert!(entry.classes.contains("current-menu-parent"));
    assert!(entry.current_item_parent);
}

#[test]
fn archive_view_marks_archive_page_as_current_item_only() {
    let (store, pages) = (store(&[("project", 42)]), nested_pages());
    let mut entry = MenuEntry::page(7, id(42));

    classify(&mut entry, &ViewContext::archive("project"), &store, &pages);
    assert_eq!(classes(&entry), vec!["current-menu-item"]);
    assert!(entry.current);
    assert!(!entry.current_item_parent);
    assert!(!entry.current_item_ancestor);
}

#[test]
fn type_class_is_sanitized() {
    let (store, pages) = (store(&[("my.type", 42)]), flat_pages());
    let mut entry = MenuEntry::page(7, id(42));
    classify(&mut entry, &ViewContext::singular("my.type", 500), &store, &pages);
    assert!(entry.classes.contains("current-mytype-parent"));
}

// ── Ancestors ────────────────────────────────────────────────────

#[test]
fn ancestor_pages_get_ancestor_classes() {
    let (store, pages) = (store(&[("project", 42)]), nested_pages());
    let view = ViewContext::singular("project", 500);

    let trail = ArchiveTrail::resolve(&view, &store, &pages).unwrap();

    for page in [10, 1] {
        let mut entry = MenuEntry::page(page, id(page));
        assert!(trail.classify(&mut entry));
        assert_eq!(classes(&entry), vec!["current-menu-ancestor", "current-page-ancestor"]);
        assert!(entry.current_item_ancestor);
    }

    let mut unrelated = MenuEntry::page(99, id(99)).with_classes(["menu-item"]);
    assert!(!trail.classify(&mut unrelated));
    assert_eq!(classes(&unrelated), vec!["menu-item"]);
}

#[test]
fn archive_view_also_marks_ancestors() {
    let (store, pages) = (store(&[("project", 42)]), nested_pages());
    let mut entry = MenuEntry::page(10, id(10));
    classify(&mut entry, &ViewContext::archive("project"), &store, &pages);
    assert_eq!(classes(&entry), vec!["current-menu-ancestor", "current-page-ancestor"]);
}

// ── No-op cases ──────────────────────────────────────────────────

#[test]
fn non_page_entries_are_untouched() {
    let (store, pages) = (store(&[("project", 42)]), flat_pages());
    let view = ViewContext::archive("project");

    for target in [
        MenuTarget::Object {
            object: "post".into(),
            id: 42,
        },
        MenuTarget::Custom {
            url: "/projects".into(),
        },
    ] {
        let mut entry = MenuEntry::new(3, target);
        let before = entry.clone();
        assert!(!classify(&mut entry, &view, &store, &pages));
        assert_eq!(entry, before);
    }
}

#[test]
fn other_views_are_no_ops() {
    let (store, pages) = (store(&[("project", 42), ("post", 42)]), flat_pages());
    for view in [ViewContext::Home, ViewContext::Search, ViewContext::PostsIndex, ViewContext::Other] {
        let mut entry = MenuEntry::page(7, id(42));
        assert!(!classify(&mut entry, &view, &store, &pages), "{view:?}");
        assert!(entry.classes.is_empty());
        assert!(ArchiveTrail::resolve(&view, &store, &pages).is_none());
    }
}

#[test]
fn unassigned_type_is_a_no_op() {
    let (store, pages) = (store(&[("project", 42)]), flat_pages());
    let mut entry = MenuEntry::page(7, id(42));
    assert!(!classify(&mut entry, &ViewContext::archive("event"), &store, &pages));
    assert!(entry.classes.is_empty());
}

#[test]
fn classification_is_idempotent() {
    let (store, pages) = (store(&[("project", 42)]), flat_pages());
    let view = ViewContext::singular("project", 500);
    let mut entry = MenuEntry::page(7, id(42)).with_classes(["current-menu-parent"]);

    assert!(classify(&mut entry, &view, &store, &pages));
    let once = entry.clone();
    assert!(!classify(&mut entry, &view, &store, &pages));
    assert_eq!(entry, once);
    assert_eq!(entry.classes.len(), 3);
}

// ── Whole menus ──────────────────────────────────────────────────

#[test]
fn classify_menu_counts_changed_entries() {
    let (store, pages) = (store(&[("project", 42)]), nested_pages());
    let mut menu = vec![
        MenuEntry::page(1, id(1)),
        MenuEntry::page(2, id(10)).with_menu_parent(1, 1),
        MenuEntry::page(3, id(42)).with_menu_parent(2, 2),
        MenuEntry::page(4, id(99)),
        MenuEntry::new(5, MenuTarget::Custom { url: "https://example.org".into() }),
    ];

    let changed = classify_menu(&mut menu, &ViewContext::singular("project", 500), &store, &pages);
    assert_eq!(changed, 3);
    assert!(menu[0].current_item_ancestor);
    assert!(menu[1].current_item_ancestor);
    assert!(menu[2].current_item_parent);
    assert!(menu[3].classes.is_empty());
    assert!(menu[4].classes.is_empty());
}

#[test]
fn classify_menu_handles_empty_menus_and_no_op_views() {
    let (store, pages) = (store(&[("project", 42)]), nested_pages());
    assert_eq!(classify_menu(&mut [], &ViewContext::archive("project"), &store, &pages), 0);

    let mut menu = vec![MenuEntry::page(1, id(42))];
    assert_eq!(classify_menu(&mut menu, &ViewContext::Home, &store, &pages), 0);
}

// ── Properties ───────────────────────────────────────────────────

fn arb_view() -> impl Strategy<Value = ViewContext> {
    prop_oneof![
        Just(ViewContext::archive("project")),
        Just(ViewContext::singular("project", 500)),
        Just(ViewContext::singular_child("project", 501, 500)),
        Just(ViewContext::archive("event")),
        Just(ViewContext::Home),
    ]
}

proptest! {
    #[test]
    fn classification_only_adds_classes(
        view in arb_view(),
        page in prop::sample::select(vec![1u64, 10, 42, 99]),
        existing in prop::collection::vec("[a-z-]{1,12}", 0..5),
    ) {
        let (store, pages) = (store(&[("project", 42)]), nested_pages());
        let mut entry = MenuEntry::page(1, id(page)).with_classes(existing.clone());
        let before: ClassSet = entry.classes.clone();

        classify(&mut entry, &view, &store, &pages);
        for class in before.iter() {
            prop_assert!(entry.classes.contains(class));
        }

        let once = entry.clone();
        prop_assert!(!classify(&mut entry, &view, &store, &pages));
        prop_assert_eq!(entry, once);
    }
}
