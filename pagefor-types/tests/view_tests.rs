use pagefor_types::{POSTS_CONTENT_TYPE, Page, PageId, PageKind, PageStatus, ViewContext};

#[test]
fn content_type_for_singular_and_archive() {
    assert_eq!(ViewContext::singular("project", 7).content_type(), Some("project"));
    assert_eq!(ViewContext::archive("project").content_type(), Some("project"));
    assert_eq!(ViewContext::Home.content_type(), None);
    assert_eq!(ViewContext::Search.content_type(), None);
    assert_eq!(ViewContext::PostsIndex.content_type(), None);
}

#[test]
fn archive_type_covers_posts_index() {
    assert_eq!(ViewContext::PostsIndex.archive_type(), Some(POSTS_CONTENT_TYPE));
    assert_eq!(ViewContext::archive("event").archive_type(), Some("event"));
    assert_eq!(ViewContext::singular("event", 3).archive_type(), None);
}

#[test]
fn view_context_json_shape() {
    let view: ViewContext =
        serde_json::from_str(r#"{"view": "singular", "content_type": "project", "item_id": 9}"#)
            .unwrap();
    assert_eq!(view, ViewContext::singular("project", 9));

    let view: ViewContext = serde_json::from_str(r#"{"view": "posts_index"}"#).unwrap();
    assert_eq!(view, ViewContext::PostsIndex);
}

#[test]
fn only_published_pages_qualify() {
    let id = PageId::new(1).unwrap();
    assert!(Page::new(id, "about").is_published_page());
    assert!(!Page::new(id, "about").with_status(PageStatus::Draft).is_published_page());
    assert!(
        !Page::new(id, "about")
            .with_kind(PageKind::Other("post".into()))
            .is_published_page()
    );
}
