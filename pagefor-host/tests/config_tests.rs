use pagefor_host::HostConfig;
use std::fs;

#[test]
fn missing_config_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = HostConfig::load_from(&dir.path().join("pagefor.toml"));
    assert_eq!(config, HostConfig::default());
}

#[test]
fn malformed_config_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pagefor.toml");
    fs::write(&path, "page_body_classes = 42\n[rewrite").unwrap();
    assert_eq!(HostConfig::load_from(&path), HostConfig::default());
}

#[test]
fn config_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pagefor.toml");
    fs::write(
        &path,
        r#"
page_body_classes = ["project"]

[rewrite]
root = "index.php/"
pagination_base = "seite"
"#,
    )
    .unwrap();

    let config = HostConfig::load_from(&path);
    assert!(config.uses_page_body_classes("project"));
    assert_eq!(config.rewrite.root, "index.php/");
    assert_eq!(config.rewrite.pagination_base, "seite");
    assert_eq!(config.rewrite.feed_base, "feed");
    assert_eq!(config.option_path, None);
}
