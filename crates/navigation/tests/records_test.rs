#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Building trees from records and tree files.

use std::fs;
use std::path::PathBuf;

use serde_json::json;
use sitenav::loader::load_records;
use sitenav::{Navigation, NavigationError, Page, PageInput};
use sitenav_test_utils::{outline, sample_records, urls};

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("sitenav-{name}-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_record_children_follow_array_order() {
    let mut nav = Navigation::new();
    let docs = nav
        .add_page(json!({
            "title": "Docs",
            "url": "/docs",
            "pages": [
                {"url": "/docs/3"},
                {"url": "/docs/1"},
                {"url": "/docs/2"}
            ]
        }))
        .unwrap();

    assert_eq!(docs.pages().len(), 3);
    assert_eq!(urls(docs.pages()), vec!["/docs/3", "/docs/1", "/docs/2"]);
}

#[test]
fn test_unsupported_input_is_a_no_op() {
    let mut nav = Navigation::new();
    nav.add_page("/kept");

    assert!(nav.add_page(json!(12)).is_none());
    assert!(nav.add_page(json!(false)).is_none());
    assert!(nav.add_page(PageInput::Unsupported(json!([1]))).is_none());

    assert_eq!(urls(nav.pages()), vec!["/kept"]);
}

#[test]
fn test_every_input_shape() {
    let mut nav = Navigation::new();

    nav.add_page(Page::new("/page"));
    nav.add_page("/str");
    nav.add_page("/string".to_string());
    nav.add_page(None::<String>);
    nav.add_page(json!(null));
    nav.add_page(json!({"url": "/record"}));

    assert_eq!(
        urls(nav.pages()),
        vec!["/page", "/str", "/string", "", "", "/record"]
    );
}

#[test]
fn test_add_page_returns_handle_for_chaining() {
    let mut nav = Navigation::new();
    nav.add_page("/docs")
        .unwrap()
        .set_title("Docs")
        .set_priority(5)
        .add_page("/docs/child");

    let docs = &nav.pages()[0];
    assert_eq!(docs.title(), "Docs");
    assert_eq!(docs.priority(), 5);
    assert_eq!(urls(docs.pages()), vec!["/docs/child"]);
}

#[test]
fn test_set_from_array_sample_records() {
    let mut nav = Navigation::new();
    nav.set_from_array(sample_records());

    assert_eq!(urls(nav.pages()), vec!["/", "/docs", "/blog", "/admin"]);
    assert_eq!(nav.pages()[3].permission(), Some("access admin"));

    nav.sort();
    assert_eq!(
        outline(nav.pages()),
        vec![
            (0, "/".to_string()),
            (0, "/blog".to_string()),
            (0, "/docs".to_string()),
            (1, "/docs/api".to_string()),
            (1, "/docs/guide".to_string()),
            (0, "/admin".to_string()),
            (1, "/admin/users".to_string()),
        ]
    );
}

#[test]
fn test_tree_files_in_every_format_agree() {
    let dir = temp_dir("formats");

    let yaml = dir.join("nav.yaml");
    fs::write(
        &yaml,
        r#"
- title: Home
  url: /
- title: Docs
  url: /docs
  priority: 2
  pages:
    - title: Intro
      url: /docs/intro
"#,
    )
    .unwrap();

    let toml = dir.join("nav.toml");
    fs::write(
        &toml,
        r#"
[[pages]]
title = "Home"
url = "/"

[[pages]]
title = "Docs"
url = "/docs"
priority = 2
pages = [{ title = "Intro", url = "/docs/intro" }]
"#,
    )
    .unwrap();

    let json = dir.join("nav.json");
    fs::write(
        &json,
        r#"{"pages": [
            {"title": "Home", "url": "/"},
            {"title": "Docs", "url": "/docs", "priority": 2,
             "pages": [{"title": "Intro", "url": "/docs/intro"}]}
        ]}"#,
    )
    .unwrap();

    let outlines: Vec<_> = [&yaml, &toml, &json]
        .into_iter()
        .map(|path| {
            let mut nav = Navigation::new();
            nav.set_from_array(load_records(path).unwrap());
            outline(nav.pages())
        })
        .collect();

    fs::remove_dir_all(&dir).unwrap();

    assert_eq!(outlines[0], outlines[1]);
    assert_eq!(outlines[1], outlines[2]);
    assert_eq!(outlines[0].len(), 3);
}

#[test]
fn test_invalid_tree_file() {
    let dir = temp_dir("invalid");
    let path = dir.join("nav.json");
    fs::write(&path, r#"{"menu": []}"#).unwrap();

    let result = load_records(&path);
    fs::remove_dir_all(&dir).unwrap();

    assert!(matches!(result, Err(NavigationError::InvalidTree(_))));
}
