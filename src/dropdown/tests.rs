//! Tests for dropdown module

use super::*;
use crate::auth::Authenticator;
use crate::engine::{ListEngine, PageFetcher};
use crate::http::mock::{items, page, MockTransport};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

fn engine(transport: MockTransport) -> ListEngine<MockTransport> {
    ListEngine::new(PageFetcher::new(transport, Authenticator::bearer("re_test")))
}

#[test_case(json!({"id": "tpl_1", "name": "Welcome"}), Some(("Welcome (tpl_1)", "tpl_1")) ; "named item")]
#[test_case(json!({"id": "tpl_2"}), Some(("tpl_2", "tpl_2")) ; "item without name")]
#[test_case(json!({"id": "tpl_3", "name": ""}), Some(("tpl_3", "tpl_3")) ; "empty name")]
#[test_case(json!({"id": "tpl_4", "name": null}), Some(("tpl_4", "tpl_4")) ; "null name")]
#[test_case(json!({"id": 7, "name": "Numeric"}), Some(("Numeric (7)", "7")) ; "numeric id")]
#[test_case(json!({"name": "Orphan"}), None ; "missing id")]
#[test_case(json!({"id": "", "name": "Blank"}), None ; "empty id")]
#[test_case(json!("tpl_5"), None ; "not an object")]
fn test_option_projection(item: Value, expected: Option<(&str, &str)>) {
    let expected = expected.map(|(name, value)| DropdownOption::new(name, value));
    assert_eq!(DropdownOption::from_item(&item), expected);
}

#[test]
fn test_dropdown_config_default() {
    let config = DropdownConfig::default();
    assert_eq!(config.page_size, 100);
    assert_eq!(config.max_pages, 10);
}

#[test]
fn test_dropdown_option_serializes_as_pair() {
    let option = DropdownOption::new("Welcome (tpl_1)", "tpl_1");
    assert_eq!(
        serde_json::to_value(&option).unwrap(),
        json!({"name": "Welcome (tpl_1)", "value": "tpl_1"})
    );
}

#[tokio::test]
async fn test_load_options_walks_forward() {
    let engine = engine(MockTransport::pages(vec![
        page(
            vec![
                json!({"id": "tpl_1", "name": "Welcome"}),
                json!({"name": "Draft without id"}),
                json!({"id": "tpl_2"}),
            ],
            true,
        ),
        page(vec![json!({"id": "tpl_3", "name": "Receipt"})], false),
    ]));

    let options = DropdownLoader::new(&engine)
        .load_options("/templates")
        .await
        .unwrap();

    assert_eq!(
        options,
        vec![
            DropdownOption::new("Welcome (tpl_1)", "tpl_1"),
            DropdownOption::new("tpl_2", "tpl_2"),
            DropdownOption::new("Receipt (tpl_3)", "tpl_3"),
        ]
    );

    let calls = engine.fetcher().transport().calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].query.get("limit"), Some(&"100".to_string()));
    assert!(!calls[0].query.contains_key("after"));
    assert_eq!(calls[1].query.get("after"), Some(&"tpl_2".to_string()));
    assert!(calls.iter().all(|call| !call.query.contains_key("before")));
}

#[tokio::test]
async fn test_load_options_stops_after_ten_pages() {
    let engine = engine(MockTransport::new(|n, _| Ok(page(items("tpl", n, 1), true))));

    let options = DropdownLoader::new(&engine)
        .load_options("/templates")
        .await
        .unwrap();

    assert_eq!(engine.fetcher().transport().call_count(), 10);
    assert_eq!(options.len(), 10);
    assert_eq!(options[9], DropdownOption::new("tpl_9", "tpl_9"));
}

#[tokio::test]
async fn test_load_options_custom_bound() {
    let engine = engine(MockTransport::new(|n, _| Ok(page(items("tpl", n, 1), true))));
    let loader = DropdownLoader::new(&engine).with_config(DropdownConfig {
        page_size: 25,
        max_pages: 2,
    });

    let options = loader.load_options("/templates").await.unwrap();

    assert_eq!(options.len(), 2);
    let calls = engine.fetcher().transport().calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].query.get("limit"), Some(&"25".to_string()));
}

#[tokio::test]
async fn test_load_options_stops_on_empty_page() {
    let engine = engine(MockTransport::pages(vec![
        page(items("tpl", 0, 2), true),
        page(Vec::new(), true),
    ]));

    let options = DropdownLoader::new(&engine)
        .load_options("/templates")
        .await
        .unwrap();

    assert_eq!(options.len(), 2);
    assert_eq!(engine.fetcher().transport().call_count(), 2);
}

#[tokio::test]
async fn test_load_options_propagates_transport_error() {
    let engine = engine(MockTransport::new(|_, _| {
        Err(crate::error::Error::http_status(403, "forbidden"))
    }));

    let err = DropdownLoader::new(&engine)
        .load_options("/templates")
        .await
        .unwrap_err();

    assert!(err.is_transport());
}
