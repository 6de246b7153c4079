//! Tests for pagination module

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::json;

fn page_of(ids: &[&str], has_more: bool) -> Page {
    Page {
        items: ids.iter().map(|id| json!({ "id": id })).collect(),
        has_more,
    }
}

// ============================================================================
// RequestOptions Tests
// ============================================================================

#[test]
fn test_request_options_default_is_single_page() {
    let options = RequestOptions::default();
    assert_eq!(options.mode, PageMode::SinglePage { limit: None });
    assert!(!options.is_full_aggregation());
    assert_eq!(options.start_cursor().unwrap(), None);
}

#[test]
fn test_request_options_cursor_resolution() {
    let options = RequestOptions::all().with_after("em_1");
    assert!(options.is_full_aggregation());
    assert_eq!(
        options.start_cursor().unwrap(),
        Some(Cursor::After("em_1".to_string()))
    );

    let options = RequestOptions::single_page(Some(10)).with_before("em_9");
    assert_eq!(
        options.start_cursor().unwrap(),
        Some(Cursor::Before("em_9".to_string()))
    );
}

#[test]
fn test_request_options_both_cursors_rejected() {
    let options = RequestOptions::all().with_after("a").with_before("b");
    let err = options.start_cursor().unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidArgument {
            item_index: None,
            ..
        }
    ));
}

#[test]
fn test_request_options_conflict_names_item() {
    let options = RequestOptions::single_page(Some(10))
        .with_after("a")
        .with_before("b")
        .for_item(3);
    let err = options.start_cursor().unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidArgument {
            item_index: Some(3),
            ..
        }
    ));
    assert!(err.to_string().contains("item 3"));
}

#[test]
fn test_request_options_empty_cursor_is_absent() {
    let options = RequestOptions::all().with_after("").with_before("em_5");
    assert_eq!(
        options.start_cursor().unwrap(),
        Some(Cursor::Before("em_5".to_string()))
    );
}

#[test]
fn test_cursor_accessors() {
    let cursor = Cursor::Before("em_3".to_string());
    assert_eq!(cursor.direction(), Direction::Backward);
    assert_eq!(cursor.value(), "em_3");
    assert_eq!(cursor.into_value(), "em_3");
    assert_eq!(Direction::Forward.param(), "after");
    assert_eq!(Direction::Backward.param(), "before");
    assert_eq!(Direction::default(), Direction::Forward);
}

// ============================================================================
// Page / ListResult Tests
// ============================================================================

#[test]
fn test_page_from_body() {
    let page = Page::from_body(json!({
        "object": "list",
        "data": [{"id": "a"}, {"id": "b"}],
        "has_more": true
    }))
    .unwrap();
    assert_eq!(page.len(), 2);
    assert!(page.has_more);
    assert_eq!(page.last_cursor(), Some("b".to_string()));
}

#[test]
fn test_page_from_body_missing_has_more_is_false() {
    let page = Page::from_body(json!({"data": []})).unwrap();
    assert!(page.is_empty());
    assert!(!page.has_more);
}

#[test]
fn test_page_from_body_rejects_non_array_data() {
    assert!(Page::from_body(json!({"data": {"id": "a"}, "has_more": true})).is_none());
    assert!(Page::from_body(json!({"has_more": true})).is_none());
    assert!(Page::from_body(json!([{"id": "a"}])).is_none());
    assert!(Page::from_body(json!(null)).is_none());
}

#[test]
fn test_page_last_cursor_requires_usable_id() {
    let page = Page {
        items: vec![json!({"id": "a"}), json!({"name": "no id"})],
        has_more: true,
    };
    assert_eq!(page.last_cursor(), None);

    let page = Page {
        items: vec![json!({"id": ""})],
        has_more: true,
    };
    assert_eq!(page.last_cursor(), None);
}

#[test]
fn test_list_result_shape() {
    let result = ListResult::new(vec![json!({"id": "a"})], true);
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({"object": "list", "data": [{"id": "a"}], "has_more": true})
    );

    let empty = ListResult::empty();
    assert!(empty.is_empty());
    assert_eq!(empty.object, LIST_OBJECT);
    assert!(!empty.has_more);

    let from_page: ListResult = page_of(&["x", "y"], true).into();
    assert_eq!(from_page.len(), 2);
    assert!(from_page.has_more);
}

// ============================================================================
// PaginationState Tests
// ============================================================================

#[test]
fn test_pagination_state_mutations() {
    let mut state = PaginationState::new();
    assert!(state.cursor.is_none());
    assert!(!state.is_done());

    state.next_page();
    state.add_fetched(100);
    state.set_cursor("em_100".to_string());
    assert_eq!(state.pages_fetched, 1);
    assert_eq!(state.total_fetched, 100);
    assert_eq!(state.cursor, Some("em_100".to_string()));

    state.mark_done(StopReason::Exhausted);
    assert!(state.is_done());
    assert_eq!(state.stop_reason, Some(StopReason::Exhausted));
}

#[test]
fn test_stop_reason_display() {
    assert_eq!(StopReason::PageLimit.to_string(), "page limit reached");
    assert_eq!(StopReason::EmptyPage.to_string(), "empty page");
}

// ============================================================================
// CursorPaginator Tests
// ============================================================================

#[test]
fn test_request_params_without_cursor() {
    let paginator = CursorPaginator::forward(100, 10);
    let params = paginator.request_params(&PaginationState::new());

    assert_eq!(params.len(), 1);
    assert_eq!(params.get("limit"), Some(&"100".to_string()));
}

#[test]
fn test_request_params_only_active_direction() {
    let paginator = CursorPaginator::new(25, 10, Direction::Backward);
    let state = PaginationState::with_cursor(Some("em_7".to_string()));
    let params = paginator.request_params(&state);

    assert_eq!(params.get("limit"), Some(&"25".to_string()));
    assert_eq!(params.get("before"), Some(&"em_7".to_string()));
    assert!(!params.contains_key("after"));
}

#[test]
fn test_process_page_continues_with_last_id() {
    let paginator = CursorPaginator::forward(2, 10);
    let mut state = PaginationState::new();

    let next = paginator.process_page(&page_of(&["a", "b"], true), &mut state);

    assert!(next.is_continue());
    assert_eq!(state.cursor, Some("b".to_string()));
    assert_eq!(state.pages_fetched, 1);
    assert_eq!(state.total_fetched, 2);
    if let NextPage::Continue { query_params } = next {
        assert_eq!(query_params.get("after"), Some(&"b".to_string()));
        assert_eq!(query_params.get("limit"), Some(&"2".to_string()));
        assert!(!query_params.contains_key("before"));
    }
}

#[test]
fn test_process_page_backward_keeps_direction() {
    let paginator = CursorPaginator::new(2, 10, Direction::Backward);
    let mut state = PaginationState::with_cursor(Some("z".to_string()));

    let next = paginator.process_page(&page_of(&["y", "x"], true), &mut state);

    match next {
        NextPage::Continue { query_params } => {
            assert_eq!(query_params.get("before"), Some(&"x".to_string()));
            assert!(!query_params.contains_key("after"));
        }
        NextPage::Done(reason) => panic!("expected Continue, got Done({reason})"),
    }
}

#[test]
fn test_process_page_stops_when_exhausted() {
    let paginator = CursorPaginator::forward(2, 10);
    let mut state = PaginationState::new();

    let next = paginator.process_page(&page_of(&["a", "b"], false), &mut state);

    assert_eq!(next, NextPage::Done(StopReason::Exhausted));
    assert!(state.is_done());
    assert!(state.cursor.is_none());
}

#[test]
fn test_process_page_stops_on_empty_page_despite_has_more() {
    let paginator = CursorPaginator::forward(2, 10);
    let mut state = PaginationState::new();

    let next = paginator.process_page(&page_of(&[], true), &mut state);

    assert_eq!(next, NextPage::Done(StopReason::EmptyPage));
}

#[test]
fn test_process_page_stops_on_missing_id() {
    let paginator = CursorPaginator::forward(2, 10);
    let mut state = PaginationState::new();
    let page = Page {
        items: vec![json!({"id": "a"}), json!({"name": "anonymous"})],
        has_more: true,
    };

    let next = paginator.process_page(&page, &mut state);

    assert_eq!(next, NextPage::Done(StopReason::MissingCursor));
    assert_eq!(state.total_fetched, 2);
}

#[test]
fn test_process_page_stops_at_page_bound() {
    let paginator = CursorPaginator::forward(1, 3);
    let mut state = PaginationState::new();

    assert!(paginator
        .process_page(&page_of(&["a"], true), &mut state)
        .is_continue());
    assert!(paginator
        .process_page(&page_of(&["b"], true), &mut state)
        .is_continue());
    assert_eq!(
        paginator.process_page(&page_of(&["c"], true), &mut state),
        NextPage::Done(StopReason::PageLimit)
    );
    assert_eq!(state.pages_fetched, 3);
    assert_eq!(state.cursor, Some("b".to_string()));
}
