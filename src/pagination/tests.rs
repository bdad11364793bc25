//! Tests for pagination module

use super::*;
use crate::decode::PageEnvelope;

fn page(json: &str) -> PageEnvelope {
    PageEnvelope::parse(json).unwrap()
}

#[test]
fn test_link_paginator_continue() {
    let paginator = LinkPaginator::default();
    let mut state = PaginationState::new();

    let next = paginator
        .process_page(
            &page(r#"{"data":[{"id":1},{"id":2}],"links":{"next":"https://x.test/p2"}}"#),
            &mut state,
        )
        .unwrap();

    assert_eq!(next, NextPage::with_url("https://x.test/p2"));
    assert_eq!(state.pages, 1);
    assert_eq!(state.total_fetched, 2);
}

#[test]
fn test_link_paginator_done_when_next_missing() {
    let paginator = LinkPaginator::default();
    let mut state = PaginationState::new();

    let next = paginator
        .process_page(&page(r#"{"data":[{"id":3}],"links":{}}"#), &mut state)
        .unwrap();

    assert_eq!(next, NextPage::Done);
    assert_eq!(state.pages, 1);
}

#[test]
fn test_link_paginator_done_when_next_null() {
    let paginator = LinkPaginator::default();
    let mut state = PaginationState::new();

    let next = paginator
        .process_page(&page(r#"{"data":[],"links":{"next":null}}"#), &mut state)
        .unwrap();

    assert_eq!(next, NextPage::Done);
    assert_eq!(state.total_fetched, 0);
}

#[test]
fn test_link_paginator_accumulates_across_pages() {
    let paginator = LinkPaginator::default();
    let mut state = PaginationState::new();

    paginator
        .process_page(&page(r#"{"data":[{},{}],"links":{"next":"u2"}}"#), &mut state)
        .unwrap();
    paginator
        .process_page(&page(r#"{"data":[{}],"links":{}}"#), &mut state)
        .unwrap();

    assert_eq!(state.pages, 2);
    assert_eq!(state.total_fetched, 3);
}

#[test]
fn test_link_paginator_custom_rel() {
    let paginator = LinkPaginator::new("more");
    let mut state = PaginationState::new();

    let next = paginator
        .process_page(
            &page(r#"{"data":[],"links":{"next":"ignored","more":"u2"}}"#),
            &mut state,
        )
        .unwrap();

    assert_eq!(next, NextPage::with_url("u2"));
}

#[test]
fn test_link_paginator_bad_link_is_error() {
    let paginator = LinkPaginator::default();
    let mut state = PaginationState::new();

    assert!(paginator
        .process_page(&page(r#"{"data":[],"links":{"next":[1]}}"#), &mut state)
        .is_err());
}
