//! Tests for pager session module

use super::*;
use crate::error::{Error, Result};
use crate::params::ParameterNamespace;
use crate::settings::PagerSettings;
use crate::source::{ContinuationSource, MemorySource, PageFetch};
use crate::tracker::Navigation;
use async_trait::async_trait;
use test_case::test_case;

fn products() -> MemorySource<u32> {
    MemorySource::new((1..=500).collect())
}

fn settings() -> PagerSettings {
    PagerSettings {
        page_size: 25,
        ..PagerSettings::default()
    }
}

/// Query string part of a generated link
fn query_of(link: &str) -> &str {
    link.split_once('?').map_or("", |(_, q)| q)
}

#[tokio::test]
async fn test_first_page() {
    let source = products();
    let session = PagerSession::new(&source, settings()).with_base_url("/products");

    let view = session.handle_query_str("").await.unwrap();
    assert_eq!(view.current_page(), 1);
    assert_eq!(view.items, (1..=25).collect::<Vec<_>>());
    assert_eq!(view.navigation, Navigation::Origin);
    assert!(!view.can_go_back);
    assert!(view.can_go_forward);
    assert!(view.links.first.is_none());
    assert!(view.links.previous.is_none());
    assert!(view
        .links
        .next
        .as_deref()
        .unwrap()
        .starts_with("/products?currentPage=2&pageSize=25&pageToken="));
    assert_eq!(view.token_history.as_deref(), Some("{}"));
}

#[tokio::test]
async fn test_walk_forward_then_back() {
    let source = products();
    let session = PagerSession::new(&source, settings()).with_base_url("/products");

    let page1 = session.handle_query_str("").await.unwrap();
    let page2 = session
        .handle_query_str(query_of(page1.links.next.as_deref().unwrap()))
        .await
        .unwrap();
    assert_eq!(page2.current_page(), 2);
    assert_eq!(page2.items, (26..=50).collect::<Vec<_>>());
    assert_eq!(page2.navigation, Navigation::Forward);
    // Page 1 needs no token, so "Previous" is unavailable; "First" is offered instead
    assert!(!page2.can_go_back);
    assert!(page2.links.first.is_some());

    let page3 = session
        .handle_query_str(query_of(page2.links.next.as_deref().unwrap()))
        .await
        .unwrap();
    assert_eq!(page3.current_page(), 3);
    assert!(page3.can_go_back);
    assert_eq!(page3.previous_token, page1.state.next_token().map(str::to_string));

    let back = session
        .handle_query_str(query_of(page3.links.previous.as_deref().unwrap()))
        .await
        .unwrap();
    assert_eq!(back.current_page(), 2);
    assert_eq!(back.navigation, Navigation::Revisit);
    assert_eq!(back.items, page2.items);
    assert_eq!(back.token_history, page3.token_history);
}

#[tokio::test]
async fn test_walk_to_last_page() {
    let source = MemorySource::new((1..=60).collect::<Vec<u32>>());
    let session = PagerSession::new(&source, settings());

    let mut view = session.handle_query_str("").await.unwrap();
    while let Some(next) = view.links.next.clone() {
        view = session.handle_query_str(query_of(&next)).await.unwrap();
    }

    assert_eq!(view.current_page(), 3);
    assert_eq!(view.items, (51..=60).collect::<Vec<_>>());
    assert!(!view.can_go_forward);
    assert!(!view.state.has_more());
}

#[tokio::test]
async fn test_history_bound_drops_oldest_pages() {
    let source = products();
    let session = PagerSession::new(
        &source,
        PagerSettings {
            page_size: 10,
            max_history_entries: 3,
            ..PagerSettings::default()
        },
    );

    let mut view = session.handle_query_str("").await.unwrap();
    for _ in 0..6 {
        let next = view.links.next.clone().unwrap();
        view = session.handle_query_str(query_of(&next)).await.unwrap();
    }

    assert_eq!(view.current_page(), 7);
    assert!(view.token_history.is_some());
    let query = session.parse_query(query_of(view.links.next.as_deref().unwrap()));
    assert_eq!(
        query.token_history.pages().collect::<Vec<_>>(),
        vec![5, 6, 7]
    );
    assert!(view.can_go_back);
}

#[tokio::test]
async fn test_malformed_history_degrades_to_no_back() {
    let source = products();
    let session = PagerSession::new(&source, settings());
    let token = MemorySource::<u32>::encode_token(50);

    let view = session
        .handle_query_str(&format!(
            "currentPage=3&pageToken={token}&tokenHistory=%7Bnot+valid%7D"
        ))
        .await
        .unwrap();

    assert_eq!(view.current_page(), 3);
    assert_eq!(view.items, (51..=75).collect::<Vec<_>>());
    assert!(!view.can_go_back);
    assert!(view.links.previous.is_none());
    assert!(view.links.first.is_some());
}

#[tokio::test]
async fn test_tokenless_deep_link_serves_origin() {
    let source = products();
    let session = PagerSession::new(&source, settings());

    let view = session.handle_query_str("currentPage=9").await.unwrap();
    assert_eq!(view.current_page(), 1);
    assert_eq!(view.items[0], 1);
    assert_eq!(view.navigation, Navigation::Origin);
}

#[tokio::test]
async fn test_prefixed_session_ignores_other_pager() {
    let source = products();
    let session = PagerSession::new(
        &source,
        PagerSettings {
            page_size: 25,
            parameter_prefix: ParameterNamespace::prefixed("products"),
            ..PagerSettings::default()
        },
    )
    .with_base_url("/dashboard");

    let other_token = MemorySource::<u32>::encode_token(100);
    let view = session
        .handle_query_str(&format!("orders_currentPage=5&orders_pageToken={other_token}"))
        .await
        .unwrap();
    assert_eq!(view.current_page(), 1);

    // The other pager's state rides along on our links
    let next = view.links.next.unwrap();
    assert!(next.starts_with(&format!(
        "/dashboard?orders_currentPage=5&orders_pageToken={}",
        url::form_urlencoded::byte_serialize(other_token.as_bytes()).collect::<String>()
    )));
    assert!(next.contains("products_currentPage=2"));
}

#[tokio::test]
async fn test_page_size_is_clamped() {
    let source = products();
    let session = PagerSession::new(&source, settings());

    let view = session.handle_query_str("pageSize=0").await.unwrap();
    assert_eq!(view.page_size, 1);
    assert_eq!(view.items.len(), 1);

    let view = session.handle_query_str("pageSize=9999").await.unwrap();
    assert_eq!(view.page_size, 100);
}

#[tokio::test]
async fn test_accumulation_disabled() {
    let source = products();
    let session = PagerSession::new(
        &source,
        PagerSettings {
            token_accumulation: false,
            ..settings()
        },
    );

    let view = session.handle_query_str("").await.unwrap();
    assert!(view.token_history.is_none());
    assert!(!view.links.next.unwrap().contains("tokenHistory"));
}

#[tokio::test]
async fn test_invalid_token_propagates() {
    let source = products();
    let session = PagerSession::new(&source, settings());

    let result = session
        .handle_query_str("currentPage=2&pageToken=%25%25")
        .await;
    assert!(matches!(result, Err(Error::InvalidToken { .. })));
}

struct Unavailable;

#[async_trait]
impl ContinuationSource for Unavailable {
    type Item = u32;

    async fn fetch(&self, _page_size: u32, _token: Option<&str>) -> Result<PageFetch<u32>> {
        Err(Error::source("store unavailable"))
    }
}

#[tokio::test]
async fn test_upstream_failure_propagates() {
    let session = PagerSession::new(&Unavailable, PagerSettings::default());
    let err = session.handle_query_str("").await.unwrap_err();
    assert!(err.is_upstream());
}

#[tokio::test]
async fn test_view_serializes() {
    let source = products();
    let session = PagerSession::new(&source, settings());
    let view = session.handle_query_str("").await.unwrap();

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["state"]["currentPage"], 1);
    assert_eq!(json["navigation"], "origin");
    assert_eq!(json["items"].as_array().unwrap().len(), 25);
    assert!(json["links"]["previous"].is_null());
}

#[test_case("4294967294", 4_294_967_294, Some(u32::MAX) ; "one below max")]
#[test_case("4294967295", u32::MAX, None ; "max")]
#[test_case("4294967296", 1, Some(2) ; "past max")]
#[tokio::test]
async fn test_extreme_page_numbers(page: &str, expected: u32, next_page: Option<u32>) {
    let source = products();
    let session = PagerSession::new(&source, settings());
    let token = MemorySource::<u32>::encode_token(25);

    let view = session
        .handle_query_str(&format!("currentPage={page}&pageToken={token}"))
        .await
        .unwrap();
    assert_eq!(view.current_page(), expected);
    assert_eq!(view.can_go_forward, next_page.is_some());

    let next = view
        .links
        .next
        .as_deref()
        .map(|link| session.parse_query(query_of(link)).current_page);
    assert_eq!(next, next_page);
}
