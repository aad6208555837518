use yearlist::paging::{Walk, walk};
use yearlist::types::{Playlist, PlaylistsPage};

// Helper function to create a well-formed page
fn page(ids: &[&str], next: Option<&str>) -> PlaylistsPage {
    PlaylistsPage {
        items: Some(
            ids.iter()
                .map(|id| Playlist {
                    id: id.to_string(),
                    name: format!("Playlist {}", id),
                })
                .collect(),
        ),
        next: next.map(str::to_string),
    }
}

// Helper function to create a page missing its items field
fn malformed_page(next: Option<&str>) -> PlaylistsPage {
    PlaylistsPage {
        items: None,
        next: next.map(str::to_string),
    }
}

async fn no_fetch(_url: String) -> Result<PlaylistsPage, reqwest::Error> {
    unreachable!("pagination must not fetch when no next page is signalled")
}

// Produces a real reqwest error without touching the network: an URL
// without a host fails at request build time.
async fn failing_fetch(_url: String) -> Result<PlaylistsPage, reqwest::Error> {
    Err(reqwest::Client::new()
        .get("http://")
        .send()
        .await
        .unwrap_err())
}

fn ids(items: &[Playlist]) -> Vec<&str> {
    items.iter().map(|p| p.id.as_str()).collect()
}

#[tokio::test]
async fn test_walk_single_page() {
    let result = walk(page(&["a", "b"], None), no_fetch).await;

    match result {
        Walk::Ok(items) => assert_eq!(ids(&items), vec!["a", "b"]),
        other => panic!("expected items, got {:?}", other),
    }
}

#[tokio::test]
async fn test_walk_drains_all_pages_in_order() {
    // served via pop, so the vector holds the later page first
    let mut remaining = vec![page(&["d"], None), page(&["b", "c"], Some("page-3"))];

    let result = walk(page(&["a"], Some("page-2")), move |_url| {
        let next = remaining.pop();
        async move { Ok(next.expect("fetched past the last page")) }
    })
    .await;

    match result {
        Walk::Ok(items) => assert_eq!(ids(&items), vec!["a", "b", "c", "d"]),
        other => panic!("expected items, got {:?}", other),
    }
}

#[tokio::test]
async fn test_walk_flags_malformed_first_page() {
    // a first page without items is unusable, even if it claims a next page
    let result = walk(malformed_page(Some("page-2")), no_fetch).await;

    assert!(matches!(result, Walk::Malformed));
}

#[tokio::test]
async fn test_walk_keeps_collected_items_when_later_page_is_malformed() {
    let mut remaining = vec![malformed_page(None)];

    let result = walk(page(&["a", "b"], Some("page-2")), move |_url| {
        let next = remaining.pop();
        async move { Ok(next.expect("fetched past the last page")) }
    })
    .await;

    match result {
        Walk::Ok(items) => assert_eq!(ids(&items), vec!["a", "b"]),
        other => panic!("expected items, got {:?}", other),
    }
}

#[tokio::test]
async fn test_walk_keeps_collected_items_when_next_fetch_fails() {
    let result = walk(page(&["a"], Some("page-2")), failing_fetch).await;

    match result {
        Walk::Ok(items) => assert_eq!(ids(&items), vec!["a"]),
        other => panic!("expected items, got {:?}", other),
    }
}

#[tokio::test]
async fn test_walk_reports_empty_result_sets() {
    let result = walk(page(&[], None), no_fetch).await;

    assert!(matches!(result, Walk::Empty));
}

#[tokio::test]
async fn test_walk_reports_empty_across_multiple_pages() {
    let mut remaining = vec![page(&[], None)];

    let result = walk(page(&[], Some("page-2")), move |_url| {
        let next = remaining.pop();
        async move { Ok(next.expect("fetched past the last page")) }
    })
    .await;

    assert!(matches!(result, Walk::Empty));
}
