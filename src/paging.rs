use std::future::Future;

use crate::{
    types::{Playlist, PlaylistItem, PlaylistItemsPage, PlaylistsPage},
    warning,
};

/// A paged Spotify response that can be drained by [`walk`].
///
/// Spotify pages carry their payload in an `items` field and the absolute URL
/// of the following page in `next`. A reply without `items` is malformed and
/// classified by the walker rather than treated as an empty page.
pub trait Paged {
    type Item;

    /// Takes the page's items out, or `None` when the field was absent.
    fn take_items(&mut self) -> Option<Vec<Self::Item>>;

    /// URL of the next page, if the platform signalled one.
    fn next_url(&self) -> Option<String>;
}

impl Paged for PlaylistsPage {
    type Item = Playlist;

    fn take_items(&mut self) -> Option<Vec<Playlist>> {
        self.items.take()
    }

    fn next_url(&self) -> Option<String> {
        self.next.clone()
    }
}

impl Paged for PlaylistItemsPage {
    type Item = PlaylistItem;

    fn take_items(&mut self) -> Option<Vec<PlaylistItem>> {
        self.items.take()
    }

    fn next_url(&self) -> Option<String> {
        self.next.clone()
    }
}

/// Outcome of draining a paged result set.
///
/// The three kinds form the closed set callers pattern-match on: usable
/// items, a well-formed but empty result, or a first page that was missing
/// its `items` field entirely.
#[derive(Debug, Clone, PartialEq)]
pub enum Walk<T> {
    /// At least one item was collected.
    Ok(Vec<T>),
    /// All reachable pages were drained and none carried an item.
    Empty,
    /// The first page had no `items` field; nothing usable was returned.
    Malformed,
}

/// Drains a paginated result set into a single sequence.
///
/// Starts from an already-fetched first page and follows `next` URLs through
/// `fetch_next` until the platform signals the end. A malformed first page
/// yields [`Walk::Malformed`]. A failed or malformed *subsequent* page stops
/// pagination early with a warning but keeps everything collected so far;
/// losing the tail of a large playlist is preferable to losing the run.
///
/// # Example
///
/// ```
/// let first = playlists::current_user_playlists(&token).await?;
/// let all = walk(first, |url| playlists::next_page::<PlaylistsPage>(&token, url)).await;
/// ```
pub async fn walk<P, F, Fut>(mut page: P, mut fetch_next: F) -> Walk<P::Item>
where
    P: Paged,
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<P, reqwest::Error>>,
{
    let Some(mut items) = page.take_items() else {
        return Walk::Malformed;
    };

    while let Some(url) = page.next_url() {
        match fetch_next(url).await {
            Ok(next) => {
                page = next;
                match page.take_items() {
                    Some(more) => items.extend(more),
                    None => {
                        warning!(
                            "Next page came back without items. Continuing with the {} entries fetched so far.",
                            items.len()
                        );
                        break;
                    }
                }
            }
            Err(e) => {
                warning!(
                    "Failed to fetch next page: {}. Continuing with the {} entries fetched so far.",
                    e,
                    items.len()
                );
                break;
            }
        }
    }

    if items.is_empty() {
        Walk::Empty
    } else {
        Walk::Ok(items)
    }
}
