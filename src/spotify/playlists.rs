use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    config,
    types::{
        AddTracksRequest, AddTracksResponse, CreatePlaylistRequest, CreatePlaylistResponse,
        CurrentUser, PlaylistItemsPage, PlaylistsPage,
    },
};

/// Retrieves the first page of the authenticated user's playlists.
///
/// Fetches up to 50 playlists per page from the Spotify Web API. The reply
/// is decoded into a [`PlaylistsPage`] whose `next` field carries the URL of
/// the following page; callers drain the full listing through
/// [`crate::paging::walk`] with [`next_page`] as the fetcher.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(PlaylistsPage)` - One page of playlists plus the next-page URL
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
///
/// # Example
///
/// ```
/// let page = current_user_playlists(&token).await?;
/// for playlist in page.items.iter().flatten() {
///     println!("{}", playlist.name);
/// }
/// ```
pub async fn current_user_playlists(token: &str) -> Result<PlaylistsPage, reqwest::Error> {
    let api_url = format!(
        "{uri}/me/playlists?limit={limit}",
        uri = &config::spotify_apiurl(),
        limit = 50
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<PlaylistsPage>().await
}

/// Retrieves the first page of a playlist's track entries.
///
/// Uses `additional_types=track` so episode entries do not widen the reply
/// shape. Pagination works the same way as for [`current_user_playlists`]:
/// the page's `next` URL is followed by the pagination walker.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `playlist_id` - Spotify ID of the playlist to read
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(PlaylistItemsPage)` - One page of entries plus the next-page URL
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
pub async fn playlist_items(
    token: &str,
    playlist_id: &str,
) -> Result<PlaylistItemsPage, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks?additional_types=track&limit={limit}",
        uri = &config::spotify_apiurl(),
        id = playlist_id,
        limit = 50
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<PlaylistItemsPage>().await
}

/// Fetches a `next` page URL as returned inside a previous page.
///
/// Spotify embeds fully qualified URLs in the `next` field, so this function
/// takes the URL verbatim and only adds authentication.
pub async fn next_page<P: DeserializeOwned>(token: &str, url: String) -> Result<P, reqwest::Error> {
    let client = Client::new();
    let response = client
        .get(&url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<P>().await
}

/// Resolves the authenticated user's profile.
///
/// Only the user id is decoded; it is required for playlist creation, which
/// is scoped to a user.
pub async fn current_user(token: &str) -> Result<CurrentUser, reqwest::Error> {
    let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<CurrentUser>().await
}

/// Creates a public playlist for the given user.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `user_id` - Owner of the new playlist, from [`current_user`]
/// * `name` - Display name, rendered from the yearly naming template
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(CreatePlaylistResponse)` - Id and name of the created playlist
/// - `Err(reqwest::Error)` - Network error, API error, or a reply without
///   the created playlist's id
///
/// # Example
///
/// ```
/// let user = current_user(&token).await?;
/// let created = create(&token, &user.id, "Best of 2001").await?;
/// println!("created {}", created.id);
/// ```
pub async fn create(
    token: &str,
    user_id: &str,
    name: &str,
) -> Result<CreatePlaylistResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = &config::spotify_apiurl(),
        user_id = user_id
    );

    let request = CreatePlaylistRequest {
        name: name.to_string(),
        public: true,
    };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&request)
        .send()
        .await?
        .error_for_status()?;

    response.json::<CreatePlaylistResponse>().await
}

/// Adds tracks to a playlist by URI.
///
/// The API accepts at most 100 URIs per request; callers chunk accordingly.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `playlist_id` - Playlist to append to
/// * `uris` - Track URIs in the order they should be appended
pub async fn add_tracks(
    token: &str,
    playlist_id: &str,
    uris: Vec<String>,
) -> Result<AddTracksResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    let request = AddTracksRequest { uris };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&request)
        .send()
        .await?
        .error_for_status()?;

    response.json::<AddTracksResponse>().await
}
