use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

/// A named playlist as it appears in the user's playlist listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
}

/// One page of the current user's playlists (`GET /me/playlists`).
///
/// `items` is optional on purpose: a malformed reply without the field still
/// deserializes and is classified by the pagination walker instead of
/// failing the whole run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistsPage {
    pub items: Option<Vec<Playlist>>,
    pub next: Option<String>,
}

/// One page of a playlist's entries (`GET /playlists/{id}/tracks`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItemsPage {
    pub items: Option<Vec<PlaylistItem>>,
    pub next: Option<String>,
}

/// A single playlist entry. `track` is null for entries Spotify can no
/// longer resolve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<PlaylistTrack>,
}

/// The raw track object inside a playlist entry.
///
/// `id` and `album` are null for local files, which is why classification
/// treats them as possibly absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrack {
    pub id: Option<String>,
    pub name: String,
    pub uri: String,
    pub album: Option<TrackAlbum>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAlbum {
    pub release_date: Option<String>,
}

/// A track that passed classification: complete enough to be diffed by id
/// and added by URI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksResponse {
    pub snapshot_id: String,
}

/// One row of the end-of-run summary table.
#[derive(Tabled)]
pub struct YearSummaryRow {
    pub year: i32,
    pub playlist: String,
    pub added: usize,
    pub skipped: usize,
    pub created: bool,
}
