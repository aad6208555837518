//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! yearly playlist organizer. It implements authentication and the playlist
//! operations of the organize pass, handling all HTTP communication, error
//! propagation and typed decoding of API replies.
//!
//! ## Architecture
//!
//! The module follows a feature-based organization where each submodule
//! handles a specific domain of Spotify API functionality:
//!
//! ```text
//! Application Layer (CLI, Reconciler)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE)
//!     └── Playlist Operations (List, Read, Create, Append)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! [`auth`] implements the OAuth 2.0 PKCE (Proof Key for Code Exchange)
//! flow: code verifier/challenge generation, browser launch, the local
//! callback wait, token exchange and refresh. No client secret is stored;
//! PKCE proves possession of the verifier instead.
//!
//! [`playlists`] covers the playlist surface of the organize pass:
//!
//! - `GET /me/playlists` - the user's playlist listing, paginated
//! - `GET /playlists/{id}/tracks` - a playlist's entries, paginated
//! - `GET /me` - the current user, for playlist creation
//! - `POST /users/{user_id}/playlists` - create a yearly playlist
//! - `POST /playlists/{playlist_id}/tracks` - append tracks by URI
//!
//! ## Decoding Strategy
//!
//! Every reply is decoded exactly once, at this boundary, into the explicit
//! types of [`crate::types`]. Fields the platform may omit (`items` on a
//! page, a local file's track `id`, an `album` block) are modeled as
//! `Option` so that malformed or partial data is classified by the callers
//! instead of aborting deserialization of the whole reply. Nothing above
//! this layer ever inspects raw JSON.
//!
//! ## Error Handling
//!
//! Requests return `Result<_, reqwest::Error>` with HTTP error statuses
//! surfaced via `error_for_status`. There is no automatic retry: the
//! organize pass is strictly sequential and treats any failed or malformed
//! reply as terminal for the unit of work it belongs to (one playlist, one
//! year), reporting it and moving on. Token refresh errors surface as
//! authentication failures on the next request.
//!
//! ## Thread Safety
//!
//! The module is designed for async single-threaded use: all operations use
//! async/await for non-blocking I/O and are awaited to completion before the
//! next platform call is issued. Shared state exists only in the auth flow,
//! behind `Arc<Mutex<_>>`.

pub mod auth;
pub mod playlists;
