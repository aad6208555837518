//! # CLI Module
//!
//! This module provides the command-line interface layer of the yearly
//! playlist organizer. It implements the user-facing commands and
//! coordinates between the Spotify client, the token cache and the
//! classification and reconciliation logic.
//!
//! ## Commands
//!
//! ### Authentication
//!
//! - [`auth`] - Initiates the Spotify OAuth authentication flow with PKCE
//!   security. Tokens are persisted in the local data directory and
//!   refreshed automatically by later commands.
//!
//! ### Organizing
//!
//! - [`organize`] - Runs one organize pass: resolves the configured source
//!   playlists and existing yearly playlists from the user's playlist
//!   listing, classifies every source track by its release year, and brings
//!   the yearly playlists up to date — appending what is missing, creating
//!   what does not exist yet.
//!
//! ## Data Flow
//!
//! ```text
//! CLI Layer (organize)
//!     ↓
//! Pagination (drain playlist listing and track pages)
//!     ↓
//! Classification (bucket tracks by release year)
//!     ↓
//! Reconciliation (diff buckets against yearly playlists, add/create)
//!     ↓
//! Spotify Web API
//! ```
//!
//! ## Error Handling Philosophy
//!
//! Failures stay as local as possible: a source playlist that cannot be
//! read, or a year whose playlist cannot be created, is reported and
//! skipped while the rest of the pass continues. Only two conditions end
//! the run — a missing token cache (the user never authenticated) and a
//! playlist listing without any usable playlists.

mod auth;
mod organize;

pub use auth::auth;
pub use organize::organize;
