//! # API Module
//!
//! HTTP endpoints for the local callback server that backs the OAuth
//! authentication flow.
//!
//! ## Endpoints
//!
//! - [`callback`] - Handles OAuth callback requests from Spotify's
//!   authorization server. Completes the PKCE flow by exchanging the
//!   authorization code for an access token and handing it back to the
//!   waiting auth command through the shared state.
//! - [`health`] - Health check endpoint returning application status and
//!   version, useful when the redirect URI is probed during setup.
//!
//! The module is built on [Axum](https://docs.rs/axum); each endpoint is an
//! async handler wired up by [`crate::server::start_api_server`]. The server
//! only runs for the duration of the `auth` subcommand.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
