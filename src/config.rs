//! Configuration management for the yearly playlist organizer.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including Spotify API credentials, server
//! settings, and the organizer options (source playlists, target years and
//! the yearly playlist naming template).
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)
//!
//! The organizer options are collected once at startup into an
//! [`OrganizerConfig`] that is passed by reference into the organize pass, so
//! the classification and reconciliation logic never reads the environment
//! itself.

use std::{
    collections::BTreeSet,
    env,
    path::PathBuf,
};

/// Options of a single organize pass.
///
/// Built once with [`OrganizerConfig::from_env`] and handed by reference to
/// the CLI layer and the reconciler.
#[derive(Debug, Clone)]
pub struct OrganizerConfig {
    /// Names of the playlists whose tracks get sorted into yearly playlists.
    pub source_playlists: Vec<String>,
    /// Release years to organize; iterates in increasing order.
    pub years: BTreeSet<i32>,
    /// Prefix of the yearly playlist naming template.
    pub playlist_prefix: String,
    /// Suffix of the yearly playlist naming template.
    pub playlist_suffix: String,
}

impl OrganizerConfig {
    /// Collects the organizer options from the environment.
    ///
    /// Reads `SOURCE_PLAYLIST_NAMES` and `YEARS` (JSON arrays) and the
    /// optional `YEARLY_PLAYLIST_NAME_PREFIX` / `YEARLY_PLAYLIST_NAME_SUFFIX`
    /// strings. Missing list variables default to empty lists.
    ///
    /// # Errors
    ///
    /// Returns an error string when one of the list variables is present but
    /// not valid JSON of the expected shape.
    pub fn from_env() -> Result<Self, String> {
        let source_playlists = match env::var("SOURCE_PLAYLIST_NAMES") {
            Ok(raw) => parse_playlist_names(&raw)?,
            Err(_) => Vec::new(),
        };

        let years = match env::var("YEARS") {
            Ok(raw) => parse_years(&raw)?,
            Err(_) => BTreeSet::new(),
        };

        Ok(Self {
            source_playlists,
            years,
            playlist_prefix: env::var("YEARLY_PLAYLIST_NAME_PREFIX").unwrap_or_default(),
            playlist_suffix: env::var("YEARLY_PLAYLIST_NAME_SUFFIX").unwrap_or_default(),
        })
    }

    /// Renders the yearly playlist name for `year` from the configured
    /// prefix and suffix.
    pub fn yearly_playlist_name(&self, year: i32) -> String {
        format!(
            "{prefix}{year}{suffix}",
            prefix = self.playlist_prefix,
            year = year,
            suffix = self.playlist_suffix
        )
    }
}

/// Parses the `SOURCE_PLAYLIST_NAMES` JSON array.
pub fn parse_playlist_names(raw: &str) -> Result<Vec<String>, String> {
    serde_json::from_str::<Vec<String>>(raw)
        .map_err(|e| format!("SOURCE_PLAYLIST_NAMES is not a JSON array of strings: {}", e))
}

/// Parses the `YEARS` JSON array into an ordered year set.
pub fn parse_years(raw: &str) -> Result<BTreeSet<i32>, String> {
    let years: Vec<i32> = serde_json::from_str(raw)
        .map_err(|e| format!("YEARS is not a JSON array of integers: {}", e))?;
    Ok(years.into_iter().collect())
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `yearlist/.env`. This allows users to store
/// configuration securely without hardcoding sensitive values. A missing
/// `.env` file is not an error: all values may also come from the process
/// environment, e.g. in scheduled runs.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/yearlist/.env`
/// - macOS: `~/Library/Application Support/yearlist/.env`
/// - Windows: `%LOCALAPPDATA%/yearlist/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment is ready to use, or an error string
/// if the directory cannot be created.
///
/// # Example
///
/// ```
/// use yearlist::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("yearlist/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the server address for the local OAuth callback server.
///
/// Retrieves the `SERVER_ADDRESS` environment variable which specifies
/// the address and port where the local HTTP server should bind for
/// handling OAuth callbacks during the authentication flow.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:8080"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable which
/// contains the client ID obtained when registering the application with
/// Spotify's developer platform.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable is not set.
///
/// # Example
///
/// ```
/// let client_id = spotify_client_id(); // e.g., "abc123..."
/// ```
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").expect("SPOTIFY_API_AUTH_CLIENT_ID must be set")
}

/// Returns the Spotify OAuth redirect URI.
///
/// Retrieves the `SPOTIFY_API_REDIRECT_URI` environment variable which specifies
/// the callback URL that Spotify should redirect to after user authorization.
/// This must match the redirect URI registered in the Spotify application settings.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_REDIRECT_URI` environment variable is not set.
///
/// # Example
///
/// ```
/// let redirect_uri = spotify_redirect_uri(); // e.g., "http://localhost:8080/callback"
/// ```
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_API_REDIRECT_URI").expect("SPOTIFY_API_REDIRECT_URI must be set")
}

/// Returns the Spotify API scope permissions.
///
/// Retrieves the `SPOTIFY_API_AUTH_SCOPE` environment variable which defines
/// the scope of permissions requested during OAuth authentication. The
/// organizer needs at least `playlist-modify-public` to create and extend
/// yearly playlists.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_SCOPE` environment variable is not set.
///
/// # Example
///
/// ```
/// let scope = spotify_scope(); // e.g., "playlist-read-private playlist-modify-public"
/// ```
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_API_AUTH_SCOPE").expect("SPOTIFY_API_AUTH_SCOPE must be set")
}

/// Returns the Spotify OAuth authorization URL.
///
/// Retrieves the `SPOTIFY_API_AUTH_URL` environment variable which contains
/// the base URL for Spotify's OAuth authorization endpoint. This is where
/// users are redirected to grant permissions to the application.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let auth_url = spotify_apiauth_url(); // e.g., "https://accounts.spotify.com/authorize"
/// ```
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL").expect("SPOTIFY_API_AUTH_URL must be set")
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable which contains the
/// base URL for Spotify's Web API endpoints. This is used for all API
/// operations after authentication.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Retrieves the `SPOTIFY_API_TOKEN_URL` environment variable which contains
/// the URL for exchanging authorization codes for access tokens during the
/// OAuth flow. This is used in the final step of authentication.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_TOKEN_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let token_url = spotify_apitoken_url(); // e.g., "https://accounts.spotify.com/api/token"
/// ```
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").expect("SPOTIFY_API_TOKEN_URL must be set")
}
