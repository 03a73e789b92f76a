//! Configuration management for the playlist items API.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Every value has a default so the service starts
//! without any configuration at all; the Spotify client credentials default to
//! empty strings, which makes the login bridge fail at the token exchange until
//! they are provided.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults

use std::{env, path::PathBuf};

use crate::types::AuthConfig;

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_SEED_ITEMS: usize = 20;
pub const DEFAULT_FRONTEND_URI: &str = "http://localhost:3000/playlist";
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:888/callback";
pub const DEFAULT_SCOPE: &str = "user-read-private user-read-email user-library-read";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Loads environment variables from `.env` files.
///
/// The working directory is read first, then `sporlapi/.env` inside the
/// platform-specific local data directory. `dotenv` never overwrites a variable
/// that is already set, so the first source wins. Neither file is required.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/sporlapi/.env`
/// - macOS: `~/Library/Application Support/sporlapi/.env`
/// - Windows: `%LOCALAPPDATA%/sporlapi/.env`
///
/// # Errors
///
/// Returns an error string if a file exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    match dotenv::dotenv() {
        Ok(_) => {}
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e.to_string()),
    }

    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sporlapi/.env");
    if async_fs::metadata(&path).await.is_ok() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }

    Ok(())
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Returns the port to listen on.
///
/// Reads `PORT` and falls back to 4000 when it is unset or not a valid port.
pub fn port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Returns the host the listener binds to (`HOST`, default `0.0.0.0`).
pub fn host() -> String {
    var_or("HOST", DEFAULT_HOST)
}

/// Returns how many demo items are generated at startup (`SEED_ITEMS`, default 20).
pub fn seed_items() -> usize {
    env::var("SEED_ITEMS")
        .ok()
        .and_then(|n| n.parse().ok())
        .unwrap_or(DEFAULT_SEED_ITEMS)
}

/// Returns the frontend URL the browser lands on after a successful login.
pub fn frontend_uri() -> String {
    var_or("FRONTEND_URI", DEFAULT_FRONTEND_URI)
}

/// Returns the Spotify API client ID. Empty unless configured.
pub fn spotify_client_id() -> String {
    var_or("SPOTIFY_API_AUTH_CLIENT_ID", "")
}

/// Returns the Spotify API client secret. Empty unless configured.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> String {
    var_or("SPOTIFY_API_AUTH_CLIENT_SECRET", "")
}

/// Returns the callback URI registered with Spotify.
pub fn spotify_redirect_uri() -> String {
    var_or("SPOTIFY_API_REDIRECT_URI", DEFAULT_REDIRECT_URI)
}

/// Returns the space separated scopes requested at login.
pub fn spotify_scope() -> String {
    var_or("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE)
}

/// Returns the Spotify OAuth authorization URL.
pub fn spotify_apiauth_url() -> String {
    var_or("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL)
}

/// Returns the Spotify OAuth token exchange URL.
pub fn spotify_apitoken_url() -> String {
    var_or("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
}

impl AuthConfig {
    /// Collects every login bridge setting from the environment.
    pub fn from_env() -> Self {
        Self {
            client_id: spotify_client_id(),
            client_secret: spotify_client_secret(),
            redirect_uri: spotify_redirect_uri(),
            scope: spotify_scope(),
            auth_url: spotify_apiauth_url(),
            token_url: spotify_apitoken_url(),
            frontend_uri: frontend_uri(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            scope: DEFAULT_SCOPE.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            frontend_uri: DEFAULT_FRONTEND_URI.to_string(),
        }
    }
}
