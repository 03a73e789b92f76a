use std::{
    env,
    sync::{Mutex, MutexGuard},
};

use sporlapi::config::{self, *};
use sporlapi::types::AuthConfig;

const VARS: &[&str] = &[
    "PORT",
    "HOST",
    "SEED_ITEMS",
    "FRONTEND_URI",
    "SPOTIFY_API_AUTH_CLIENT_ID",
    "SPOTIFY_API_AUTH_CLIENT_SECRET",
    "SPOTIFY_API_REDIRECT_URI",
    "SPOTIFY_API_AUTH_SCOPE",
    "SPOTIFY_API_AUTH_URL",
    "SPOTIFY_API_TOKEN_URL",
];

// Tests in this file share the process environment
static ENV_LOCK: Mutex<()> = Mutex::new(());

// Helper function to take the env lock with every config variable unset
fn clean_env() -> MutexGuard<'static, ()> {
    let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    for var in VARS {
        unsafe { env::remove_var(var) };
    }
    guard
}

fn set(key: &str, value: &str) {
    unsafe { env::set_var(key, value) };
}

#[test]
fn test_listener_defaults() {
    let _guard = clean_env();

    assert_eq!(config::port(), 4000);
    assert_eq!(config::host(), "0.0.0.0");
    assert_eq!(config::seed_items(), 20);
}

#[test]
fn test_invalid_numbers_fall_back() {
    let _guard = clean_env();

    set("PORT", "abc");
    assert_eq!(config::port(), DEFAULT_PORT);

    set("PORT", "70000");
    assert_eq!(config::port(), DEFAULT_PORT);

    set("SEED_ITEMS", "-3");
    assert_eq!(config::seed_items(), DEFAULT_SEED_ITEMS);
}

#[test]
fn test_listener_overrides() {
    let _guard = clean_env();

    set("PORT", "8080");
    set("SEED_ITEMS", "5");
    assert_eq!(config::port(), 8080);
    assert_eq!(config::seed_items(), 5);
}

#[test]
fn test_auth_config_defaults() {
    let _guard = clean_env();

    assert_eq!(config::frontend_uri(), "http://localhost:3000/playlist");

    let auth = AuthConfig::from_env();
    assert_eq!(auth.client_id, "");
    assert_eq!(auth.client_secret, "");
    assert_eq!(auth.redirect_uri, "http://localhost:888/callback");
    assert_eq!(
        auth.scope,
        "user-read-private user-read-email user-library-read"
    );
    assert_eq!(auth.auth_url, "https://accounts.spotify.com/authorize");
    assert_eq!(auth.token_url, "https://accounts.spotify.com/api/token");
    assert_eq!(auth.frontend_uri, DEFAULT_FRONTEND_URI);

    // The env-free default matches an empty environment
    let fallback = AuthConfig::default();
    assert_eq!(fallback.redirect_uri, auth.redirect_uri);
    assert_eq!(fallback.scope, auth.scope);
    assert_eq!(fallback.frontend_uri, auth.frontend_uri);
}

#[test]
fn test_auth_config_overrides() {
    let _guard = clean_env();

    set("FRONTEND_URI", "https://app.example.com/after-login");
    set("SPOTIFY_API_AUTH_CLIENT_ID", "client");
    set("SPOTIFY_API_AUTH_CLIENT_SECRET", "secret");
    set("SPOTIFY_API_TOKEN_URL", "http://127.0.0.1:9/api/token");

    let auth = AuthConfig::from_env();
    assert_eq!(auth.frontend_uri, "https://app.example.com/after-login");
    assert_eq!(auth.client_id, "client");
    assert_eq!(auth.client_secret, "secret");
    assert_eq!(auth.token_url, "http://127.0.0.1:9/api/token");
    assert_eq!(auth.auth_url, DEFAULT_AUTH_URL);
}
