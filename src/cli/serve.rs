use std::net::{IpAddr, SocketAddr};

use crate::{
    config, error, info,
    management::ItemManager,
    server::{AppState, start_api_server},
    types::AuthConfig,
    warning,
};

/// Starts the HTTP API.
///
/// Seeds the store with `seed` generated items (or the configured default),
/// binds exactly one listener on `port` (or `PORT`, default 4000) and serves
/// until the process is stopped. With `open` set, the info page is opened in
/// the default browser once the address is known.
pub async fn serve(port: Option<u16>, seed: Option<usize>, open: bool) {
    let port = port.unwrap_or_else(config::port);
    let host = config::host();
    let ip: IpAddr = match host.parse() {
        Ok(ip) => ip,
        Err(e) => error!("Failed to parse host {}: {}", host, e),
    };
    let addr = SocketAddr::new(ip, port);

    let seed = seed.unwrap_or_else(config::seed_items);
    let items = ItemManager::seeded(seed).into_shared();
    info!("Seeded {} demo items", seed);

    let auth = AuthConfig::from_env();
    if auth.client_id.is_empty() || auth.client_secret.is_empty() {
        warning!("Spotify client credentials are not set, /callback will answer Error");
    }

    if open {
        let url = format!("http://localhost:{}/", port);
        if webbrowser::open(&url).is_err() {
            warning!(
                "Failed to open browser. Please navigate to the following URL manually:\n{}",
                url
            )
        }
    }

    start_api_server(addr, AppState::new(items, auth)).await;
}
