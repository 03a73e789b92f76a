use std::{net::SocketAddr, sync::Arc};

use axum::{Router, routing::get};
use reqwest::Client;
use tower_http::cors::{Any, CorsLayer};

use crate::{api, error, management::SharedItemStore, success, types::AuthConfig};

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub items: SharedItemStore,
    pub auth: Arc<AuthConfig>,
    pub http: Client,
}

impl AppState {
    pub fn new(items: SharedItemStore, auth: AuthConfig) -> Self {
        Self {
            items,
            auth: Arc::new(auth),
            http: Client::new(),
        }
    }
}

/// Builds the router with every route, permissive CORS and the shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(api::index))
        .route("/health", get(api::health))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/items", get(api::list_items).post(api::create_item))
        .route(
            "/items/{id}",
            get(api::get_item)
                .delete(api::delete_item)
                .patch(api::update_item),
        )
        .layer(cors)
        .with_state(state)
}

/// Binds a single listener on `addr` and serves until the process ends.
pub async fn start_api_server(addr: SocketAddr, state: AppState) {
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    success!("Server is listening on port {}", addr.port());

    if let Err(e) = axum::serve(listener, router(state)).await {
        error!("Server stopped: {}", e);
    }
}
