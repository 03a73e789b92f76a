use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Client supplied attributes of an item. The schema is open.
pub type ItemFields = Map<String, Value>;

/// A stored item: a store-assigned identifier plus arbitrary attributes.
///
/// The attributes are flattened next to `id` when serialized, so an item with
/// `{"title": "A"}` renders as `{"id": 1, "title": "A"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    #[serde(flatten)]
    pub fields: ItemFields,
}

/// Settings for the Spotify login bridge.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scope: String,
    pub auth_url: String,
    pub token_url: String,
    pub frontend_uri: String,
}

/// Parameters of a single login redirect.
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    pub client_id: String,
    pub scope: String,
    pub redirect_uri: String,
}

/// One authorization code on its way to becoming an access token.
#[derive(Debug, Clone)]
pub struct TokenExchange {
    pub code: String,
    pub redirect_uri: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
}
