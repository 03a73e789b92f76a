use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::{HeaderValue, StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};

use crate::{
    server::AppState,
    spotify::{self, AuthError},
    utils, warning,
};

/// Completes the login: trades the code for a token and sends the browser
/// to the frontend with `?access_token=...`. Failures answer `Error`.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<AppState>,
) -> Response {
    match access_token(&params, &state).await {
        Ok(token) => {
            let query = utils::encode_query(&[("access_token", token.as_str())]);
            let target = utils::append_query(&state.auth.frontend_uri, &query);
            match HeaderValue::from_str(&target) {
                Ok(location) => (StatusCode::FOUND, [(LOCATION, location)]).into_response(),
                Err(e) => {
                    warning!("Cannot redirect to frontend {}: {}", state.auth.frontend_uri, e);
                    "Error".into_response()
                }
            }
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            "Error".into_response()
        }
    }
}

async fn access_token(
    params: &HashMap<String, String>,
    state: &AppState,
) -> Result<String, AuthError> {
    if let Some(reason) = params.get("error") {
        return Err(AuthError::Provider(reason.clone()));
    }
    let Some(code) = params.get("code") else {
        return Err(AuthError::MissingCode);
    };

    let exchange = spotify::token_exchange(&state.auth, code);
    spotify::exchange_code(&state.http, &state.auth, &exchange).await
}
