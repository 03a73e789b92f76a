use axum::{
    extract::State,
    http::{HeaderValue, StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};

use crate::{server::AppState, spotify, warning};

/// Body of the 500 answer when the redirect cannot be built.
pub const LOGIN_FAILED: &str = "An error occurred. Check server logs.";

/// Redirects the browser to Spotify's authorize page.
pub async fn login(State(state): State<AppState>) -> Response {
    let request = spotify::authorization_request(&state.auth);
    let url = spotify::authorize_url(&state.auth.auth_url, &request);

    match HeaderValue::from_str(&url) {
        Ok(location) => (StatusCode::FOUND, [(LOCATION, location)]).into_response(),
        Err(e) => {
            warning!("Cannot build login redirect to {}: {}", url, e);
            (StatusCode::INTERNAL_SERVER_ERROR, LOGIN_FAILED).into_response()
        }
    }
}
