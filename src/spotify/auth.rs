use std::fmt;

use reqwest::{Client, StatusCode, header::AUTHORIZATION};

use crate::{
    types::{AuthConfig, AuthorizationRequest, TokenExchange, TokenResponse},
    utils,
};

/// Reasons a login callback cannot produce an access token.
#[derive(Debug)]
pub enum AuthError {
    /// The token endpoint could not be reached or its body could not be read.
    Transport(reqwest::Error),
    /// The token endpoint answered with something other than 200.
    Status(StatusCode),
    /// A 200 answer that carried no `access_token`.
    MissingToken,
    /// Spotify redirected back with an `error` instead of a code.
    Provider(String),
    /// The callback carried neither a code nor an error.
    MissingCode,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Transport(e) => write!(f, "token request failed: {}", e),
            AuthError::Status(status) => write!(f, "token endpoint answered {}", status),
            AuthError::MissingToken => write!(f, "token response has no access_token"),
            AuthError::Provider(reason) => write!(f, "authorization denied: {}", reason),
            AuthError::MissingCode => write!(f, "callback without authorization code"),
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuthError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        AuthError::Transport(err)
    }
}

/// Collects the parameters of a login redirect from the bridge settings.
pub fn authorization_request(config: &AuthConfig) -> AuthorizationRequest {
    AuthorizationRequest {
        client_id: config.client_id.clone(),
        scope: config.scope.clone(),
        redirect_uri: config.redirect_uri.clone(),
    }
}

/// Builds the Spotify authorize URL the browser is sent to.
///
/// Parameters are emitted in the order `response_type`, `client_id`, `scope`,
/// `redirect_uri`, percent-encoded with `%20` for spaces:
///
/// ```text
/// https://accounts.spotify.com/authorize?response_type=code&client_id=abc&scope=user-read-private%20user-read-email&redirect_uri=http%3A%2F%2Flocalhost%3A888%2Fcallback
/// ```
pub fn authorize_url(auth_url: &str, request: &AuthorizationRequest) -> String {
    let query = utils::encode_query(&[
        ("response_type", "code"),
        ("client_id", request.client_id.as_str()),
        ("scope", request.scope.as_str()),
        ("redirect_uri", request.redirect_uri.as_str()),
    ]);
    utils::append_query(auth_url, &query)
}

/// Pairs an authorization code with the redirect URI used at login.
///
/// Spotify only accepts the exchange when `redirect_uri` matches the one the
/// code was issued for.
pub fn token_exchange(config: &AuthConfig, code: &str) -> TokenExchange {
    TokenExchange {
        code: code.to_string(),
        redirect_uri: config.redirect_uri.clone(),
    }
}

/// Exchanges an authorization code for an access token.
///
/// Posts the code to the token endpoint, authenticating with
/// `Basic base64(client_id:client_secret)`. Only a 200 answer carrying an
/// `access_token` counts as success. The call is awaited, so other requests
/// keep being served while it is in flight.
///
/// # Errors
///
/// - [`AuthError::Transport`] on network failures or an unreadable body
/// - [`AuthError::Status`] for any non-200 answer
/// - [`AuthError::MissingToken`] when the body lacks `access_token`
pub async fn exchange_code(
    client: &Client,
    config: &AuthConfig,
    exchange: &TokenExchange,
) -> Result<String, AuthError> {
    let res = client
        .post(&config.token_url)
        .header(
            AUTHORIZATION,
            utils::basic_auth_header(&config.client_id, &config.client_secret),
        )
        .form(&[
            ("code", exchange.code.as_str()),
            ("redirect_uri", exchange.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ])
        .send()
        .await?;

    if res.status() != StatusCode::OK {
        return Err(AuthError::Status(res.status()));
    }

    let token: TokenResponse = res.json().await?;
    match token.access_token {
        Some(access_token) if !access_token.is_empty() => Ok(access_token),
        _ => Err(AuthError::MissingToken),
    }
}
