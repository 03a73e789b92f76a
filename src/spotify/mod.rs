//! # Spotify Integration Module
//!
//! Server side of the Spotify OAuth 2.0 authorization-code flow. The service
//! never stores tokens: it builds the authorize redirect, trades the returned
//! code for an access token and hands that token back to the browser.
//!
//! ## Flow
//!
//! ```text
//! Browser ── GET /login ──────────────▶ authorize_url()  ── 302 ──▶ Spotify
//! Spotify ── GET /callback?code=… ───▶ exchange_code()  ── POST ─▶ token endpoint
//!                                       └── 302 FRONTEND_URI?access_token=…
//! ```
//!
//! No state is kept between the two legs. Spotify tracks the pending
//! authorization; this module only sees one request at a time.
//!
//! ## Failure Handling
//!
//! Every failure of the exchange is reported as an [`AuthError`]. The caller
//! decides how much of it to reveal; the HTTP layer logs it and answers with a
//! generic error. There are no retries and no explicit timeouts.

mod auth;

pub use auth::AuthError;
pub use auth::authorization_request;
pub use auth::authorize_url;
pub use auth::exchange_code;
pub use auth::token_exchange;
