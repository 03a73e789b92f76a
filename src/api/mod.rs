//! # API Module
//!
//! HTTP handlers behind the service's router. They fall into two groups that
//! never call each other:
//!
//! - **Items**: [`list_items`], [`create_item`], [`get_item`], [`update_item`]
//!   and [`delete_item`] expose the item store as JSON. A missing item is a 404
//!   with the JSON string `"not found"` as body.
//! - **Login bridge**: [`login`] redirects the browser to Spotify and
//!   [`callback`] trades the returned code for an access token, then redirects
//!   to the frontend with the token in the query string. Any failure answers
//!   with the plain text `Error`.
//!
//! [`index`] serves the static info page and [`health`] reports status and
//! version for monitoring.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use sporlapi::api::{health, login};
//!
//! let app = Router::new()
//!     .route("/login", get(login))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;
mod index;
mod items;
mod login;

pub use callback::callback;
pub use health::health;
pub use index::index;
pub use items::NOT_FOUND;
pub use items::create_item;
pub use items::delete_item;
pub use items::get_item;
pub use items::list_items;
pub use items::update_item;
pub use login::LOGIN_FAILED;
pub use login::login;
