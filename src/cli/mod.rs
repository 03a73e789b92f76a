//! # CLI Module
//!
//! Command implementations behind the `sporlapi` binary. The binary parses
//! arguments and hands over to the functions here, which wire configuration,
//! the item store and the HTTP server together.
//!
//! ## Commands
//!
//! - [`serve`] - Seeds the item store and serves the HTTP API on one port
//!
//! ## Configuration Precedence
//!
//! Command-line flags win over environment variables, which win over the
//! defaults in [`crate::config`].

mod serve;

pub use serve::serve;
