//! Client side of a mailing-list unsubscribe flow.
//!
//! `api_client` talks to the public unsubscribe route, `form` is the
//! component that reacts to a click on the unsubscribe button and renders
//! the outcome on an output sink.

pub mod api_client;
pub mod config;
mod error;
pub mod form;

pub use api_client::PreferencesClient;
pub use error::{Error, Result};
pub use form::UnsubscribeForm;

use tracing_subscriber::EnvFilter;

/// Tracing for local development, verbose and human readable.
pub fn init_dbg_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_target(false)
        .init();
}

/// Tracing for production, terse single-line output without colors.
pub fn init_production_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .compact()
        .init();
}
