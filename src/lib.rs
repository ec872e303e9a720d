//! Ledger Front is a web front-end for a personal-finance ledger.
//!
//! It renders the transactions and the account balance held by a remote
//! ledger API and lets the user create, edit and delete transactions through
//! modal forms. All persistence lives in the ledger API; this library serves
//! HTML pages and htmx fragments and validates forms before anything is sent.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod api;
mod app_state;
mod balance;
mod config;
mod endpoints;
mod html;
mod logging;
mod not_found;
mod page_update;
mod routing;
mod transaction;
mod validation;

#[cfg(test)]
mod test_utils;

pub use api::{
    Account, ApiError, ApiResponse, LedgerClient, Transaction, TransactionData, TransactionId,
    TransactionPayload, TransactionType, handle_response,
};
pub use app_state::AppState;
pub use config::{Config, DEFAULT_API_URL};
pub use logging::LOG_BODY_LENGTH_LIMIT;
pub use routing::build_router;
pub use validation::{FormValidation, TransactionForm, validate_form};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur while setting up the application.
///
/// Failures talking to the ledger API at runtime are reported with
/// [ApiError] instead, since they are always shown to the user as an alert.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The base URL configured for the ledger API could not be parsed.
    ///
    /// Callers should pass in the offending URL and the parser's error message.
    #[error("invalid ledger API URL \"{0}\": {1}")]
    InvalidApiUrl(String, String),

    /// The HTTP client used to call the ledger API could not be built, e.g.
    /// because the TLS backend failed to initialise.
    #[error("could not create the HTTP client: {0}")]
    HttpClient(String),
}
