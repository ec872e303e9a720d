//! Implements a struct that holds the state of the web server.

use std::path::{Path, PathBuf};

use axum::extract::FromRef;

use crate::{Error, api::LedgerClient};

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The client for the ledger API that owns all transaction data.
    pub ledger_client: LedgerClient,

    /// The directory that static files are served from.
    pub static_dir: PathBuf,
}

impl AppState {
    /// Create a new [AppState] that talks to the ledger API at `api_url`.
    ///
    /// # Errors
    /// Returns an error if `api_url` is not a valid URL or the HTTP client
    /// cannot be created.
    pub fn new(api_url: &str, static_dir: &Path) -> Result<Self, Error> {
        Ok(Self {
            ledger_client: LedgerClient::new(api_url)?,
            static_dir: static_dir.to_owned(),
        })
    }
}

impl FromRef<AppState> for LedgerClient {
    fn from_ref(state: &AppState) -> Self {
        state.ledger_client.clone()
    }
}
