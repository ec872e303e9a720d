//! The account balance shown in the page header.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{api::LedgerClient, html::format_balance, page_update::PageUpdate};

/// The outcome of fetching the account balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalanceUpdate {
    /// Replace the balance text with this.
    Display(String),
    /// The API reported a failure, keep whatever is shown.
    Unchanged,
    /// The API could not be reached or sent something unreadable.
    Failed,
}

/// Fetch the account and format its balance.
///
/// The account response is decoded whatever its status code, so a failure
/// envelope from the API leaves the balance as it is instead of raising the
/// generic error alert.
pub async fn refresh_balance(client: &LedgerClient) -> BalanceUpdate {
    match client.get_account().await {
        Ok(response) if response.success => match response.data {
            Some(account) => BalanceUpdate::Display(format_balance(account.account_balance)),
            None => {
                tracing::warn!("The ledger API reported success but sent no account");
                BalanceUpdate::Unchanged
            }
        },
        Ok(response) => {
            tracing::info!(
                "The ledger API could not provide the account: {}",
                response.message.as_deref().unwrap_or("no message")
            );
            BalanceUpdate::Unchanged
        }
        Err(error) => {
            tracing::error!("Could not refresh the balance: {error}");
            BalanceUpdate::Failed
        }
    }
}

/// A route handler that re-renders the balance.
pub async fn get_balance(State(client): State<LedgerClient>) -> Response {
    PageUpdate::new()
        .balance(refresh_balance(&client).await)
        .into_response()
}
