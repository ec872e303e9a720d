//! Refreshing the transaction list and balance.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    alert::Alert,
    api::LedgerClient,
    balance::refresh_balance,
    page_update::PageUpdate,
    transaction::TransactionList,
};

/// Fetch the transactions and then the balance.
///
/// The balance is only fetched once the list request got an answer from the
/// ledger API. If the list cannot be fetched the table is left as it is and
/// the generic error alert is shown.
pub async fn refresh_transactions(client: &LedgerClient) -> PageUpdate {
    match client.list_transactions().await {
        Ok(response) => PageUpdate::new()
            .transactions(TransactionList::from(response))
            .balance(refresh_balance(client).await),
        Err(error) => {
            tracing::error!("Could not refresh the transaction list: {error}");
            PageUpdate::new().alert(Alert::something_went_wrong())
        }
    }
}

/// A route handler that re-renders the transaction table and balance.
pub async fn get_transaction_list(State(client): State<LedgerClient>) -> Response {
    refresh_transactions(&client).await.into_response()
}
