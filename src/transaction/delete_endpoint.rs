//! Deleting transactions.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    alert::Alert,
    api::{LedgerClient, TransactionId},
    page_update::PageUpdate,
    transaction::refresh_transactions,
};

/// A route handler for deleting a transaction from the edit modal.
///
/// The list and balance are refreshed afterwards whether or not the delete
/// worked, so the page always shows what the ledger API currently holds.
pub async fn delete_transaction_endpoint(
    State(client): State<LedgerClient>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let update = match client.delete_transaction(transaction_id).await {
        Ok(response) => match response.message.filter(|message| !message.is_empty()) {
            Some(message) if response.success => PageUpdate::new()
                .close_modal()
                .alert(Alert::Success { message }),
            Some(message) => PageUpdate::new().close_modal().alert(Alert::Error {
                message: "Could not delete transaction".to_owned(),
                details: message,
            }),
            None => PageUpdate::new(),
        },
        Err(error) => {
            tracing::error!("Could not delete transaction {transaction_id}: {error}");
            PageUpdate::new()
                .close_modal()
                .alert(Alert::something_went_wrong())
        }
    };

    update
        .merge(refresh_transactions(&client).await)
        .into_response()
}
