//! Opening a transaction for editing and saving the changes.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;

use crate::{
    alert::Alert,
    api::{LedgerClient, Transaction, TransactionData, TransactionId},
    page_update::PageUpdate,
    transaction::{edit_transaction_modal, refresh_transactions},
    validation::TransactionForm,
};

/// A route handler that opens the edit modal for a transaction, pre-filled
/// with the transaction as the ledger API has it.
pub async fn get_edit_transaction_modal(
    State(client): State<LedgerClient>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let response = match client.get_transaction(transaction_id).await {
        Ok(response) => response,
        Err(error) => {
            tracing::error!("Could not get transaction {transaction_id}: {error}");
            return PageUpdate::new()
                .alert(Alert::something_went_wrong())
                .into_response();
        }
    };

    match response.data {
        Some(TransactionData::One(transaction)) => {
            // Updates and deletes go to the transaction that was asked for.
            let transaction = Transaction {
                id: transaction_id,
                ..transaction
            };

            PageUpdate::new()
                .open_modal(edit_transaction_modal(&transaction))
                .into_response()
        }
        other => {
            tracing::warn!(
                "Expected transaction {transaction_id} from the ledger API, got {other:?}"
            );
            PageUpdate::new().into_response()
        }
    }
}

/// A route handler for saving the edit modal's form.
///
/// An invalid form lists the errors and keeps the modal open so the user can
/// fix them.
pub async fn update_transaction_endpoint(
    State(client): State<LedgerClient>,
    Path(transaction_id): Path<TransactionId>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let payload = match form.to_payload() {
        Ok(payload) => payload,
        Err(errors) => {
            return PageUpdate::new()
                .alert(Alert::form_errors(errors))
                .into_response();
        }
    };

    match client.update_transaction(transaction_id, &payload).await {
        Ok(response) if response.success => PageUpdate::new()
            .alert(Alert::Success {
                message: response
                    .message
                    .unwrap_or_else(|| "Transaction updated".to_owned()),
            })
            .close_modal()
            .merge(refresh_transactions(&client).await)
            .into_response(),
        Ok(response) => {
            tracing::info!(
                "The ledger API did not update transaction {transaction_id}: {}",
                response.message.as_deref().unwrap_or("no message")
            );
            PageUpdate::new().into_response()
        }
        Err(error) => {
            tracing::error!("Could not update transaction {transaction_id}: {error}");
            PageUpdate::new()
                .close_modal()
                .alert(Alert::something_went_wrong())
                .into_response()
        }
    }
}
