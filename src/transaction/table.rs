//! The transaction table.
//!
//! The table is always rendered whole from the latest list response. Each row
//! carries its own request for the edit modal, so there are no event handlers
//! to re-attach after a refresh.

use maud::{Markup, html};

use crate::{
    api::{ApiResponse, Transaction, TransactionData},
    endpoints::{self, format_endpoint},
    html::{TABLE_CONTAINER_STYLE, TABLE_ROW_STYLE, TABLE_STYLE, format_signed_amount},
};

/// The placeholder shown instead of rows when there are no transactions.
pub const NO_TRANSACTIONS_TEXT: &str = "No transactions right now...";

/// The transactions to show in the table.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionList {
    /// The transactions in the order the ledger API listed them.
    Loaded(Vec<Transaction>),
    /// The ledger API reported a failure, show an empty table.
    Unavailable,
}

impl From<ApiResponse<TransactionData>> for TransactionList {
    fn from(response: ApiResponse<TransactionData>) -> Self {
        if !response.success {
            return TransactionList::Unavailable;
        }

        match response.data {
            Some(TransactionData::Many(transactions)) => TransactionList::Loaded(transactions),
            Some(TransactionData::One(transaction)) => {
                tracing::warn!("Expected a list of transactions but got a single transaction");
                TransactionList::Loaded(vec![transaction])
            }
            None => {
                tracing::warn!("The transaction list response had no data");
                TransactionList::Unavailable
            }
        }
    }
}

impl TransactionList {
    /// Render the contents of the transactions container.
    pub fn to_html(&self) -> Markup {
        let (transactions, show_placeholder): (&[Transaction], bool) = match self {
            TransactionList::Loaded(transactions) => (transactions, transactions.is_empty()),
            TransactionList::Unavailable => (&[], false),
        };

        html! {
            div class=(TABLE_CONTAINER_STYLE)
            {
                table class=(TABLE_STYLE)
                {
                    thead
                    {
                        tr
                        {
                            th scope="col" { "Amount" }
                            th scope="col" { "Description" }
                            th scope="col" { "Date" }
                            th scope="col" { "Type" }
                        }
                    }

                    tbody id="transaction-list"
                    {
                        @for transaction in transactions {
                            (transaction_row(transaction))
                        }
                    }
                }

                @if show_placeholder {
                    p id="no-transactions" { (NO_TRANSACTIONS_TEXT) }
                }
            }
        }
    }
}

fn transaction_row(transaction: &Transaction) -> Markup {
    let edit_url = format_endpoint(endpoints::EDIT_TRANSACTION, transaction.id);
    let transaction_type = transaction.transaction_type.as_str();

    html! {
        tr
            class=(TABLE_ROW_STYLE)
            hx-get=(edit_url)
            hx-swap="none"
            data-transaction-id=(transaction.id)
        {
            td hidden class="transaction-id" { (transaction.id) }
            td class="transaction-amount"
            {
                (format_signed_amount(transaction.transaction_type, transaction.amount))
            }
            td class="transaction-description" { (transaction.description) }
            td class="transaction-date" { (transaction.date) }
            td
            {
                small class={ (transaction_type) "-pill" } { (transaction_type) }
            }
        }
    }
}
