//! The index page: the balance, the transaction table and the containers the
//! modals and alerts are swapped into.

use axum::extract::State;
use maud::{Markup, html};

use crate::{
    api::LedgerClient,
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, PAGE_CONTAINER_STYLE, base},
    page_update::{
        ALERT_CONTAINER_ID, BALANCE_ID, MODAL_CONTAINER_ID, PageUpdate, TRANSACTIONS_CONTAINER_ID,
        region,
    },
    transaction::refresh_transactions,
};

/// Render the index page with the current transactions and balance.
///
/// The data is fetched the same way the refresh fragment fetches it. If the
/// ledger API cannot be reached the page is still rendered, with an empty
/// transaction container and the error alert.
pub async fn get_index_page(State(client): State<LedgerClient>) -> Markup {
    index_view(refresh_transactions(&client).await)
}

fn index_view(update: PageUpdate) -> Markup {
    let transactions = update
        .transaction_list()
        .map(|transactions| transactions.to_html())
        .unwrap_or_else(|| html! {});
    let balance = update.balance_text().unwrap_or_default();
    let alerts = update.alerts().to_vec();

    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            header class="page-header"
            {
                h1 { "Transactions" }

                p class="balance"
                {
                    "Balance: "
                    span id=(BALANCE_ID) { (balance) }
                }
            }

            section class="toolbar"
            {
                button
                    id="create-transaction-button"
                    type="button"
                    class=(BUTTON_PRIMARY_STYLE)
                    hx-get=(endpoints::NEW_TRANSACTION)
                    hx-swap="none"
                {
                    "Create transaction"
                }

                button
                    id="refresh-transactions-button"
                    type="button"
                    class=(BUTTON_SECONDARY_STYLE)
                    hx-get=(endpoints::TRANSACTIONS_LIST)
                    hx-swap="none"
                {
                    "Refresh"
                }
            }

            (region(TRANSACTIONS_CONTAINER_ID, false, transactions))
        }

        (region(MODAL_CONTAINER_ID, false, html! {}))

        (region(ALERT_CONTAINER_ID, false, html! {
            @for alert in alerts {
                (alert.into_html())
            }
        }))
    };

    base("Transactions", &content)
}
