//! Composes the partial page updates sent in response to htmx requests.
//!
//! Every interactive request is answered with a set of out-of-band swaps, one
//! per page region that changes, and the `HX-Reswap: none` header so that the
//! triggering element itself is left alone.

use axum::response::{IntoResponse, Response};
use axum_htmx::{HxReswap, SwapOption};
use maud::{Markup, html};

use crate::{alert::Alert, balance::BalanceUpdate, transaction::TransactionList};

/// The element that holds the transaction table.
pub const TRANSACTIONS_CONTAINER_ID: &str = "transactions";
/// The element that shows the account balance.
pub const BALANCE_ID: &str = "balance";
/// The element that modal dialogs are rendered into.
pub const MODAL_CONTAINER_ID: &str = "modal-container";
/// The element that alerts are rendered into.
pub const ALERT_CONTAINER_ID: &str = "alert-container";

/// Render a page region, marked for an out-of-band swap when `oob` is set.
pub(crate) fn region(id: &str, oob: bool, content: Markup) -> Markup {
    html! {
        @if oob {
            div id=(id) hx-swap-oob="true" { (content) }
        } @else {
            div id=(id) { (content) }
        }
    }
}

/// The modal dialog after a request.
#[derive(Debug, Clone, PartialEq, Default)]
enum ModalUpdate {
    #[default]
    Unchanged,
    Open(Markup),
    Close,
}

/// The set of page regions changed by a request.
///
/// Regions that are not set are not included in the response and keep their
/// current content in the browser.
#[derive(Debug, Clone, Default)]
pub struct PageUpdate {
    alerts: Vec<Alert>,
    transactions: Option<TransactionList>,
    balance: Option<String>,
    modal: ModalUpdate,
}

impl PageUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `alert`. Several alerts are shown in the order they were added.
    pub fn alert(mut self, alert: Alert) -> Self {
        self.alerts.push(alert);
        self
    }

    /// Replace the transaction table.
    pub fn transactions(mut self, transactions: TransactionList) -> Self {
        self.transactions = Some(transactions);
        self
    }

    /// Apply the outcome of a balance refresh.
    ///
    /// A failed refresh adds the generic error alert and leaves the balance as is.
    pub fn balance(mut self, balance: BalanceUpdate) -> Self {
        match balance {
            BalanceUpdate::Display(balance) => self.balance = Some(balance),
            BalanceUpdate::Unchanged => {}
            BalanceUpdate::Failed => self.alerts.push(Alert::something_went_wrong()),
        }
        self
    }

    /// Show `modal` in the modal container.
    pub fn open_modal(mut self, modal: Markup) -> Self {
        self.modal = ModalUpdate::Open(modal);
        self
    }

    /// Empty the modal container.
    pub fn close_modal(mut self) -> Self {
        self.modal = ModalUpdate::Close;
        self
    }

    /// Combine two updates. Regions set in `other` win, alerts are appended.
    pub fn merge(mut self, other: PageUpdate) -> Self {
        self.alerts.extend(other.alerts);

        if other.transactions.is_some() {
            self.transactions = other.transactions;
        }

        if other.balance.is_some() {
            self.balance = other.balance;
        }

        if other.modal != ModalUpdate::Unchanged {
            self.modal = other.modal;
        }

        self
    }

    pub(crate) fn transaction_list(&self) -> Option<&TransactionList> {
        self.transactions.as_ref()
    }

    pub(crate) fn balance_text(&self) -> Option<&str> {
        self.balance.as_deref()
    }

    pub(crate) fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Render the changed regions as out-of-band swaps.
    pub fn into_html(self) -> Markup {
        html! {
            @if let Some(transactions) = &self.transactions {
                (region(TRANSACTIONS_CONTAINER_ID, true, transactions.to_html()))
            }

            @if let Some(balance) = &self.balance {
                span id=(BALANCE_ID) hx-swap-oob="true" { (balance) }
            }

            @match self.modal {
                ModalUpdate::Unchanged => {}
                ModalUpdate::Open(modal) => {
                    (region(MODAL_CONTAINER_ID, true, modal))
                }
                ModalUpdate::Close => {
                    (region(MODAL_CONTAINER_ID, true, html! {}))
                }
            }

            @if !self.alerts.is_empty() {
                (region(ALERT_CONTAINER_ID, true, html! {
                    @for alert in self.alerts {
                        (alert.into_html())
                    }
                }))
            }
        }
    }
}

impl IntoResponse for PageUpdate {
    fn into_response(self) -> Response {
        (HxReswap(SwapOption::None), self.into_html()).into_response()
    }
}
