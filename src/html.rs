//! The page shell, shared styles and formatting helpers for the HTML views.

use maud::{DOCTYPE, Markup, html};
use rust_decimal::Decimal;

use crate::{api::TransactionType, endpoints};

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "button button-primary";
pub const BUTTON_SECONDARY_STYLE: &str = "button button-secondary";
pub const BUTTON_DELETE_STYLE: &str = "button button-danger";

// Form styles
pub const FORM_STYLE: &str = "transaction-form";
pub const FORM_LABEL_STYLE: &str = "form-label";
pub const FORM_INPUT_STYLE: &str = "form-input";

// Table styles
pub const TABLE_CONTAINER_STYLE: &str = "table-container";
pub const TABLE_STYLE: &str = "transaction-table";
pub const TABLE_ROW_STYLE: &str = "handle-transaction";

// Page container
pub const PAGE_CONTAINER_STYLE: &str = "page";

/// Subresource integrity hash of the vendored htmx 2.0.8 build in `static/`.
const HTMX_INTEGRITY: &str =
    "sha384-/TgkGk7p307TH7EXJDuUlgG3Ce1UVolAOFopFekQkkXihi5u/6OCvVKyz1W+idaz";

/// The currency prefix used for every amount and balance.
pub const CURRENCY_SYMBOL: &str = "R";

/// JavaScript for buttons that dismiss the element with the given ID's contents.
pub fn clear_element_script(element_id: &str) -> String {
    format!("document.getElementById('{element_id}').replaceChildren()")
}

pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Ledger" }
                link href=(format!("{}/main.css", endpoints::STATIC)) rel="stylesheet";

                script
                    src=(format!("{}/htmx-2.0.8.min.js", endpoints::STATIC))
                    integrity=(HTMX_INTEGRITY)
                    {}
            }

            body
            {
                (content)
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="error-page"
            {
                h1 class="error-code" { (header) }

                p class="error-description" { (description) }

                p { (fix) }

                a href=(endpoints::ROOT) class=(BUTTON_PRIMARY_STYLE)
                {
                    "Back to Homepage"
                }
            }
        }
    );

    base(title, &content)
}

/// Format an amount the way the transaction list shows it, e.g. "+R42.50" or "-R10".
///
/// The amount is printed exactly as the ledger API sent it, without rounding.
pub fn format_signed_amount(transaction_type: TransactionType, amount: Decimal) -> String {
    format!("{}{CURRENCY_SYMBOL}{amount}", transaction_type.sign())
}

/// Format the account balance, e.g. "R 1234.50".
pub fn format_balance(balance: Decimal) -> String {
    format!("{CURRENCY_SYMBOL} {balance}")
}
