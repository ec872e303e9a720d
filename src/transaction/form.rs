//! The create and edit transaction modals.

use maud::{Markup, html};
use time::{
    Date, OffsetDateTime, PrimitiveDateTime,
    format_description::{
        BorrowedFormatItem,
        well_known::{Rfc2822, Rfc3339},
    },
    macros::format_description,
};

use crate::{
    api::{Transaction, TransactionType},
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_INPUT_STYLE,
        FORM_LABEL_STYLE, FORM_STYLE, clear_element_script,
    },
    page_update::MODAL_CONTAINER_ID,
};

const INPUT_DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");
const HTTP_DATE_FORMAT: &[BorrowedFormatItem] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

/// The values shown in the transaction form fields.
#[derive(Debug, Default)]
struct FormValues<'a> {
    amount: String,
    date: String,
    transaction_type: Option<TransactionType>,
    description: &'a str,
}

/// The modal for creating a transaction, with an empty form.
pub fn create_transaction_modal() -> Markup {
    let form = html! {
        form
            id="create-transaction-form"
            class=(FORM_STYLE)
            hx-post=(endpoints::TRANSACTIONS)
            hx-swap="none"
            novalidate
        {
            (form_fields(&FormValues::default()))

            div class="modal-actions"
            {
                (cancel_button())
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Create" }
            }
        }
    };

    modal("create-transaction-modal", "Create transaction", form)
}

/// The modal for editing or deleting `transaction`.
///
/// The date is shown in the date picker format, "YYYY-MM-DD", whatever
/// format the ledger API sent it in.
pub fn edit_transaction_modal(transaction: &Transaction) -> Markup {
    let transaction_url = format_endpoint(endpoints::TRANSACTION, transaction.id);
    let values = FormValues {
        amount: transaction.amount.to_string(),
        date: input_date(&transaction.date).unwrap_or_else(|| {
            tracing::warn!(
                "Could not read the date {:?} of transaction {}",
                transaction.date,
                transaction.id
            );
            String::new()
        }),
        transaction_type: Some(transaction.transaction_type),
        description: &transaction.description,
    };

    let form = html! {
        form
            id="edit-transaction-form"
            class=(FORM_STYLE)
            hx-put=(transaction_url)
            hx-swap="none"
            novalidate
        {
            (form_fields(&values))

            div class="modal-actions"
            {
                button
                    type="button"
                    class=(BUTTON_DELETE_STYLE)
                    hx-delete=(transaction_url)
                    hx-swap="none"
                {
                    "Delete"
                }

                (cancel_button())
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Update" }
            }
        }
    };

    modal("edit-transaction-modal", "Edit transaction", form)
}

fn modal(id: &str, title: &str, body: Markup) -> Markup {
    html! {
        div class="modal-overlay"
        {
            dialog open id=(id) class="modal" aria-labelledby={ (id) "-title" }
            {
                header class="modal-header"
                {
                    h2 id={ (id) "-title" } { (title) }

                    button
                        type="button"
                        class="modal-close"
                        aria-label="Close modal"
                        onclick=(clear_element_script(MODAL_CONTAINER_ID))
                    {
                        "×"
                    }
                }

                (body)
            }
        }
    }
}

fn cancel_button() -> Markup {
    html! {
        button
            type="button"
            class=(BUTTON_SECONDARY_STYLE)
            onclick=(clear_element_script(MODAL_CONTAINER_ID))
        {
            "Cancel"
        }
    }
}

fn form_fields(values: &FormValues) -> Markup {
    let is_debit = values.transaction_type == Some(TransactionType::Debit);
    let is_credit = values.transaction_type == Some(TransactionType::Credit);

    html! {
        div
        {
            label for="amount" class=(FORM_LABEL_STYLE) { "Amount:" }
            input
                id="amount"
                type="number"
                name="amount"
                step="any"
                value=(values.amount)
                class=(FORM_INPUT_STYLE);
        }

        div
        {
            label for="date" class=(FORM_LABEL_STYLE) { "Date:" }
            input
                id="date"
                type="date"
                name="date"
                value=(values.date)
                class=(FORM_INPUT_STYLE);
        }

        div
        {
            label for="type" class=(FORM_LABEL_STYLE) { "Type:" }
            select id="type" name="type" class=(FORM_INPUT_STYLE)
            {
                option value=(TransactionType::Credit.as_str()) selected[is_credit] { "Credit" }
                option value=(TransactionType::Debit.as_str()) selected[is_debit] { "Debit" }
            }
        }

        div
        {
            label for="description" class=(FORM_LABEL_STYLE) { "Description:" }
            textarea
                id="description"
                name="description"
                class=(FORM_INPUT_STYLE)
            {
                (values.description)
            }
        }
    }
}

/// Convert a date sent by the ledger API into the value of a date input.
///
/// The API may send an RFC 3339 date-time, a plain "YYYY-MM-DD" date or an
/// HTTP date such as "Mon, 15 Jan 2024 00:00:00 GMT".
pub(crate) fn input_date(raw: &str) -> Option<String> {
    let raw = raw.trim();

    let date = OffsetDateTime::parse(raw, &Rfc3339)
        .map(|date_time| date_time.date())
        .ok()
        .or_else(|| {
            raw.get(..10)
                .and_then(|prefix| Date::parse(prefix, INPUT_DATE_FORMAT).ok())
        })
        .or_else(|| {
            PrimitiveDateTime::parse(raw, HTTP_DATE_FORMAT)
                .map(|date_time| date_time.date())
                .ok()
        })
        .or_else(|| {
            OffsetDateTime::parse(raw, &Rfc2822)
                .map(|date_time| date_time.date())
                .ok()
        })?;

    date.format(INPUT_DATE_FORMAT).ok()
}
