//! Client-side validation of the create and edit transaction forms.
//!
//! Every rule is checked and all violations are collected, so the user sees
//! every problem with the form at once.

use std::str::FromStr;

use serde::Deserialize;
use time::{
    Date, OffsetDateTime,
    format_description::{BorrowedFormatItem, well_known::Rfc3339},
    macros::format_description,
};
use unicode_segmentation::UnicodeSegmentation;

use crate::api::{TransactionPayload, TransactionType};

/// The minimum number of characters in a transaction description.
pub const MIN_DESCRIPTION_LENGTH: usize = 5;

pub const AMOUNT_ERROR: &str = "Amount must be a positive number";
pub const DATE_REQUIRED_ERROR: &str = "Date is required";
pub const DATE_FORMAT_ERROR: &str = "Invalid date format";
pub const TYPE_ERROR: &str = "Type must be either \"credit\" or \"debit\"";
pub const DESCRIPTION_REQUIRED_ERROR: &str = "Description is required";
pub const DESCRIPTION_LENGTH_ERROR: &str = "Description must be at least 5 characters long";

const FORM_DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// The raw fields submitted by the create and edit transaction forms.
///
/// Every field is optional so that missing fields are reported as validation
/// errors rather than rejected by the extractor.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct TransactionForm {
    /// A positive decimal number, e.g. "42.50".
    pub amount: Option<String>,
    /// The value of a date input, e.g. "2024-01-15".
    pub date: Option<String>,
    /// Either "credit" or "debit".
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    /// At least five characters.
    pub description: Option<String>,
}

/// The outcome of [validate_form].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValidation {
    /// True if and only if there are no errors.
    pub valid: bool,
    /// The human readable errors in rule order, `None` when the form is valid.
    pub errors: Option<Vec<String>>,
}

/// Check every field of `form` and collect the errors.
pub fn validate_form(form: &TransactionForm) -> FormValidation {
    match form.to_payload() {
        Ok(_) => FormValidation {
            valid: true,
            errors: None,
        },
        Err(errors) => FormValidation {
            valid: false,
            errors: Some(errors),
        },
    }
}

impl TransactionForm {
    /// Convert the form into the request body for the ledger API.
    ///
    /// # Errors
    /// Returns the validation errors, in rule order, if any field is invalid.
    pub fn to_payload(&self) -> Result<TransactionPayload, Vec<String>> {
        let mut errors = Vec::new();

        let amount = parse_amount(self.amount.as_deref());
        if amount.is_none() {
            errors.push(AMOUNT_ERROR.to_owned());
        }

        let date = match non_empty(self.date.as_deref()) {
            None => {
                errors.push(DATE_REQUIRED_ERROR.to_owned());
                None
            }
            Some(date) => {
                let date = parse_form_date(date);
                if date.is_none() {
                    errors.push(DATE_FORMAT_ERROR.to_owned());
                }
                date
            }
        };

        let transaction_type = self
            .transaction_type
            .as_deref()
            .and_then(|transaction_type| TransactionType::from_str(transaction_type).ok());
        if transaction_type.is_none() {
            errors.push(TYPE_ERROR.to_owned());
        }

        let description = match non_empty(self.description.as_deref()) {
            None => {
                errors.push(DESCRIPTION_REQUIRED_ERROR.to_owned());
                None
            }
            Some(description)
                if description.graphemes(true).count() < MIN_DESCRIPTION_LENGTH =>
            {
                errors.push(DESCRIPTION_LENGTH_ERROR.to_owned());
                None
            }
            Some(description) => Some(description.to_owned()),
        };

        match (amount, date, transaction_type, description) {
            (Some(amount), Some(date), Some(transaction_type), Some(description)) => {
                Ok(TransactionPayload {
                    amount,
                    date,
                    transaction_type,
                    description,
                })
            }
            _ => Err(errors),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

/// Parse a strictly positive, finite amount in plain or scientific notation.
fn parse_amount(amount: Option<&str>) -> Option<f64> {
    amount?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}

/// Parse the value of a date input ("2024-01-15") or a full RFC 3339 date-time.
pub fn parse_form_date(date: &str) -> Option<Date> {
    let date = date.trim();

    Date::parse(date, FORM_DATE_FORMAT)
        .ok()
        .or_else(|| OffsetDateTime::parse(date, &Rfc3339).ok().map(|dt| dt.date()))
}
