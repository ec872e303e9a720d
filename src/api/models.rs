//! The shapes of the data exchanged with the ledger API.

use std::{fmt::Display, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

/// The ID the ledger API assigns to a transaction.
pub type TransactionId = i64;

/// Whether a transaction adds money to, or removes money from, the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming into the account.
    Credit,
    /// Money leaving the account.
    Debit,
}

impl TransactionType {
    /// The name used by the ledger API and the HTML forms.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Credit => "credit",
            TransactionType::Debit => "debit",
        }
    }

    /// The sign shown in front of the amount in the transaction list.
    pub fn sign(self) -> &'static str {
        match self {
            TransactionType::Credit => "+",
            TransactionType::Debit => "-",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = ();

    /// Only the exact, lowercase names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "credit" => Ok(TransactionType::Credit),
            "debit" => Ok(TransactionType::Debit),
            _ => Err(()),
        }
    }
}

/// A transaction as stored by the ledger API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    /// The ID assigned by the ledger API.
    pub id: TransactionId,
    /// The positive value of the transaction. The API may send it as a JSON
    /// number or as a string.
    pub amount: Decimal,
    /// The date exactly as the API sent it, e.g. "Mon, 15 Jan 2024 00:00:00 GMT".
    pub date: String,
    /// Whether the transaction is a credit or a debit.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Text detailing the transaction.
    pub description: String,
}

/// The single account the ledger keeps.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Account {
    /// The ID assigned by the ledger API.
    pub id: i64,
    /// The display name of the account.
    pub account_name: String,
    /// The aggregate of all transactions, computed by the API.
    pub account_balance: Decimal,
}

/// The envelope wrapping every response body from the ledger API.
///
/// When `success` is false, `data` must not be relied on.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the API considers the request successful.
    #[serde(default)]
    pub success: bool,
    /// A human readable message, e.g. "Transaction created successfully".
    pub message: Option<String>,
    /// The payload, absent for mutations.
    pub data: Option<T>,
}

/// The `data` of the transaction endpoints: either one transaction or a list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TransactionData {
    /// The response of the list endpoint.
    Many(Vec<Transaction>),
    /// The response of the single transaction endpoint.
    One(Transaction),
}

/// The request body for creating or updating a transaction.
///
/// Only a validated form can produce one, see
/// [TransactionForm::to_payload](crate::validation::TransactionForm::to_payload).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionPayload {
    /// Sent as a JSON number.
    pub amount: f64,
    /// Sent as a UTC midnight timestamp, e.g. "2024-01-15T00:00:00.000Z".
    #[serde(serialize_with = "serialize_utc_midnight")]
    pub date: Date,
    /// Whether the transaction is a credit or a debit.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Text detailing the transaction.
    pub description: String,
}

const UTC_MIDNIGHT_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day]T00:00:00.000Z");

fn serialize_utc_midnight<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
    let formatted = date
        .format(UTC_MIDNIGHT_FORMAT)
        .map_err(serde::ser::Error::custom)?;

    serializer.serialize_str(&formatted)
}
