//! Access to the remote ledger API.
//!
//! - The data contracts shared with the API (`models`)
//! - The HTTP client and the response handler every call funnels through (`client`)

mod client;
mod models;

pub use client::{ApiError, LedgerClient, handle_response};
pub use models::{
    Account, ApiResponse, Transaction, TransactionData, TransactionId, TransactionPayload,
    TransactionType,
};
