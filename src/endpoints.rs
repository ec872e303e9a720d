//! The URIs served by the front-end.
//!
//! For routes that take a parameter, e.g., '/transactions/{transaction_id}', use [format_endpoint].

/// The index page with the transaction list and balance.
pub const ROOT: &str = "/";
/// The fragment that re-renders the transaction list and the balance.
pub const TRANSACTIONS_LIST: &str = "/transactions/list";
/// The modal for creating a new transaction.
pub const NEW_TRANSACTION: &str = "/transactions/new";
/// The route for submitting a new transaction.
pub const TRANSACTIONS: &str = "/transactions";
/// The modal for editing or deleting an existing transaction.
pub const EDIT_TRANSACTION: &str = "/transactions/{transaction_id}/edit";
/// The route for updating or deleting a single transaction.
pub const TRANSACTION: &str = "/transactions/{transaction_id}";
/// The fragment that re-renders the account balance.
pub const BALANCE: &str = "/balance";
/// The route for static files.
pub const STATIC: &str = "/static";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is the text from a left brace up to and including the next
/// right brace, e.g. '{transaction_id}' in '/transactions/{transaction_id}'.
/// Only the first parameter is replaced.
///
/// If no parameter is found in `endpoint_path`, the original path is returned.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let end = endpoint_path[start..]
        .find('}')
        .map_or(endpoint_path.len(), |offset| start + offset + 1);

    format!("{}{id}{}", &endpoint_path[..start], &endpoint_path[end..])
}
