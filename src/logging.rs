//! Logging for the calls made to the ledger API.

use reqwest::{Method, StatusCode};

/// The number of characters of a request or response body logged at the `debug` level.
///
/// Longer bodies are truncated there and logged in full at the `trace` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log a request that is about to be sent to the ledger API.
pub(crate) fn log_api_request(method: &Method, url: &str, body: Option<&str>) {
    match body {
        Some(body) => log_body(&format!("Sending {method} {url}"), body),
        None => tracing::debug!("Sending {method} {url}"),
    }
}

/// Log a response received from the ledger API.
pub(crate) fn log_api_response(url: &str, status: StatusCode, body: &str) {
    log_body(&format!("Received {status} from {url}"), body);
}

fn log_body(summary: &str, body: &str) {
    let truncated = truncate(body, LOG_BODY_LENGTH_LIMIT);

    if truncated.len() < body.len() {
        tracing::debug!("{summary}\nbody: {truncated}...");
        tracing::trace!("Full body: {body:?}");
    } else {
        tracing::debug!("{summary}\nbody: {body:?}");
    }
}

/// Cut `text` down to at most `limit` characters without splitting a character.
fn truncate(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
