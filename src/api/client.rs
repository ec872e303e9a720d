//! The HTTP client for the ledger API.

use reqwest::{Method, RequestBuilder, Response, StatusCode, Url, header::CONTENT_TYPE};
use serde::de::DeserializeOwned;

use crate::{
    Error,
    api::models::{Account, ApiResponse, TransactionData, TransactionId, TransactionPayload},
    logging::{log_api_request, log_api_response},
};

/// The collection of transactions. The trailing slash is part of the route.
const TRANSACTIONS_PATH: &str = "/transactions/";
/// The account summary.
const ACCOUNT_PATH: &str = "/account";

/// The ways a call to the ledger API can fail.
///
/// The user is shown the same generic error for all of them, the variants
/// only exist so the logs say what actually happened.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ApiError {
    /// The request never produced a response, e.g. the API is down.
    #[error("could not reach the ledger API: {0}")]
    Transport(String),

    /// The API answered with a non-success status code.
    #[error("the ledger API responded with status {0}")]
    Status(StatusCode),

    /// The response body was not the expected JSON.
    #[error("could not decode the ledger API response: {0}")]
    Decode(String),

    /// The request body could not be serialized as JSON.
    #[error("could not encode the request body: {0}")]
    Encode(String),
}

/// A client for the ledger API.
///
/// Cloning is cheap, clones share one connection pool.
#[derive(Debug, Clone)]
pub struct LedgerClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl LedgerClient {
    /// Create a client for the ledger API at `base_url`, e.g. "http://localhost:5000".
    ///
    /// Trailing slashes are removed from `base_url`.
    ///
    /// # Errors
    /// Returns an error if `base_url` is not a valid URL or the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let base_url = base_url.trim_end_matches('/');
        Url::parse(base_url)
            .map_err(|error| Error::InvalidApiUrl(base_url.to_owned(), error.to_string()))?;

        let http_client = reqwest::Client::builder()
            .build()
            .map_err(|error| Error::HttpClient(error.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.to_owned(),
        })
    }

    /// The URL the ledger API is served from, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /transactions/
    pub async fn list_transactions(&self) -> Result<ApiResponse<TransactionData>, ApiError> {
        let response = self.send(Method::GET, TRANSACTIONS_PATH, None).await?;
        handle_response(response).await
    }

    /// GET /transactions/{id}
    pub async fn get_transaction(
        &self,
        id: TransactionId,
    ) -> Result<ApiResponse<TransactionData>, ApiError> {
        let response = self
            .send(Method::GET, &transaction_path(id), None)
            .await?;
        handle_response(response).await
    }

    /// POST /transactions/
    pub async fn create_transaction(
        &self,
        payload: &TransactionPayload,
    ) -> Result<ApiResponse<TransactionData>, ApiError> {
        let response = self
            .send(Method::POST, TRANSACTIONS_PATH, Some(payload))
            .await?;
        handle_response(response).await
    }

    /// PUT /transactions/{id}
    pub async fn update_transaction(
        &self,
        id: TransactionId,
        payload: &TransactionPayload,
    ) -> Result<ApiResponse<TransactionData>, ApiError> {
        let response = self
            .send(Method::PUT, &transaction_path(id), Some(payload))
            .await?;
        handle_response(response).await
    }

    /// DELETE /transactions/{id}
    pub async fn delete_transaction(
        &self,
        id: TransactionId,
    ) -> Result<ApiResponse<TransactionData>, ApiError> {
        let response = self
            .send(Method::DELETE, &transaction_path(id), None)
            .await?;
        handle_response(response).await
    }

    /// GET /account
    ///
    /// Unlike the transaction endpoints this does not go through [handle_response]:
    /// the body is decoded whatever the status code, so a failed response that
    /// still carries a JSON envelope is returned as `Ok` with `success == false`.
    pub async fn get_account(&self) -> Result<ApiResponse<Account>, ApiError> {
        let response = self.send(Method::GET, ACCOUNT_PATH, None).await?;
        let (_, body) = read_body(response).await?;
        decode(&body)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        payload: Option<&TransactionPayload>,
    ) -> Result<Response, ApiError> {
        let url = format!("{}{path}", self.base_url);
        let mut request: RequestBuilder = self.http_client.request(method.clone(), &url);

        match payload {
            Some(payload) => {
                let body = serde_json::to_string(payload)
                    .map_err(|error| ApiError::Encode(error.to_string()))?;
                log_api_request(&method, &url, Some(&body));
                request = request.header(CONTENT_TYPE, "application/json").body(body);
            }
            None => log_api_request(&method, &url, None),
        }

        request.send().await.map_err(|error| {
            tracing::error!("{method} {url} failed: {error}");
            ApiError::Transport(error.to_string())
        })
    }
}

fn transaction_path(id: TransactionId) -> String {
    format!("{TRANSACTIONS_PATH}{id}")
}

/// The single place where the status of a transaction endpoint response is checked.
///
/// A non-success status is logged and returned as [ApiError::Status] without
/// decoding the body. Otherwise the body is decoded as an [ApiResponse].
pub async fn handle_response<T: DeserializeOwned>(
    response: Response,
) -> Result<ApiResponse<T>, ApiError> {
    let (status, body) = read_body(response).await?;

    if !status.is_success() {
        tracing::warn!("The ledger API responded with {status}: {body}");
        return Err(ApiError::Status(status));
    }

    decode(&body)
}

async fn read_body(response: Response) -> Result<(StatusCode, String), ApiError> {
    let status = response.status();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .map_err(|error| ApiError::Transport(error.to_string()))?;

    log_api_response(&url, status, &body);

    Ok((status, body))
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<ApiResponse<T>, ApiError> {
    serde_json::from_str(body).map_err(|error| {
        tracing::error!("Could not decode ledger API response {body:?}: {error}");
        ApiError::Decode(error.to_string())
    })
}
