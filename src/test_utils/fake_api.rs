//! A stand-in for the ledger API that serves canned responses over real HTTP.

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use tokio::net::TcpListener;

use crate::api::LedgerClient;

/// A canned response for one method and path.
#[derive(Debug, Clone)]
pub(crate) struct FakeRoute {
    method: Method,
    path: &'static str,
    status: StatusCode,
    content_type: &'static str,
    body: String,
}

impl FakeRoute {
    pub(crate) fn json(
        method: Method,
        path: &'static str,
        status: StatusCode,
        body: serde_json::Value,
    ) -> Self {
        Self {
            method,
            path,
            status,
            content_type: "application/json",
            body: body.to_string(),
        }
    }

    pub(crate) fn text(method: Method, path: &'static str, status: StatusCode, body: &str) -> Self {
        Self {
            method,
            path,
            status,
            content_type: "text/html",
            body: body.to_owned(),
        }
    }
}

/// A request received by the fake API.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct FakeApiState {
    routes: Arc<Vec<FakeRoute>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// A running fake ledger API bound to an ephemeral local port.
///
/// Requests that match no route get a 404 with a plain text body.
pub(crate) struct FakeApi {
    url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeApi {
    pub(crate) async fn start(routes: Vec<FakeRoute>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = FakeApiState {
            routes: Arc::new(routes),
            requests: requests.clone(),
        };
        let app = Router::new().fallback(respond).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("could not bind fake API listener");
        let address = listener
            .local_addr()
            .expect("could not get fake API address");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("fake API server stopped unexpectedly");
        });

        Self {
            url: format!("http://{address}"),
            requests,
        }
    }

    /// The base URL of the fake API, e.g. "http://127.0.0.1:40123".
    pub(crate) fn url(&self) -> &str {
        &self.url
    }

    pub(crate) fn client(&self) -> LedgerClient {
        LedgerClient::new(&self.url).expect("could not create client for fake API")
    }

    /// The requests received so far, oldest first.
    pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .expect("could not lock recorded requests")
            .clone()
    }

    /// The `METHOD path` of each request received so far, oldest first.
    pub(crate) fn request_lines(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|request| format!("{} {}", request.method, request.path))
            .collect()
    }
}

async fn respond(
    State(state): State<FakeApiState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    state
        .requests
        .lock()
        .expect("could not lock recorded requests")
        .push(RecordedRequest {
            method: method.clone(),
            path: uri.path().to_owned(),
            content_type,
            body,
        });

    match state
        .routes
        .iter()
        .find(|route| route.method == method && route.path == uri.path())
    {
        Some(route) => (
            route.status,
            [(CONTENT_TYPE, route.content_type)],
            route.body.clone(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "no such route").into_response(),
    }
}

/// A client for an address where nothing is listening.
pub(crate) async fn unreachable_client() -> LedgerClient {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("could not bind listener");
    let address = listener.local_addr().expect("could not get address");
    drop(listener);

    LedgerClient::new(&format!("http://{address}")).expect("could not create client")
}

/// A successful `GET /account` response with the given balance.
pub(crate) fn account_route(balance: serde_json::Value) -> FakeRoute {
    FakeRoute::json(
        Method::GET,
        "/account",
        StatusCode::OK,
        serde_json::json!({
            "success": true,
            "message": null,
            "data": {"id": 1, "account_name": "Main", "account_balance": balance}
        }),
    )
}

/// A successful `GET /transactions/` response listing `transactions`.
pub(crate) fn list_route(transactions: serde_json::Value) -> FakeRoute {
    FakeRoute::json(
        Method::GET,
        "/transactions/",
        StatusCode::OK,
        serde_json::json!({"success": true, "message": null, "data": transactions}),
    )
}
