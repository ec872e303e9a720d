//! Creating transactions.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;

use crate::{
    alert::Alert,
    api::LedgerClient,
    page_update::PageUpdate,
    transaction::{create_transaction_modal, refresh_transactions},
    validation::TransactionForm,
};

/// A route handler that opens the create transaction modal.
pub async fn get_new_transaction_modal() -> Response {
    PageUpdate::new()
        .open_modal(create_transaction_modal())
        .into_response()
}

/// A route handler for creating a transaction from the create modal's form.
///
/// An invalid form closes the modal and lists the errors without calling the
/// ledger API.
pub async fn create_transaction_endpoint(
    State(client): State<LedgerClient>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let payload = match form.to_payload() {
        Ok(payload) => payload,
        Err(errors) => {
            return PageUpdate::new()
                .close_modal()
                .alert(Alert::form_errors(errors))
                .into_response();
        }
    };

    let response = match client.create_transaction(&payload).await {
        Ok(response) => response,
        Err(error) => {
            tracing::error!("Could not create transaction: {error}");
            return PageUpdate::new()
                .alert(Alert::something_went_wrong())
                .into_response();
        }
    };

    let alert = if response.success {
        Alert::Success {
            message: response
                .message
                .unwrap_or_else(|| "Transaction created".to_owned()),
        }
    } else {
        Alert::Error {
            message: "Could not create transaction".to_owned(),
            details: response.message.unwrap_or_default(),
        }
    };

    PageUpdate::new()
        .close_modal()
        .alert(alert)
        .merge(refresh_transactions(&client).await)
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::State,
        http::{Method, StatusCode},
    };
    use axum_extra::extract::Form;
    use serde_json::json;

    use crate::{
        test_utils::{
            FakeApi, FakeRoute, account_route, element_text, get_header, list_route,
            must_get_element, must_get_form, parse_html_fragment, select_all, unreachable_client,
        },
        validation::TransactionForm,
    };

    use super::{create_transaction_endpoint, get_new_transaction_modal};

    fn valid_form() -> TransactionForm {
        TransactionForm {
            amount: Some("42.50".to_owned()),
            date: Some("2024-01-15".to_owned()),
            transaction_type: Some("credit".to_owned()),
            description: Some("Groceries".to_owned()),
        }
    }

    fn created_route() -> FakeRoute {
        FakeRoute::json(
            Method::POST,
            "/transactions/",
            StatusCode::CREATED,
            json!({"success": true, "message": "Transaction created successfully", "data": null}),
        )
    }

    #[tokio::test]
    async fn opens_create_modal() {
        let response = get_new_transaction_modal().await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(get_header(&response, "hx-reswap"), "none");
        let html = parse_html_fragment(response).await;
        let form = must_get_form(&html);
        assert_eq!(form.value().attr("hx-post"), Some("/transactions"));
        must_get_element(&html, "#modal-container[hx-swap-oob] dialog[open]");
    }

    #[tokio::test]
    async fn creates_transaction_and_refreshes() {
        let api = FakeApi::start(vec![
            created_route(),
            list_route(json!([{
                "id": 1, "amount": "42.50", "date": "Mon, 15 Jan 2024 00:00:00 GMT",
                "type": "credit", "description": "Groceries"
            }])),
            account_route(json!("42.50")),
        ])
        .await;

        let response = create_transaction_endpoint(State(api.client()), Form(valid_form())).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            api.request_lines(),
            vec!["POST /transactions/", "GET /transactions/", "GET /account"]
        );
        let body: serde_json::Value =
            serde_json::from_str(&api.requests()[0].body).expect("request body is not JSON");
        assert_eq!(body["date"], "2024-01-15T00:00:00.000Z");
        assert_eq!(body["amount"], 42.5);

        let html = parse_html_fragment(response).await;
        assert_eq!(
            element_text(must_get_element(&html, ".alert-success .alert-message")),
            "Transaction created successfully"
        );
        assert!(select_all(&html, "#modal-container *").is_empty());
        assert_eq!(select_all(&html, "#transactions tbody tr").len(), 1);
        assert_eq!(element_text(must_get_element(&html, "#balance")), "R 42.50");
    }

    #[tokio::test]
    async fn invalid_form_closes_modal_and_lists_errors_without_calling_api() {
        let api = FakeApi::start(vec![created_route()]).await;
        let form = TransactionForm {
            amount: Some("-1".to_owned()),
            description: Some("abc".to_owned()),
            ..valid_form()
        };

        let response = create_transaction_endpoint(State(api.client()), Form(form)).await;

        assert!(api.requests().is_empty());
        let html = parse_html_fragment(response).await;
        assert_eq!(
            element_text(must_get_element(&html, ".alert-error .alert-message")),
            "Your form has errors"
        );
        let errors = select_all(&html, ".alert-errors li")
            .into_iter()
            .map(element_text)
            .collect::<Vec<_>>();
        assert_eq!(
            errors,
            vec![
                "Amount must be a positive number",
                "Description must be at least 5 characters long"
            ]
        );
        assert!(select_all(&html, "#modal-container *").is_empty());
        assert!(select_all(&html, "#transactions").is_empty());
    }

    #[tokio::test]
    async fn api_error_alerts_and_leaves_list_alone() {
        let api = FakeApi::start(vec![FakeRoute::json(
            Method::POST,
            "/transactions/",
            StatusCode::BAD_REQUEST,
            json!({"success": false, "message": "Invalid transaction", "data": null}),
        )])
        .await;

        let response = create_transaction_endpoint(State(api.client()), Form(valid_form())).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(api.request_lines(), vec!["POST /transactions/"]);
        let html = parse_html_fragment(response).await;
        assert_eq!(
            element_text(must_get_element(&html, ".alert-error .alert-message")),
            "Something went wrong"
        );
        assert!(select_all(&html, "#transactions").is_empty());
        assert!(select_all(&html, "#modal-container").is_empty());
    }

    #[tokio::test]
    async fn unreachable_api_alerts() {
        let response =
            create_transaction_endpoint(State(unreachable_client().await), Form(valid_form()))
                .await;

        let html = parse_html_fragment(response).await;
        assert_eq!(
            element_text(must_get_element(&html, ".alert-error .alert-message")),
            "Something went wrong"
        );
    }
}
