//! Application router configuration.

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    balance::get_balance,
    not_found::get_404_not_found,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, get_edit_transaction_modal,
        get_index_page, get_new_transaction_modal, get_transaction_list,
        update_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::TRANSACTIONS_LIST, get(get_transaction_list))
        .route(endpoints::NEW_TRANSACTION, get(get_new_transaction_modal))
        .route(endpoints::TRANSACTIONS, post(create_transaction_endpoint))
        .route(
            endpoints::EDIT_TRANSACTION,
            get(get_edit_transaction_modal),
        )
        .route(
            endpoints::TRANSACTION,
            put(update_transaction_endpoint).delete(delete_transaction_endpoint),
        )
        .route(endpoints::BALANCE, get(get_balance))
        .nest_service(endpoints::STATIC, static_files)
        .fallback(get_404_not_found)
        .with_state(state)
}
