//! Everything the user can do with transactions.
//!
//! This module contains:
//! - The transaction table and the create/edit modals
//! - The index page and the list refresh fragment
//! - The route handlers for creating, editing and deleting transactions

mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod form;
mod index_page;
mod list_endpoint;
mod table;

pub use create_endpoint::{create_transaction_endpoint, get_new_transaction_modal};
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::{get_edit_transaction_modal, update_transaction_endpoint};
pub use form::{create_transaction_modal, edit_transaction_modal};
pub use index_page::get_index_page;
pub use list_endpoint::{get_transaction_list, refresh_transactions};
pub use table::TransactionList;
