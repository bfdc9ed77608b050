//! Transaction management for the ledger.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the database functions for storing,
//!   querying, and managing transactions
//! - Route handlers for the transaction pages and endpoints

mod core;
mod create;
mod delete;
mod edit;
mod form;
mod list;
mod show;

pub use core::{Transaction, TransactionFields, TransactionId, create_transaction_table};
pub use create::{create_transaction_endpoint, get_new_transaction_page};
pub use delete::delete_transaction_endpoint;
pub use edit::{get_edit_transaction_page, update_transaction_endpoint};
pub use form::TransactionFormData;
pub use list::get_transactions_page;
pub use show::get_transaction_page;
