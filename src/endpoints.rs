//! The application's endpoint URIs.
//!
//! Endpoints that take a parameter, e.g. '/transactions/{transaction_id}',
//! are turned into concrete paths with [format_endpoint].

/// The root route which redirects to the transactions page.
pub const ROOT: &str = "/";
/// The page that lists all transactions.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The page for creating a new transaction.
pub const NEW_TRANSACTION_VIEW: &str = "/transactions/new";
/// The page that shows a single transaction.
pub const TRANSACTION_VIEW: &str = "/transactions/{transaction_id}";
/// The page for editing an existing transaction.
pub const EDIT_TRANSACTION_VIEW: &str = "/transactions/{transaction_id}/edit";
/// The route to create a transaction.
pub const POST_TRANSACTION: &str = "/transactions";
/// The route to update a transaction.
pub const UPDATE_TRANSACTION: &str = "/transactions/{transaction_id}";
/// The route to delete a transaction.
pub const DELETE_TRANSACTION: &str = "/transactions/{transaction_id}";
/// The route for static files.
pub const STATIC: &str = "/static";

/// Replace the brace-delimited parameter in `endpoint_path` with `id`.
///
/// Endpoint paths are assumed to be ASCII and to contain at most one
/// parameter. A path without a parameter is returned unchanged, and an
/// unterminated parameter is replaced through to the end of the path.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map_or(endpoint_path.len(), |offset| param_start + offset + 1);

    format!(
        "{}{id}{}",
        &endpoint_path[..param_start],
        &endpoint_path[param_end..]
    )
}
