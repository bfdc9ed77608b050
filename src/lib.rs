//! Cashbook keeps a ledger of financial transactions (amount, description,
//! date) in SQLite and serves the list, detail, create, and edit pages
//! directly as HTML.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::response::{IntoResponse, Response};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod db;
mod endpoints;
mod html;
mod internal_server_error;
mod navigation;
mod not_found;
mod routing;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use routing::build_router;

use crate::{
    internal_server_error::render_internal_server_error, not_found::get_404_not_found_response,
};

/// How long in-flight requests get to finish once a shutdown signal arrives.
const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(1);

/// An async task that waits for ctrl+c or the terminate signal, whichever
/// comes first, and then tells the server behind `handle` to shut down
/// gracefully.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install ctrl+c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::debug!("received ctrl+c, shutting down"),
        _ = terminate => tracing::debug!("received terminate signal, shutting down"),
    }

    handle.graceful_shutdown(Some(SHUTDOWN_GRACE_PERIOD));
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource does not exist.
    ///
    /// Clients see this as the 404 page. Internally it also covers queries
    /// that return no rows.
    #[error("the requested resource does not exist")]
    NotFound,

    /// Tried to update a transaction with an id that is not in the database.
    #[error("no transaction with the requested id to update")]
    UpdateMissingTransaction,

    /// Tried to delete a transaction with an id that is not in the database.
    #[error("no transaction with the requested id to delete")]
    DeleteMissingTransaction,

    /// The amount field of a submitted form could not be parsed as a decimal
    /// number.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// The date field of a submitted form could not be parsed as a calendar
    /// date in the format YYYY-MM-DD.
    #[error("\"{0}\" is not a valid date")]
    InvalidDate(String),

    /// The mutex guarding the database connection was poisoned.
    #[error("the database lock is unavailable")]
    DatabaseLockError,

    /// An unexpected SQL error.
    #[error("unexpected SQL error: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("unhandled SQL error: {error}");
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound | Error::UpdateMissingTransaction | Error::DeleteMissingTransaction => {
                get_404_not_found_response()
            }
            Error::DatabaseLockError => render_internal_server_error(Default::default()),
            // Everything else is an internal detail the client should not see.
            error => {
                tracing::error!("an unexpected error occurred: {error}");
                render_internal_server_error(Default::default())
            }
        }
    }
}
