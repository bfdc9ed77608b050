//! The page that shows a single transaction.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints,
    html::{LINK_STYLE, PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
    transaction::core::{Transaction, TransactionId, get_transaction},
};

/// The state needed for the transaction detail page.
#[derive(Debug, Clone)]
pub struct TransactionPageState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for TransactionPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render the detail page for a single transaction, or the 404 page if the
/// transaction does not exist.
pub async fn get_transaction_page(
    Path(transaction_id): Path<TransactionId>,
    State(state): State<TransactionPageState>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let transaction = get_transaction(transaction_id, &connection).inspect_err(|error| {
        if *error != Error::NotFound {
            tracing::error!("Failed to retrieve transaction {transaction_id}: {error}");
        }
    })?;

    Ok(transaction_view(&transaction).into_response())
}

fn transaction_view(transaction: &Transaction) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();
    let edit_url = endpoints::format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, transaction.id);

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4"
            {
                h1 class="text-xl font-bold" { "Show transaction " (transaction.id) }

                h5 class="text-lg font-semibold" { (transaction.description) }
                p { "Amount: " (transaction.amount) }
                p { "Date: " (transaction.date) }

                div class="flex gap-4"
                {
                    a href=(edit_url) class=(LINK_STYLE) { "Edit" }
                    a href=(endpoints::TRANSACTIONS_VIEW) class=(LINK_STYLE) { "Back" }
                }
            }
        }
    };

    base("Show Transaction", &content)
}
