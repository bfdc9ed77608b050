//! The page that lists all transactions as a table.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints,
    html::{
        BUTTON_DELETE_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
    },
    navigation::NavBar,
    transaction::core::{Transaction, get_all_transactions},
};

/// The state needed for the transactions listing page.
#[derive(Debug, Clone)]
pub struct TransactionsPageState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for TransactionsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A transaction with its formatted action URLs for template rendering.
#[derive(Debug, Clone)]
struct TransactionTableRow {
    transaction: Transaction,
    show_url: String,
    edit_url: String,
    delete_url: String,
}

impl TransactionTableRow {
    fn new(transaction: Transaction) -> Self {
        Self {
            show_url: endpoints::format_endpoint(endpoints::TRANSACTION_VIEW, transaction.id),
            edit_url: endpoints::format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, transaction.id),
            delete_url: endpoints::format_endpoint(endpoints::DELETE_TRANSACTION, transaction.id),
            transaction,
        }
    }
}

/// Render an overview of the recorded transactions.
pub async fn get_transactions_page(
    State(state): State<TransactionsPageState>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let transactions = get_all_transactions(&connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve transactions: {error}"))?;

    let rows = transactions
        .into_iter()
        .map(TransactionTableRow::new)
        .collect::<Vec<_>>();

    Ok(transactions_view(&rows).into_response())
}

fn transactions_view(rows: &[TransactionTableRow]) -> Markup {
    let new_transaction_route = endpoints::NEW_TRANSACTION_VIEW;
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();

    let table_row = |row: &TransactionTableRow| {
        let confirm_message = format!(
            "Are you sure you want to delete '{}'?",
            row.transaction.description
        );

        html!(
            tr id=(format!("transaction_{}", row.transaction.id)) class=(TABLE_ROW_STYLE)
            {
                td class=(TABLE_CELL_STYLE)
                {
                    (row.transaction.amount)
                }

                td class=(TABLE_CELL_STYLE)
                {
                    (row.transaction.description)
                }

                td class=(TABLE_CELL_STYLE)
                {
                    (row.transaction.date)
                }

                td class=(TABLE_CELL_STYLE)
                {
                    div class="flex gap-4"
                    {
                        a href=(row.show_url) class=(LINK_STYLE) { "Show" }

                        a href=(row.edit_url) class=(LINK_STYLE) { "Edit" }

                        button
                            hx-delete=(row.delete_url)
                            hx-confirm=(confirm_message)
                            class=(BUTTON_DELETE_STYLE)
                        {
                            "Destroy"
                        }
                    }
                }
            }
        )
    };

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Transactions" }

                    a href=(new_transaction_route) class=(LINK_STYLE)
                    {
                        "New transaction"
                    }
                }

                section class="dark:bg-gray-800 lg:max-w-5xl lg:w-full lg:mx-auto"
                {
                    table class="w-full text-sm text-left rtl:text-right
                        text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE)
                                {
                                    "Amount"
                                }
                                th scope="col" class=(TABLE_CELL_STYLE)
                                {
                                    "Description"
                                }
                                th scope="col" class=(TABLE_CELL_STYLE)
                                {
                                    "Date"
                                }
                                th scope="col" class=(TABLE_CELL_STYLE)
                                {
                                    "Actions"
                                }
                            }
                        }

                        tbody
                        {
                            @for row in rows {
                                (table_row(row))
                            }

                            @if rows.is_empty() {
                                tr
                                {
                                    td
                                        colspan="4"
                                        class="px-6 py-4 text-center
                                            text-gray-500 dark:text-gray-400"
                                    {
                                        "No transactions recorded yet. "
                                        a href=(new_transaction_route) class=(LINK_STYLE)
                                        {
                                            "Create your first transaction"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    );

    base("Transactions", &content)
}
