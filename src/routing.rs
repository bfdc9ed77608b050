//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::get,
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    not_found::get_404_not_found,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, get_edit_transaction_page,
        get_new_transaction_page, get_transaction_page, get_transactions_page,
        update_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(
            endpoints::TRANSACTIONS_VIEW,
            get(get_transactions_page).post(create_transaction_endpoint),
        )
        .route(endpoints::NEW_TRANSACTION_VIEW, get(get_new_transaction_page))
        // Both PUT and PATCH are accepted for updates so that plain HTML
        // clients and htmx forms can use either verb.
        .route(
            endpoints::TRANSACTION_VIEW,
            get(get_transaction_page)
                .put(update_transaction_endpoint)
                .patch(update_transaction_endpoint)
                .delete(delete_transaction_endpoint),
        )
        .route(
            endpoints::EDIT_TRANSACTION_VIEW,
            get(get_edit_transaction_page),
        )
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the transactions page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::TRANSACTIONS_VIEW)
}

#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{endpoints, routing::get_index_page};

    #[tokio::test]
    async fn root_redirects_to_transactions() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap();
        assert_eq!(location, endpoints::TRANSACTIONS_VIEW);
    }
}

#[cfg(test)]
mod router_tests {
    use axum_test::TestServer;
    use rusqlite::Connection;

    use crate::{AppState, build_router, endpoints, transaction::TransactionFormData};

    fn get_test_server() -> TestServer {
        let db_connection =
            Connection::open_in_memory().expect("Could not open database in memory.");
        let state = AppState::new(db_connection).expect("Could not create app state.");

        TestServer::new(build_router(state)).expect("Could not create test server.")
    }

    fn transaction_form(amount: &str, date: &str, description: &str) -> TransactionFormData {
        TransactionFormData {
            amount: amount.to_owned(),
            date: date.to_owned(),
            description: description.to_owned(),
        }
    }

    #[tokio::test]
    async fn root_redirects_to_transactions() {
        let server = get_test_server();

        let response = server.get(endpoints::ROOT).await;

        response.assert_status_see_other();
        assert_eq!(response.header("location"), endpoints::TRANSACTIONS_VIEW);
    }

    #[tokio::test]
    async fn unknown_page_returns_not_found() {
        let server = get_test_server();

        let response = server.get("/does/not/exist").await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn create_list_update_delete_flow() {
        let server = get_test_server();

        // Create two transactions through the form endpoint.
        let response = server
            .post(endpoints::POST_TRANSACTION)
            .form(&transaction_form("100.01", "2025-10-04", "credit transaction"))
            .await;
        response.assert_status_see_other();
        assert_eq!(response.header("hx-redirect"), endpoints::TRANSACTIONS_VIEW);

        server
            .post(endpoints::POST_TRANSACTION)
            .form(&transaction_form("-50.1", "2025-10-05", "debit transaction"))
            .await
            .assert_status_see_other();

        // Both appear on the index page in creation order.
        let index = server.get(endpoints::TRANSACTIONS_VIEW).await;
        index.assert_status_ok();
        let index_text = index.text();
        let credit_position = index_text
            .find("credit transaction")
            .expect("want index to list the first transaction");
        let debit_position = index_text
            .find("debit transaction")
            .expect("want index to list the second transaction");
        assert!(
            credit_position < debit_position,
            "want transactions listed in creation order"
        );

        // The detail page shows the first transaction.
        let show = server
            .get(&endpoints::format_endpoint(endpoints::TRANSACTION_VIEW, 1))
            .await;
        show.assert_status_ok();
        assert!(show.text().contains("Show transaction 1"));

        // Update the first transaction via PUT.
        let response = server
            .put(&endpoints::format_endpoint(endpoints::UPDATE_TRANSACTION, 1))
            .form(&transaction_form(
                "23.59",
                "2025-10-05",
                "Changed credit transactions",
            ))
            .await;
        response.assert_status_see_other();

        let index_text = server.get(endpoints::TRANSACTIONS_VIEW).await.text();
        assert!(index_text.contains("Changed credit transactions"));
        assert!(index_text.contains("23.59"));

        // PATCH is routed to the same update handler.
        let response = server
            .patch(&endpoints::format_endpoint(endpoints::UPDATE_TRANSACTION, 1))
            .form(&transaction_form("24.59", "2025-10-05", "Patched"))
            .await;
        response.assert_status_see_other();

        // Delete the first transaction, only the second remains.
        let response = server
            .delete(&endpoints::format_endpoint(endpoints::DELETE_TRANSACTION, 1))
            .await;
        response.assert_status_see_other();

        let index_text = server.get(endpoints::TRANSACTIONS_VIEW).await.text();
        assert!(!index_text.contains("Patched"));
        assert!(index_text.contains("debit transaction"));
    }

    #[tokio::test]
    async fn operations_on_unknown_id_return_not_found() {
        let server = get_test_server();

        server
            .get(&endpoints::format_endpoint(endpoints::TRANSACTION_VIEW, 42))
            .await
            .assert_status_not_found();

        server
            .get(&endpoints::format_endpoint(
                endpoints::EDIT_TRANSACTION_VIEW,
                42,
            ))
            .await
            .assert_status_not_found();

        server
            .put(&endpoints::format_endpoint(endpoints::UPDATE_TRANSACTION, 42))
            .form(&transaction_form("1.0", "2025-10-05", ""))
            .await
            .assert_status_not_found();

        server
            .delete(&endpoints::format_endpoint(endpoints::DELETE_TRANSACTION, 42))
            .await
            .assert_status_not_found();

        // None of the failed requests should have created anything.
        let index_text = server.get(endpoints::TRANSACTIONS_VIEW).await.text();
        assert!(index_text.contains("No transactions recorded yet."));
    }
}
