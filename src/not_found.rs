//! The 404 page, used both as the router fallback and for unknown ids.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

pub fn get_404_not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        error_view(
            "Page Not Found",
            "404",
            "Something's missing.",
            "Sorry, we can't find that page. Check the address for typos or head back to the \
            transactions page.",
        ),
    )
        .into_response()
}

#[cfg(test)]
mod not_found_tests {
    use axum::http::StatusCode;

    use crate::test_utils::parse_html_document;

    use super::get_404_not_found;

    #[tokio::test]
    async fn returns_not_found_page() {
        let response = get_404_not_found().await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let html = parse_html_document(response).await;
        let h1 = scraper::Selector::parse("h1").unwrap();
        let header = html
            .select(&h1)
            .next()
            .expect("No header found")
            .text()
            .collect::<String>();

        assert_eq!(header.trim(), "404");
    }
}
