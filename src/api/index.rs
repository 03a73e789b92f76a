use axum::response::Html;

const INFO_PAGE: &str = include_str!("../../public/index.html");

/// Serves the API info page.
pub async fn index() -> Html<&'static str> {
    Html(INFO_PAGE)
}
