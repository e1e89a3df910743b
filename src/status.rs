use axum::{http::header, response::IntoResponse, routing::get, Router};

pub(crate) const PATH: &str = "/status";

// Trailing newline included, matching the provider byte for byte.
pub(crate) const BODY: &str = "{\"status\": \"ok\"}\n";

pub(crate) fn router() -> Router {
    Router::new().route("/", get(get_endpoint))
}

async fn get_endpoint() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], BODY)
}
