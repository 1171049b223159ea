use crate::view::html::not_found_page;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

pub async fn fallback_handler() -> Response {
    (StatusCode::NOT_FOUND, Html(not_found_page())).into_response()
}
