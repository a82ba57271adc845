use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};

use crate::cors::AppState;

pub async fn greet(State(state): State<AppState>) -> impl IntoResponse {
    Html(format!(
        "<h1>{}</h1><p>Call this endpoint from a page served by an allowed host.</p>",
        state.greeting
    ))
}

pub async fn echo(body: String) -> impl IntoResponse {
    (StatusCode::CREATED, body)
}
