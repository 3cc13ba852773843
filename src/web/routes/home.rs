use axum::response::Redirect;

/// The front-end lives under `/static`.
pub async fn home() -> Redirect {
    Redirect::temporary("/static/index.html")
}
