//! Contains all the routes that this application can handle.

mod activities;
mod home;

// re-export errors
pub use activities::ActivitiesError;

use crate::AppState;

use axum::{
    http::StatusCode,
    routing::{delete, get, post},
    Router,
};
use tower_http::services::ServeDir;

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// All the routes of the server
pub fn routes(app_state: AppState) -> Router {
    let static_files = ServeDir::new(&app_state.static_dir);

    Router::new()
        .route("/", get(home::home))
        .nest("/activities", activities_routes(app_state))
        .nest_service("/static", static_files)
        .route("/health-check", get(health_check))
}

/// ACTIVITIES - Routes nested under "/activities" path
fn activities_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(activities::list))
        .route("/{activity_name}/signup", post(activities::signup))
        .route(
            "/{activity_name}/participants",
            delete(activities::unregister),
        )
        .with_state(app_state)
}
