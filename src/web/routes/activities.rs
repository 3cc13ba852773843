use axum::{
    extract::{Path, Query, State},
    Json,
};
use indexmap::IndexMap;
use tracing::info;

use crate::{
    model::{Activity, DirectoryError},
    web::{
        types::{EmailQuery, MessageResponse},
        WebResult,
    },
    AppState,
};

// ###################################
// ->   ERROR
// ###################################
#[derive(Debug, thiserror::Error)]
pub enum ActivitiesError {
    #[error("directory error: {0}")]
    Directory(#[from] DirectoryError),
}

// ###################################
// ->   API
// ###################################
#[tracing::instrument(name = "Listing activities", skip_all)]
pub async fn list(State(app_state): State<AppState>) -> Json<IndexMap<String, Activity>> {
    Json(app_state.directory.list().await)
}

#[tracing::instrument(
    name = "Signing up for an activity",
    skip_all,
    fields(activity = %activity_name, email = %query.email)
)]
pub async fn signup(
    State(app_state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> WebResult<Json<MessageResponse>> {
    app_state
        .directory
        .signup(&activity_name, &query.email)
        .await
        .map_err(ActivitiesError::Directory)?;
    info!("SUCCESS");

    Ok(Json(MessageResponse::signed_up(&query.email, &activity_name)))
}

#[tracing::instrument(
    name = "Unregistering from an activity",
    skip_all,
    fields(activity = %activity_name, email = %query.email)
)]
pub async fn unregister(
    State(app_state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> WebResult<Json<MessageResponse>> {
    app_state
        .directory
        .unregister(&activity_name, &query.email)
        .await
        .map_err(ActivitiesError::Directory)?;
    info!("SUCCESS");

    Ok(Json(MessageResponse::unregistered(
        &query.email,
        &activity_name,
    )))
}
