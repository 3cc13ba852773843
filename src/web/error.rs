use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use strum_macros::AsRefStr;

use crate::model::DirectoryError;

use super::routes::ActivitiesError;

pub type WebResult<T> = core::result::Result<T, Error>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum Error {
    #[error("activities error: {0}")]
    Activities(#[from] ActivitiesError),
}

impl Error {
    pub fn status_code_and_client_error(&self) -> (StatusCode, ClientError) {
        match self {
            Error::Activities(ActivitiesError::Directory(dir_er)) => match dir_er {
                DirectoryError::ActivityNotFound(_) => {
                    (StatusCode::NOT_FOUND, ClientError::ActivityNotFound)
                }
                DirectoryError::ParticipantNotFound { .. } => {
                    (StatusCode::NOT_FOUND, ClientError::ParticipantNotFound)
                }
                DirectoryError::AlreadySignedUp { .. } => {
                    (StatusCode::BAD_REQUEST, ClientError::AlreadySignedUp)
                }
                DirectoryError::ActivityFull { .. } => {
                    (StatusCode::BAD_REQUEST, ClientError::ActivityFull)
                }
            },
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::debug!("{:<12} - into_response(Error: {self:?})", "INTO_RESP");

        // Construct a placeholder response, `response_mapper` replaces it with the client error.
        let mut res = StatusCode::INTERNAL_SERVER_ERROR.into_response();

        // Insert the Error into response so that it can be retrieved later.
        res.extensions_mut().insert(Arc::new(self));

        res
    }
}

/// The error a client gets to see. Displays as the `detail` message of the error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, derive_more::Display)]
pub enum ClientError {
    #[display("Activity not found")]
    ActivityNotFound,
    #[display("Participant not found in this activity")]
    ParticipantNotFound,
    #[display("Student is already signed up for this activity")]
    AlreadySignedUp,
    #[display("Activity is full")]
    ActivityFull,
}
