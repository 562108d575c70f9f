//! Defines the app level error type and its conversion to JSON error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A required query parameter was absent or empty.
    ///
    /// Holds the name of the parameter, e.g. "month".
    #[error("missing required query parameter \"{0}\"")]
    MissingParameter(&'static str),

    /// The seed data could not be fetched or was not a JSON array.
    ///
    /// The store is left untouched when this error occurs.
    #[error("could not fetch seed data: {0}")]
    UpstreamFetch(String),

    /// A chart could not be rendered.
    ///
    /// Rendering is a side effect of the chart endpoints, so this error is
    /// logged by the handlers and never replaces the data response.
    #[error("could not render chart: {0}")]
    ChartRender(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::SqlError(value)
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Error::MissingParameter(name) => {
                (StatusCode::BAD_REQUEST, format!("Please provide a {name}"))
            }
            Error::UpstreamFetch(reason) => {
                tracing::error!("seeding failed: {reason}");
                (
                    StatusCode::BAD_GATEWAY,
                    format!("Could not fetch seed data: {reason}"),
                )
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred, check the server logs for more details."
                        .to_owned(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
