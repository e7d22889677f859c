//! Error type shared by the content pipeline and the HTTP handlers

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors raised while loading posts or serving requests
#[derive(Debug, Error)]
pub enum BlogError {
    /// Request body was not valid JSON or did not have the expected shape
    #[error("malformed request body: {0}")]
    MalformedBody(#[source] serde_json::Error),

    /// No post source matches the requested slug
    #[error("post not found: {0}")]
    PostNotFound(String),

    /// A post's `date` could not be parsed into an instant
    #[error("invalid date {date:?} in {path}")]
    InvalidDate { path: String, date: String },

    /// A post is missing `title` or `date`
    #[error("{path} is missing required metadata field `{field}`")]
    MissingMetadata { path: String, field: &'static str },

    #[error("failed to parse front matter in {path}: {source}")]
    FrontMatter {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("post loader task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl BlogError {
    /// HTTP status this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            BlogError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            BlogError::PostNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("Rejected request: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
