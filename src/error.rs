use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("OMDB_API_KEY is missing. Add it to your environment.")]
    MissingApiKey,

    #[error("Unable to reach OMDb API: {0}")]
    UpstreamUnavailable(String),

    #[error("Invalid response from OMDb API: {0}")]
    UpstreamMalformed(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Classifies a transport-level failure from the HTTP client.
    ///
    /// Body-decode failures mean the upstream answered with something we
    /// cannot parse; everything else (connect error, timeout) counts as the
    /// upstream being unreachable.
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::UpstreamMalformed(err.to_string())
        } else {
            AppError::UpstreamUnavailable(err.to_string())
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::from_reqwest(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingApiKey => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            // The caller only needs to know the upstream could not be used;
            // the fixed message matches what the front end expects.
            AppError::UpstreamUnavailable(_) | AppError::UpstreamMalformed(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Unable to reach OMDb API.".to_string(),
            ),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
