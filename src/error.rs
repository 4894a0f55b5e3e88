use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Failures while turning a workbook on disk into row objects.
#[derive(Debug, Error)]
pub enum WorkbookError {
    #[error("failed to open workbook: {0}")]
    Open(calamine::Error),

    #[error("failed to read worksheet: {0}")]
    Read(calamine::Error),

    #[error("workbook has no worksheets")]
    NoWorksheet,

    #[error("worksheet is empty")]
    Empty,

    #[error("column '{0}' not found")]
    MissingColumn(String),

    #[error("row {row}: '{value}' is not a recognised date")]
    InvalidDate { row: usize, value: String },

    #[error("workbook task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Everything a handler can fail with. Always rendered as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("upstream request failed: {0}")]
    Upstream(reqwest::Error),

    #[error(transparent)]
    Workbook(#[from] WorkbookError),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the provider key.
        ApiError::Upstream(err.without_url())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Upstream(_) | ApiError::Workbook(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}
