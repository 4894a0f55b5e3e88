use axum::{extract::State, response::Json};

use crate::error::{ApiError, WorkbookError};
use crate::models::ScheduleResponse;
use crate::sources::schedule;
use crate::AppState;

/// GET /api/schedule - Tournament schedule from the workbook on disk
///
/// The workbook is re-read on every request. StartDate is returned as DD/MM/YYYY.
pub async fn get_schedule(
    State(state): State<AppState>,
) -> Result<Json<ScheduleResponse>, ApiError> {
    let path = state.config.schedule_path.clone();
    tracing::info!("Attempting to read schedule workbook from: {}", path.display());

    let result = tokio::task::spawn_blocking(move || schedule::read_schedule(&path))
        .await
        .map_err(WorkbookError::from)
        .and_then(|rows| rows);

    match result {
        Ok(rows) => {
            tracing::debug!("Read {} schedule rows", rows.len());
            Ok(Json(ScheduleResponse { schedule: rows }))
        }
        Err(e) => {
            let err = ApiError::from(e);
            tracing::error!("Error in get_schedule: {}", err);
            Err(err)
        }
    }
}
