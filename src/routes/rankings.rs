use axum::{extract::State, response::Json};

use crate::error::{ApiError, WorkbookError};
use crate::models::RankingsResponse;
use crate::sources::rankings;
use crate::AppState;

/// GET /api/rankings - World golf rankings from the workbook on disk
pub async fn get_rankings(
    State(state): State<AppState>,
) -> Result<Json<RankingsResponse>, ApiError> {
    let path = state.config.rankings_path.clone();
    tracing::info!("Attempting to read rankings workbook from: {}", path.display());

    let result = tokio::task::spawn_blocking(move || rankings::read_rankings(&path))
        .await
        .map_err(WorkbookError::from)
        .and_then(|rankings| rankings);

    match result {
        Ok(rankings) => {
            tracing::info!("Successfully read {} rankings", rankings.len());
            Ok(Json(RankingsResponse { rankings }))
        }
        Err(e) => {
            let err = ApiError::from(e);
            tracing::error!("Error in get_rankings: {}", err);
            Err(err)
        }
    }
}
