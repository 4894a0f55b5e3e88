use axum::{extract::State, response::Json};
use serde_json::Value;

use crate::error::ApiError;
use crate::sources::field;
use crate::AppState;

/// GET /api/field - Current tournament field, relayed verbatim from the upstream feed
pub async fn get_field(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    tracing::info!("Received request for /api/field");

    match field::fetch_field(&state.http, &state.config.field).await {
        Ok(data) => {
            tracing::info!("Field data fetched successfully");
            Ok(Json(data))
        }
        Err(e) => {
            let err = ApiError::from(e);
            tracing::error!("Error in get_field: {}", err);
            Err(err)
        }
    }
}
