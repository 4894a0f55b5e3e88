use axum::response::Json;

use crate::models::{Endpoints, IndexResponse};

/// GET / - Service banner listing the available endpoints
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Golf API Server is running".to_string(),
        endpoints: Endpoints {
            field: "/api/field".to_string(),
            schedule: "/api/schedule".to_string(),
            rankings: "/api/rankings".to_string(),
            health: "/health".to_string(),
        },
    })
}
