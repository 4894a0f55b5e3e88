use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One spreadsheet row, keyed by column header
pub type ScheduleRow = Map<String, Value>;

/// Response wrapper for schedule endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub schedule: Vec<ScheduleRow>,
}

/// Error envelope shared by every failing endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: i64,
}

/// Banner returned at the root path
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexResponse {
    pub message: String,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Endpoints {
    pub field: String,
    pub schedule: String,
    pub rankings: String,
    pub health: String,
}

/// One player line of the world rankings workbook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    #[serde(rename = "OWGR")]
    pub owgr: String,
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Tour")]
    pub tour: String,
    #[serde(rename = "Availability")]
    pub availability: String,
}

/// Response wrapper for rankings endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct RankingsResponse {
    pub rankings: Vec<Ranking>,
}
