use aimpur_calculator::CalculatorInfo;
use aimpur_calculator::presets::{RoomPreset, TilePreset};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /calculators/{name}`. Values may be JSON numbers, booleans or
/// the strings a form would submit; blank strings count as absent.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct CalculateRequest {
    #[serde(default)]
    pub inputs: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CalculateResponse {
    pub calculator: String,
    pub result: Value,
    pub calculated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize, Debug, Clone)]
pub struct CalculatorListResponse {
    pub calculators: Vec<CalculatorInfo>,
}

#[derive(Serialize, Debug, Clone)]
pub struct RoomPresetsResponse {
    pub presets: &'static [RoomPreset],
}

#[derive(Serialize, Debug, Clone)]
pub struct TilePresetsResponse {
    pub presets: &'static [TilePreset],
}
