use std::collections::HashMap;
use std::sync::Arc;

use aimpur_calculator::FactValue;
use aimpur_calculator::presets::{ROOM_PRESETS, TILE_PRESETS};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use chrono::Utc;
use tracing::{info, instrument};

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::types::{
    CalculateRequest, CalculateResponse, CalculatorListResponse, HealthResponse,
    RoomPresetsResponse, TilePresetsResponse,
};

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let now = Utc::now();
    let uptime = now.signed_duration_since(state.start_time).num_seconds().max(0);
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: u64::try_from(uptime).unwrap_or_default(),
        timestamp: now,
    })
}

pub async fn list_calculators(State(state): State<Arc<AppState>>) -> Json<CalculatorListResponse> {
    Json(CalculatorListResponse { calculators: state.calculator.describe() })
}

pub async fn room_presets() -> Json<RoomPresetsResponse> {
    Json(RoomPresetsResponse { presets: ROOM_PRESETS })
}

pub async fn tile_presets() -> Json<TilePresetsResponse> {
    Json(TilePresetsResponse { presets: TILE_PRESETS })
}

#[instrument(skip_all, fields(calculator = %name))]
pub async fn calculate(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> ApiResult<Json<CalculateResponse>> {
    if !state.calculator.contains(&name) {
        return Err(ApiError::not_found(format!("calculator '{name}'")));
    }
    let Json(request) = payload?;

    let limit = state.config.limits.max_calculator_inputs;
    if request.inputs.len() > limit {
        return Err(ApiError::validation(
            format!("Too many inputs: {} (limit {limit})", request.inputs.len()),
            None,
        ));
    }

    let mut args = HashMap::with_capacity(request.inputs.len());
    for (key, value) in &request.inputs {
        let fact = FactValue::try_from(value).map_err(|e| {
            ApiError::validation(format!("Input '{key}' could not be read: {e}"), Some(key))
        })?;
        args.insert(key.clone(), fact);
    }

    let result = state.calculator.calculate_owned(&name, &args)?;
    info!("calculation completed");

    Ok(Json(CalculateResponse {
        calculator: name,
        result: result.into(),
        calculated_at: Utc::now(),
    }))
}
