use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use sar_core::{FleetCommand, Position, WorldState, WorldStats};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::AppState;
use crate::error::ApiError;

// --- Request bodies ---

/// Body of `POST /api/command`.
#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    command: String,
    #[serde(default)]
    ships: Vec<String>,
}

/// Body of `POST /api/spawn_persons`.
#[derive(Debug, Deserialize)]
pub struct SpawnRequest {
    count: usize,
    radius: f64,
    center: Position,
}

// --- Responses ---

/// Confirmation returned by the mutating endpoints.
#[derive(Debug, Serialize)]
pub struct Ack {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    affected: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<u32>,
}

impl Ack {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            affected: None,
            count: None,
        }
    }
}

// --- Handlers ---

/// Service banner.
pub async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Maritime Search and Rescue Simulation API",
        "endpoints": {
            "current_state": "/api/state",
            "statistics": "/api/stats",
            "reset": "/api/reset",
            "command": "/api/command",
            "spawn_persons": "/api/spawn_persons",
        }
    }))
}

/// Advance one tick and return the new state.
pub async fn api_state(State(state): State<Arc<AppState>>) -> Json<WorldState> {
    let mut sim = state.sim.lock().await;
    let snapshot = sim.advance().clone();
    debug!(tick = snapshot.tick, phase = %snapshot.phase, "advanced");
    Json(snapshot)
}

/// Derived counters, without advancing.
pub async fn api_stats(State(state): State<Arc<AppState>>) -> Json<WorldStats> {
    Json(state.sim.lock().await.stats())
}

/// Restore the initial configuration.
pub async fn api_reset(State(state): State<Arc<AppState>>) -> Json<Ack> {
    state.sim.lock().await.reset();
    info!("simulation reset");
    Json(Ack::ok("Simulation reset successfully"))
}

/// Start or stop vessels.
pub async fn api_command(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CommandRequest>,
) -> Result<Json<Ack>, ApiError> {
    let command: FleetCommand = req.command.parse()?;
    let affected = state.sim.lock().await.command(command, &req.ships)?;
    info!(%command, affected, "fleet command applied");
    Ok(Json(Ack {
        affected: Some(affected),
        ..Ack::ok(format!("{command} sent to {affected} vessel(s)"))
    }))
}

/// Put more persons in the water.
pub async fn api_spawn_persons(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SpawnRequest>,
) -> Result<Json<Ack>, ApiError> {
    let total = state
        .sim
        .lock()
        .await
        .spawn_persons(req.count, req.radius, req.center)?;
    info!(added = req.count, total, "persons spawned");
    Ok(Json(Ack {
        count: Some(total),
        ..Ack::ok(format!("{} person(s) spawned", req.count))
    }))
}
