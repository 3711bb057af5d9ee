//! Module layout routes — the canvas save/load surface.
//!
//! Shape validation is the typed extraction itself: `Json<SaveModulesBody>`
//! requires a `modules` array whose entries each carry a string `id` and a
//! `props` object with numeric `x`, `y`, `width`, `height`. A body failing
//! that shape is rejected with a client-error status before the handler
//! runs, so no state is ever mutated by an invalid request.

#[cfg(test)]
#[path = "modules_test.rs"]
mod tests;

use axum::extract::State;
use axum::response::Json;
use serde::Deserialize;
use tracing::info;

use crate::routes::auth::AuthUser;
use crate::state::{AppState, ModuleEntry};

#[derive(Debug, Deserialize)]
pub struct SaveModulesBody {
    pub modules: Vec<ModuleEntry>,
}

/// `POST /save-modules` — store the caller's full module array.
///
/// Replacement is atomic per caller: the submitted array overwrites any
/// previously stored one under a single write-lock acquisition. No merge,
/// no diff.
pub async fn save_modules(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<SaveModulesBody>,
) -> Json<serde_json::Value> {
    let count = body.modules.len();
    {
        let mut layouts = state.layouts.write().await;
        layouts.insert(auth.user_id, body.modules);
    }

    info!(user_id = %auth.user_id, count, "modules saved");
    Json(serde_json::json!({ "status": "success" }))
}

/// `GET /modules` — the caller's stored module array; empty when the caller
/// has never saved.
pub async fn list_modules(State(state): State<AppState>, auth: AuthUser) -> Json<Vec<ModuleEntry>> {
    let layouts = state.layouts.read().await;
    Json(layouts.get(&auth.user_id).cloned().unwrap_or_default())
}
