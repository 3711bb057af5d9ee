use uuid::Uuid;

use super::*;
use crate::state::EntryProps;

fn make_entry(id: &str) -> ModuleEntry {
    ModuleEntry {
        id: id.to_owned(),
        props: EntryProps {
            x: 100.0,
            y: 200.0,
            width: 100.0,
            height: 100.0,
            extra: serde_json::Map::new(),
        },
        extra: serde_json::Map::new(),
    }
}

async fn save(state: &AppState, user_id: Uuid, modules: Vec<ModuleEntry>) -> serde_json::Value {
    let Json(body) = save_modules(
        State(state.clone()),
        AuthUser { user_id },
        Json(SaveModulesBody { modules }),
    )
    .await;
    body
}

async fn list(state: &AppState, user_id: Uuid) -> Vec<ModuleEntry> {
    let Json(modules) = list_modules(State(state.clone()), AuthUser { user_id }).await;
    modules
}

// =============================================================
// Save
// =============================================================

#[tokio::test]
async fn save_acknowledges_with_success_status() {
    let state = AppState::new();
    let body = save(&state, Uuid::new_v4(), vec![make_entry("module-1-1")]).await;
    assert_eq!(body["status"], "success");
}

#[tokio::test]
async fn save_then_list_roundtrips_entries() {
    let state = AppState::new();
    let user_id = Uuid::new_v4();
    let entries = vec![make_entry("module-1-1"), make_entry("module-1-2")];

    save(&state, user_id, entries.clone()).await;
    assert_eq!(list(&state, user_id).await, entries);
}

#[tokio::test]
async fn save_replaces_previous_array_wholesale() {
    let state = AppState::new();
    let user_id = Uuid::new_v4();

    save(&state, user_id, vec![make_entry("module-1-1"), make_entry("module-1-2")]).await;
    save(&state, user_id, vec![make_entry("module-2-1")]).await;

    let stored = list(&state, user_id).await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, "module-2-1");
}

#[tokio::test]
async fn save_empty_array_clears_layout() {
    let state = AppState::new();
    let user_id = Uuid::new_v4();
    save(&state, user_id, vec![make_entry("module-1-1")]).await;
    save(&state, user_id, vec![]).await;
    assert!(list(&state, user_id).await.is_empty());
}

#[tokio::test]
async fn layouts_are_isolated_per_caller() {
    let state = AppState::new();
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    save(&state, alice, vec![make_entry("module-a-1")]).await;
    save(&state, bob, vec![make_entry("module-b-1"), make_entry("module-b-2")]).await;

    assert_eq!(list(&state, alice).await.len(), 1);
    assert_eq!(list(&state, bob).await.len(), 2);
}

// =============================================================
// List
// =============================================================

#[tokio::test]
async fn list_before_any_save_is_empty() {
    let state = AppState::new();
    assert!(list(&state, Uuid::new_v4()).await.is_empty());
}

// =============================================================
// Body validation (typed extraction)
// =============================================================

#[test]
fn body_requires_modules_key() {
    assert!(serde_json::from_str::<SaveModulesBody>("{}").is_err());
}

#[test]
fn body_rejects_non_array_modules() {
    let raw = r#"{"modules":{"id":"m"}}"#;
    assert!(serde_json::from_str::<SaveModulesBody>(raw).is_err());
}

#[test]
fn body_rejects_malformed_entry_anywhere_in_array() {
    let raw = r#"{"modules":[
        {"id":"ok","props":{"x":1,"y":2,"width":3,"height":4}},
        {"id":"bad","props":{"x":1,"y":2}}
    ]}"#;
    assert!(serde_json::from_str::<SaveModulesBody>(raw).is_err());
}

#[test]
fn body_accepts_canvas_client_payload() {
    // The exact shape the client crate submits.
    let raw = r#"{"modules":[{
        "id": "module-1700000000000-42",
        "componentName": "ImageModule",
        "props": {"x": 100.0, "y": 200.0, "width": 140.0, "height": 60.0, "src": "/img/logo.png"}
    }]}"#;
    let body: SaveModulesBody = serde_json::from_str(raw).unwrap();
    assert_eq!(body.modules.len(), 1);
    assert_eq!(body.modules[0].extra["componentName"], "ImageModule");
}
