#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// ModuleEntry shape validation (via typed deserialization)
// =============================================================

#[test]
fn entry_deserializes_full_wire_shape() {
    let raw = r#"{
        "id": "module-1700000000000-42",
        "componentName": "ImageModule",
        "props": { "x": 100, "y": 200, "width": 140.5, "height": 60, "src": "/img/logo.png" }
    }"#;
    let entry: ModuleEntry = serde_json::from_str(raw).unwrap();
    assert_eq!(entry.id, "module-1700000000000-42");
    assert_eq!(entry.props.x, 100.0);
    assert_eq!(entry.props.width, 140.5);
    assert_eq!(entry.extra["componentName"], "ImageModule");
    assert_eq!(entry.props.extra["src"], "/img/logo.png");
}

#[test]
fn entry_missing_id_is_rejected() {
    let raw = r#"{"props":{"x":1,"y":2,"width":3,"height":4}}"#;
    assert!(serde_json::from_str::<ModuleEntry>(raw).is_err());
}

#[test]
fn entry_missing_props_is_rejected() {
    let raw = r#"{"id":"m"}"#;
    assert!(serde_json::from_str::<ModuleEntry>(raw).is_err());
}

#[test]
fn entry_missing_required_numeric_is_rejected() {
    for missing in ["x", "y", "width", "height"] {
        let mut props = serde_json::json!({"x": 1, "y": 2, "width": 3, "height": 4});
        props.as_object_mut().unwrap().remove(missing);
        let raw = serde_json::json!({"id": "m", "props": props}).to_string();
        assert!(
            serde_json::from_str::<ModuleEntry>(&raw).is_err(),
            "entry without props.{missing} should be rejected"
        );
    }
}

#[test]
fn entry_non_numeric_dimension_is_rejected() {
    let raw = r#"{"id":"m","props":{"x":1,"y":2,"width":"wide","height":4}}"#;
    assert!(serde_json::from_str::<ModuleEntry>(raw).is_err());
}

#[test]
fn entry_non_string_id_is_rejected() {
    let raw = r#"{"id":7,"props":{"x":1,"y":2,"width":3,"height":4}}"#;
    assert!(serde_json::from_str::<ModuleEntry>(raw).is_err());
}

#[test]
fn entry_integer_coordinates_accepted_as_numeric() {
    let raw = r#"{"id":"m","props":{"x":1,"y":2,"width":3,"height":4}}"#;
    let entry: ModuleEntry = serde_json::from_str(raw).unwrap();
    assert_eq!(entry.props.height, 4.0);
}

#[test]
fn entry_roundtrip_preserves_extra_keys() {
    let raw = r#"{"id":"m","componentName":"TextModule","props":{"x":1,"y":2,"width":3,"height":4,"data":"hi"}}"#;
    let entry: ModuleEntry = serde_json::from_str(raw).unwrap();
    let back = serde_json::to_value(&entry).unwrap();
    assert_eq!(back["componentName"], "TextModule");
    assert_eq!(back["props"]["data"], "hi");
}
