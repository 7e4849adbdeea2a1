//! Integration tests for the CakeCommand JSON protocol.
//!
//! Tests the full command pipeline: JSON string -> parse -> execute -> response.

use cake_gui_lib::command::{execute_json, execute_json_batch};
use cake_gui_lib::harness::TestHarness;

#[test]
fn test_command_select_shape_advances() {
    let mut h = TestHarness::new();
    let resp = execute_json(&mut h.session, r#"{"command": "select_shape", "shape": "circle"}"#)
        .unwrap();
    assert!(resp.success);
    assert_eq!(resp.data.unwrap()["step"], 2);
    assert!(h.base().is_some());
}

#[test]
fn test_command_invalid_height_is_error() {
    let mut h = TestHarness::new();
    let resp =
        execute_json(&mut h.session, r#"{"command": "select_height", "inches": 7}"#).unwrap();
    assert!(!resp.success);
    assert!(resp.error.unwrap().contains("unsupported cake height"));
    assert!(h.selection().height.is_none());
}

#[test]
fn test_command_invalid_color_is_error() {
    let mut h = TestHarness::new();
    let resp =
        execute_json(&mut h.session, r#"{"command": "pick_base_color", "color": "pink"}"#).unwrap();
    assert!(!resp.success);
}

#[test]
fn test_command_signed_hex_color_rejected() {
    let mut h = TestHarness::new();
    let before = h.selection().base_color;
    let resp = execute_json(
        &mut h.session,
        r##"{"command": "pick_base_color", "color": "#+F+F+F"}"##,
    )
    .unwrap();
    assert!(!resp.success);
    assert_eq!(h.selection().base_color, before);

    let load = r##"{"command": "load_selection", "selection": {"shape": "circle", "base_color": "#+1+2+3"}}"##;
    assert!(execute_json(&mut h.session, load).is_err());
}

#[test]
fn test_command_unknown_command_rejected() {
    let mut h = TestHarness::new();
    assert!(execute_json(&mut h.session, r#"{"command": "bake"}"#).is_err());
    assert!(execute_json(&mut h.session, "not json").is_err());
}

#[test]
fn test_command_filling_without_base() {
    let mut h = TestHarness::new();
    let resp =
        execute_json(&mut h.session, r##"{"command": "pick_filling", "color": "#7DD3FC"}"##).unwrap();
    assert!(resp.success);
    assert_eq!(resp.data.unwrap()["applied"], false);
}

#[test]
fn test_command_batch_walkthrough() {
    let mut h = TestHarness::new();
    let json = r##"[
        {"command": "select_shape", "shape": "circle"},
        {"command": "select_height", "inches": 8},
        {"command": "next"},
        {"command": "pick_base_color", "color": "#FBBF24"},
        {"command": "next"},
        {"command": "pick_filling", "color": "#86EFAC"},
        {"command": "next"},
        {"command": "toggle_topping", "tag": "Berries"},
        {"command": "drag", "dx": 40.0, "dy": 0.0},
        {"command": "tick", "count": 3},
        {"command": "inspect"}
    ]"##;

    let responses = execute_json_batch(&mut h.session, json).unwrap();
    assert_eq!(responses.len(), 11);
    assert!(responses.iter().all(|r| r.success));

    let tick = responses[9].data.as_ref().unwrap();
    assert_eq!(tick["submitted"], 3);

    let inspect = responses[10].data.as_ref().unwrap();
    assert_eq!(inspect["step"], 5);
    assert_eq!(inspect["label"], "Step 5 of 5");
    assert_eq!(inspect["has_base"], true);
    assert_eq!(inspect["selection"]["height"], 8);
    assert_eq!(inspect["selection"]["base_color"], "#FBBF24");
    assert_eq!(inspect["selection"]["toppings"][0], "Berries");
}

#[test]
fn test_command_back_only_from_toppings() {
    let mut h = TestHarness::new();
    let json = r#"[
        {"command": "select_shape", "shape": "circle"},
        {"command": "back"}
    ]"#;
    let responses = execute_json_batch(&mut h.session, json).unwrap();
    assert!(responses[1].success);
    // The wizard itself allows back; the prompt card only offers it on toppings
    assert_eq!(responses[1].data.as_ref().unwrap()["step"], 1);
}

#[test]
fn test_command_reset_then_inspect() {
    let mut h = TestHarness::new();
    let json = r#"[
        {"command": "select_shape", "shape": "circle"},
        {"command": "drag", "dx": 20.0, "dy": 20.0},
        {"command": "reset"},
        {"command": "inspect"}
    ]"#;
    let responses = execute_json_batch(&mut h.session, json).unwrap();
    let inspect = responses[3].data.as_ref().unwrap();
    assert_eq!(inspect["step"], 1);
    assert_eq!(inspect["has_base"], false);
    assert_eq!(inspect["mesh_count"], 0);
    assert!(h.session.rotation().yaw == 0.0);
}

#[test]
fn test_command_load_and_export_selection() {
    let mut h = TestHarness::new();
    let load = r##"{"command": "load_selection", "selection": {"shape": "circle", "height": 12, "base_color": "#E1BEE7", "toppings": ["Cherry"]}}"##;
    assert!(execute_json(&mut h.session, load).unwrap().success);

    let resp = execute_json(&mut h.session, r#"{"command": "export_selection"}"#).unwrap();
    let exported = resp.data.unwrap()["selection_json"]
        .as_str()
        .unwrap()
        .to_string();
    let parsed: serde_json::Value = serde_json::from_str(&exported).unwrap();
    assert_eq!(parsed["height"], 12);
    assert_eq!(parsed["toppings"][0], "Cherry");
}

#[test]
fn test_command_tick_after_teardown() {
    let mut h = TestHarness::new();
    h.session.teardown();
    let resp = execute_json(&mut h.session, r#"{"command": "tick", "count": 4}"#).unwrap();
    assert_eq!(resp.data.unwrap()["submitted"], 0);
    assert_eq!(h.render_log().disposed, 1);
}
