//! End-to-end tests for `elevation-architect elevation`.

mod fixtures;
use fixtures::*;

#[test]
fn test_elevation_defaults_json() {
    let output = run(&["elevation", "--json"]);
    assert_exit(&output, 0);

    let json = stdout_json(&output);
    assert_eq!(json["preset"], "generic-65");
    assert_eq!(json["scenario"], "meeting-conference");
    assert_eq!(json["spec"]["reference_point"], "center");
    assert_json_number(&json["spec"]["affl_value"], 1350.0);
    assert_json_number(&json["layout"]["anchors"]["bottom"], 935.0);
    assert_json_number(&json["layout"]["anchors"]["top"], 1765.0);
    assert_eq!(json["warnings"].as_array().unwrap().len(), 0);
}

#[test]
fn test_elevation_human_output() {
    let output = run(&["elevation", "--preset", "generic-65", "--affl", "1350"]);
    assert_exit(&output, 0);

    let out = stdout(&output);
    assert!(out.contains("Generic 65\""), "stdout: {out}");
    assert!(out.contains("Center:  1350mm"));
    assert!(out.contains("Bottom:  935mm"));
}

#[test]
fn test_elevation_dual_custom_size() {
    let output = run(&[
        "elevation", "--width", "1200", "--height", "700", "--displays", "2", "--json",
    ]);
    assert_exit(&output, 0);

    let json = stdout_json(&output);
    assert_eq!(json["preset"], "custom");
    assert_eq!(json["display_count"], "dual");
    assert_json_number(&json["layout"]["group"]["width"], 2420.0);
    assert_eq!(json["layout"]["panels"].as_array().unwrap().len(), 2);
}

#[test]
fn test_elevation_scenario_warning_is_advisory() {
    let output = run(&["elevation", "--scenario", "education", "--affl", "1000", "--json"]);
    assert_exit(&output, 0);

    let json = stdout_json(&output);
    let warnings = json["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["type"], "warning");
    assert!(warnings[0]["message"].as_str().unwrap().contains("1220mm"));
}

#[test]
fn test_elevation_strict_fails_on_findings() {
    let output = run(&[
        "elevation", "--scenario", "education", "--affl", "1000", "--strict",
    ]);
    assert_exit(&output, 1);
    assert!(stderr(&output).contains("strict mode"));
}

#[test]
fn test_elevation_below_floor_is_reported() {
    let output = run(&[
        "elevation", "--reference", "bottom", "--affl", "-200", "--json",
    ]);
    assert_exit(&output, 0);

    let json = stdout_json(&output);
    let warnings = json["warnings"].as_array().unwrap();
    assert!(warnings
        .iter()
        .any(|w| w["type"] == "error" && w["message"].as_str().unwrap().contains("below finished floor")));
}

#[test]
fn test_elevation_video_conference_camera() {
    let output = run(&[
        "elevation", "--scenario", "video-conference", "--camera", "top", "--json",
    ]);
    assert_exit(&output, 0);

    let json = stdout_json(&output);
    assert_eq!(json["layout"]["camera"]["position"], "top");
}

#[test]
fn test_elevation_unknown_preset_is_invalid_args() {
    let output = run(&["elevation", "--preset", "generic-120"]);
    assert_exit(&output, 3);
    assert!(stderr(&output).contains("generic-120"));
}

#[test]
fn test_elevation_bad_display_count() {
    let output = run(&["elevation", "--displays", "3"]);
    assert_exit(&output, 3);
}

#[test]
fn test_elevation_uses_configured_defaults() {
    let config_dir = temp_config_dir();
    let set = run_in(
        &["config", "set", "--display-preset", "generic-55", "--scenario", "general"],
        config_dir.path(),
    );
    assert_exit(&set, 0);

    let output = run_in(&["elevation", "--json"], config_dir.path());
    assert_exit(&output, 0);
    let json = stdout_json(&output);
    assert_eq!(json["preset"], "generic-55");
    assert_eq!(json["scenario"], "general");
    assert_json_number(&json["spec"]["affl_value"], 1500.0);
}
