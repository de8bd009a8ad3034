//! End-to-end tests for `elevation-architect config` commands.

mod fixtures;
use fixtures::*;

#[test]
fn test_config_show_defaults() {
    let output = run(&["config", "show", "--json"]);
    assert_exit(&output, 0);

    let json = stdout_json(&output);
    assert_json_number(&json["room"]["width"], 4000.0);
    assert_json_number(&json["room"]["height"], 2800.0);
    assert_eq!(json["defaults"]["display_preset"], "generic-65");
    assert_eq!(json["defaults"]["bracket"], "chief-lsm1u");
    assert_json_number(&json["videowall"]["room_height"], 3000.0);
}

#[test]
fn test_config_show_human_readable() {
    let output = run(&["config", "show"]);
    assert_exit(&output, 0);
    let out = stdout(&output);
    assert!(out.contains("Elevation Architect Configuration"));
    assert!(out.contains("Display Preset: generic-65"));
}

#[test]
fn test_config_set_persists() {
    let config_dir = temp_config_dir();
    let output = run_in(
        &[
            "config",
            "set",
            "--room-height",
            "3200",
            "--scenario",
            "home-theater",
            "--scale",
            "3",
        ],
        config_dir.path(),
    );
    assert_exit(&output, 0);
    assert!(config_dir.path().join("config.toml").exists());

    let show = run_in(&["config", "show", "--json"], config_dir.path());
    let json = stdout_json(&show);
    assert_json_number(&json["room"]["height"], 3200.0);
    assert_eq!(json["defaults"]["scenario"], "home-theater");
    assert_json_number(&json["export"]["scale"], 3.0);
}

#[test]
fn test_config_set_requires_a_value() {
    let output = run(&["config", "set"]);
    assert_exit(&output, 3);
}

#[test]
fn test_config_set_rejects_unknown_preset() {
    let config_dir = temp_config_dir();
    let output = run_in(
        &["config", "set", "--display-preset", "generic-120"],
        config_dir.path(),
    );
    assert_exit(&output, 3);
    assert!(!config_dir.path().join("config.toml").exists());
}

#[test]
fn test_config_path_honors_override() {
    let config_dir = temp_config_dir();
    let output = run_in(&["config", "path"], config_dir.path());
    assert_exit(&output, 0);
    assert_eq!(
        stdout(&output).trim(),
        config_dir.path().join("config.toml").display().to_string()
    );
}

#[test]
fn test_broken_config_file_is_io_error() {
    let config_dir = temp_config_dir();
    std::fs::write(config_dir.path().join("config.toml"), "room = 3").unwrap();
    let output = run_in(&["elevation"], config_dir.path());
    assert_exit(&output, 2);
    assert!(stderr(&output).contains("Failed to load configuration"));
}

#[test]
fn test_config_set_rejects_custom_preset() {
    let config_dir = temp_config_dir();
    let output = run_in(
        &["config", "set", "--display-preset", "custom"],
        config_dir.path(),
    );
    assert_exit(&output, 3);
    assert!(!config_dir.path().join("config.toml").exists());
}

#[test]
fn test_custom_preset_in_config_file_is_rejected() {
    let config_dir = temp_config_dir();
    std::fs::write(
        config_dir.path().join("config.toml"),
        "[defaults]\ndisplay_preset = \"custom\"\nscenario = \"general\"\nbracket = \"none\"\n",
    )
    .unwrap();
    let output = run_in(&["elevation"], config_dir.path());
    assert_exit(&output, 2);
}
