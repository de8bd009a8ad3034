//! End-to-end tests for `elevation-architect discas`.

mod fixtures;
use fixtures::*;

#[test]
fn test_distance_to_size_basic() {
    let output = run(&["discas", "--distance", "5000"]);
    assert_exit(&output, 0);

    let out = stdout(&output);
    assert!(out.starts_with("67\""), "stdout: {out}");
    assert!(out.contains("Height: 833mm"));
}

#[test]
fn test_size_to_distance_basic() {
    let output = run(&["discas", "--diagonal", "65", "--content", "basic"]);
    assert_exit(&output, 0);

    let out = stdout(&output);
    assert!(out.starts_with("4.9m"), "stdout: {out}");
    assert!(out.contains("4857mm"));
}

#[test]
fn test_discas_json_modes() {
    let output = run(&["discas", "--distance", "5000", "--json"]);
    assert_exit(&output, 0);
    let json = stdout_json(&output);
    assert_eq!(json["mode"], "distance_to_size");
    assert_eq!(json["content"], "basic");
    assert_json_number(&json["result"]["recommended_inch"], 67.0);

    let output = run(&["discas", "--diagonal", "65", "--content", "analytical", "--json"]);
    assert_exit(&output, 0);
    let json = stdout_json(&output);
    assert_eq!(json["mode"], "size_to_distance");
    assert_eq!(json["content"], "analytical");
    let analytical = json["result"]["max_distance"].as_f64().unwrap();

    let basic = stdout_json(&run(&["discas", "--diagonal", "65", "--json"]))["result"]
        ["max_distance"]
        .as_f64()
        .unwrap();
    assert!(analytical < basic);
}

#[test]
fn test_discas_argument_errors() {
    assert_exit(&run(&["discas"]), 3);
    assert_exit(&run(&["discas", "--distance", "0"]), 3);
    assert_exit(&run(&["discas", "--diagonal", "55", "--content", "cinema"]), 3);

    // clap rejects conflicting flags itself
    let output = run(&["discas", "--distance", "5000", "--diagonal", "65"]);
    assert_eq!(output.status.code(), Some(2));
}
