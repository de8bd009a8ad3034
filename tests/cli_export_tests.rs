//! End-to-end tests for `elevation-architect export`.

use std::fs;

mod fixtures;
use fixtures::*;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

#[test]
fn test_export_elevation_svg() {
    let config_dir = temp_config_dir();
    let out_path = config_dir.path().join("elevation.svg");

    let output = run_in(
        &[
            "export",
            "elevation",
            "--preset",
            "generic-65",
            "--output",
            out_path.to_str().unwrap(),
        ],
        config_dir.path(),
    );
    assert_exit(&output, 0);
    assert!(stdout(&output).contains("✓ Exported"));

    let svg = fs::read_to_string(&out_path).expect("Failed to read export file");
    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains("<title>Display Elevation View</title>"));
    assert!(svg.contains("FFL (Finished Floor Level)"));
    assert!(svg.contains("AFFL (Center): 1350mm"));
}

#[test]
fn test_export_elevation_backing_view() {
    let config_dir = temp_config_dir();
    let out_path = config_dir.path().join("mounting.svg");

    let output = run_in(
        &[
            "export",
            "elevation",
            "--view",
            "backing",
            "--bracket",
            "chief-lsm1u",
            "--output",
            out_path.to_str().unwrap(),
        ],
        config_dir.path(),
    );
    assert_exit(&output, 0);

    let svg = fs::read_to_string(&out_path).unwrap();
    assert!(svg.contains("<title>Mounting Detail View</title>"));
    assert!(svg.contains("883mm"));
    assert!(svg.contains("432mm"));
}

#[test]
fn test_export_elevation_png_into_directory() {
    let config_dir = temp_config_dir();
    let out_dir = config_dir.path().join("drawings");
    fs::create_dir_all(&out_dir).unwrap();

    let output = run_in(
        &[
            "export",
            "elevation",
            "--format",
            "png",
            "--scale",
            "0.05",
            "--output",
            out_dir.to_str().unwrap(),
            "--json",
        ],
        config_dir.path(),
    );
    assert_exit(&output, 0);

    let json = stdout_json(&output);
    assert_eq!(json["format"], "png");
    assert_eq!(json["view"], "front");
    let path = std::path::PathBuf::from(json["path"].as_str().unwrap());
    assert_eq!(path.parent().unwrap(), out_dir.as_path());
    assert_eq!(path.extension().unwrap(), "png");

    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes[..8], PNG_SIGNATURE);
}

#[test]
fn test_export_uses_configured_output_dir() {
    let config_dir = temp_config_dir();
    let out_dir = config_dir.path().join("exports");
    let set = run_in(
        &["config", "set", "--output-dir", out_dir.to_str().unwrap()],
        config_dir.path(),
    );
    assert_exit(&set, 0);

    let output = run_in(
        &["export", "videowall", "--format", "svg"],
        config_dir.path(),
    );
    assert_exit(&output, 0);
    assert!(out_dir.join("videowall-front-2x2.svg").exists());
}

#[test]
fn test_export_videowall_backing_with_placements() {
    let config_dir = temp_config_dir();
    let out_path = config_dir.path().join("wall.svg");

    let output = run_in(
        &[
            "export",
            "videowall",
            "--rows",
            "2",
            "--cols",
            "2",
            "--width",
            "1213",
            "--height",
            "684",
            "--view",
            "backing",
            "--flushbox",
            "1000,1500",
            "--offset",
            "bottom=-400",
            "--rail-offset",
            "1=-600",
            "--output",
            out_path.to_str().unwrap(),
        ],
        config_dir.path(),
    );
    assert_exit(&output, 0);

    let svg = fs::read_to_string(&out_path).unwrap();
    assert!(svg.contains("Rail AFFL:"));
    assert!(svg.contains("FB01"));
    assert!(svg.contains("2-2"));
}

#[test]
fn test_export_invalid_arguments() {
    let config_dir = temp_config_dir();
    let out_path = config_dir.path().join("x.svg");
    let out = out_path.to_str().unwrap();

    for args in [
        vec!["export", "elevation", "--view", "side", "--output", out],
        vec!["export", "elevation", "--format", "gif", "--output", out],
        vec!["export", "elevation", "--scale", "0", "--output", out],
        vec!["export", "videowall", "--flushbox", "100", "--output", out],
        vec!["export", "videowall", "--offset", "left=10", "--output", out],
        vec!["export", "videowall", "--rail-offset", "0=10", "--output", out],
    ] {
        let output = run_in(&args, config_dir.path());
        assert_exit(&output, 3);
    }
    assert!(!out_path.exists());
}

#[test]
fn test_export_default_name_has_no_reserved_characters() {
    let config_dir = temp_config_dir();
    let out_dir = config_dir.path().join("drawings");
    fs::create_dir_all(&out_dir).unwrap();

    let output = run_in(
        &[
            "export",
            "elevation",
            "--preset",
            "generic-65",
            "--format",
            "svg",
            "--output",
            out_dir.to_str().unwrap(),
        ],
        config_dir.path(),
    );
    assert_exit(&output, 0);
    assert!(out_dir.join("elevation-front-generic-65.svg").exists());
}
