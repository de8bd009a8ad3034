//! Data models for displays, brackets, scenarios and video walls.
//!
//! This module contains all the core data structures used throughout the application.
//! Models are designed to be independent of rendering and command-line concerns.

pub mod bracket;
pub mod camera;
pub mod display;
pub mod flushbox;
pub mod installation;
pub mod room;
pub mod scenario;
pub mod units;
pub mod videowall;
pub mod warning;

// Re-export all model types
pub use bracket::{BracketProfile, MountingBracket};
pub use camera::CameraPosition;
pub use display::{DisplayDimensions, DisplayPreset};
pub use flushbox::Flushbox;
pub use installation::{InstallationSpec, ReferencePoint, ScreenAnchors, VerticalAnchors};
pub use room::{DisplayCount, RoomDimensions, ViewMode};
pub use scenario::ScenarioKind;
pub use units::{from_screen, to_screen, Millimeters, ScreenY};
pub use videowall::{
    MountingReference, MountingSystem, WallConfiguration, WallDisplay, WallDisplayPreset,
};
pub use warning::{Severity, ValidationWarning};
