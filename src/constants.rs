//! Application-wide constants.
//!
//! This module defines the application name plus the installation-standard
//! figures (eye levels, table and camera heights, reach limits) that the
//! scenario rules and guide lines are built on. All lengths are millimeters.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Elevation Architect";

/// Seated eye level above finished floor.
pub const EYE_LEVEL_SEATED: f64 = 1200.0;

/// Standing eye level above finished floor.
pub const EYE_LEVEL_STANDING: f64 = 1500.0;

/// Center height of a standard video-conference camera.
pub const CAMERA_HEIGHT_STANDARD: f64 = 1100.0;

/// Physical height of the camera unit.
pub const CAMERA_PHYSICAL_HEIGHT: f64 = 60.0;

/// Physical width of the camera unit (drawing only).
pub const CAMERA_PHYSICAL_WIDTH: f64 = 200.0;

/// Standard meeting table height.
pub const TABLE_HEIGHT: f64 = 750.0;

/// Lowest edge that stays visible to rear rows in a lecture hall.
pub const EDUCATION_MIN_BOTTOM: f64 = 1220.0;

/// Top-edge proxy for the ADA reach range on touch displays.
pub const ADA_REACH_TOP_LIMIT: f64 = 1400.0;

/// Default elevation wall width.
pub const WALL_WIDTH: f64 = 4000.0;

/// Default elevation wall height (standard commercial ceiling).
pub const WALL_HEIGHT: f64 = 2800.0;

/// Default video-wall room height.
pub const VIDEOWALL_ROOM_HEIGHT: f64 = 3000.0;

/// Gap between the two panels of a dual-screen installation.
pub const DUAL_SCREEN_GAP: f64 = 20.0;

/// Clearance kept free around a video wall on each side.
pub const VIDEOWALL_ROOM_BUFFER: f64 = 100.0;

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Largest accepted row or column count of a video wall.
pub const MAX_WALL_GRID: u32 = 64;

/// Largest accepted video-wall panel edge.
pub const MAX_WALL_PANEL_SIZE: f64 = 10_000.0;

/// Largest accepted gap between video-wall panels.
pub const MAX_WALL_GAP: f64 = 1_000.0;
