//! Technical drawing export.
//!
//! Renderers turn a planner session into a [`Scene`]; the scene serializes to
//! a standalone SVG document that can be written as-is or rasterized to PNG.

pub mod dimension;
pub mod elevation;
pub mod marks;
pub mod raster;
pub mod scene;
pub mod style;
pub mod videowall;

pub use elevation::render_elevation;
pub use raster::{elevation_file_name, videowall_file_name, write_scene, ExportFormat};
pub use scene::{Element, Scene};
pub use videowall::render_videowall;
