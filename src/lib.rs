//! Elevation Architect Library
//!
//! Core functionality for planning display installations on a wall:
//! mounting-height calculation from room scenarios, dual-display and
//! video-wall layout, DISCAS viewing-distance sizing, and SVG/PNG export of
//! dimensioned technical elevations.

// Module declarations
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod services;
