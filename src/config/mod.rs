//! Configuration module for TripSplit
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - Settings persistence (roster, currency)

pub mod paths;
pub mod settings;

pub use paths::TripPaths;
pub use settings::Settings;
