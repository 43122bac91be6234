//! Configuration module for eventto
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::EventtoPaths;
pub use settings::Settings;
