//! Configuration module for siterec
//!
//! Handles loading and managing application settings from TOML files.

mod settings;

pub use settings::{Language, Settings, RECORDINGS_DIR_ENV};
