//! Configuration module for Titt.
//!
//! Handles loading and managing application settings.

mod settings;

pub use settings::{BackendSettings, ExportSettings, GeneralSettings, Settings};
