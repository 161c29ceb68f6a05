//! Configuration module
//!
//! Handles loading settings from YAML files and environment variables.
//! Settings are loaded once in `main` and handed to the components that
//! need them; there is no global settings instance.

mod settings;

pub use settings::*;
