//! # Unit Components
//!
//! Organizes the unit tests by component, leaf-first: common helpers,
//! predictors, configuration, the engine facade, and simulation support.



/// Unit tests for configuration defaults, parsing, and validation.
pub mod config;
