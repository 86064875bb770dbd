//! # Userhub Config
//!
//! Layered configuration management for Userhub.

pub mod app_config;
pub mod loader;

pub use app_config::*;
pub use loader::*;
