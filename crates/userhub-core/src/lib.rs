//! # Userhub Core
//!
//! Core types and error definitions for Userhub.
//! This crate provides the domain model and the error abstractions used
//! across all layers of the application.

pub mod domain;
pub mod error;
pub mod result;

pub use domain::*;
pub use error::*;
pub use result::*;
