//! # Userhub REST
//!
//! REST API layer using Axum for Userhub.
//! Exposes the user create/read endpoints, a health check, and Swagger UI.

pub mod controllers;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
