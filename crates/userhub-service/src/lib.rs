//! # Userhub Service
//!
//! Business logic service layer for Userhub. Contains the cache-aside
//! read orchestration and the create use case.

pub mod cache;
pub mod dto;
pub mod user_service;
pub mod user_service_impl;

pub use cache::*;
pub use dto::*;
pub use user_service::*;
pub use user_service_impl::*;
