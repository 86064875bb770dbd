//! # Userhub Repository
//!
//! Persistent store for User records, backed by MySQL through SQLx.
//! The store is the authoritative data source; absence of a record is
//! signaled as `Ok(None)`, never as an error.

pub mod mysql;
pub mod pool;
pub mod traits;

pub use mysql::*;
pub use pool::*;
pub use traits::*;
