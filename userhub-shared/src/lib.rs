//! # Userhub Shared Library
//!
//! This crate contains the data layer shared by the Userhub API server:
//! the database connection pool, embedded migrations, and the `User`
//! model with its persistence operations.
//!
//! ## Module Organization
//!
//! - `db`: Connection pool management and migration runner
//! - `models`: Database models (the `User` resource)

pub mod db;
pub mod models;

/// Current version of the userhub shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
