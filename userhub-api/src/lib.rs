//! # Userhub API Server Library
//!
//! This library provides the core functionality for the Userhub API
//! server: a small REST backend exposing the User resource.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
