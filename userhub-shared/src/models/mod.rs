/// Database models for Userhub
///
/// This module contains all database models and their persistence
/// operations.
///
/// # Models
///
/// - `user`: The User resource (id, username, email)

pub mod user;
