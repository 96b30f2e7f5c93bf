/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `users`: User resource endpoints (list, create, fetch-by-id)

pub mod health;
pub mod users;
