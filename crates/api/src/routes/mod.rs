//! HTTP route handlers.

pub mod compliance;
pub mod health;
pub mod schedule;
