//! Shared utilities for the Audit Scheduler backend.
//!
//! This crate provides common functionality used across the other crates:
//! - Custom validation functions referenced from `validator` derives

pub mod validation;
