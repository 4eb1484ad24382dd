//! Utility functions shared across the application.
//!
//! - [`field_length`] - Character-length validation for entity fields

pub mod field_length;
