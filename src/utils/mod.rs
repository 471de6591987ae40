//! Helper functions shared across layers.
//!
//! - [`db_error`] - `sqlx` error classification

pub mod db_error;
