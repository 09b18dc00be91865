//! HTTP handlers for the manual generation service.

pub mod generate;
pub mod health;

pub use generate::{generate_manual, method_not_allowed, preflight};
pub use health::health_check;
