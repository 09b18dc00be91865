//! Domain models for the manual generation service.

pub mod manual;

pub use manual::{GenerationRequest, GenerationResult, ManualData, REQUIRED_FIELDS};
