pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

pub use error::ManualError;
pub use startup::{build_router, AppState, Application};
