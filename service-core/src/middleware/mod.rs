pub mod cors;
pub mod tracing;

pub use cors::permissive_cors_middleware;
pub use tracing::{REQUEST_ID_HEADER, request_id_middleware};
