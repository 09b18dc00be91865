pub mod generator;
pub mod parser;
pub mod prompt;
pub mod providers;

pub use generator::ManualGenerator;
