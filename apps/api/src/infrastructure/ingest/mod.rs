pub mod errors;
pub mod loader;
pub mod parser;
