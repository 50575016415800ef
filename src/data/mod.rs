pub mod loader;
pub mod parser;
