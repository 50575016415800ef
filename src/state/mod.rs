pub mod config;
pub mod document;
pub mod series;
pub mod viewer_state;
