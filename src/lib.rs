//! Process-statistics trace viewer.
//!
//! Parses `name ---> value` trace files split into `==================`
//! sections, turns each named trace into an independently normalized,
//! colored series and drives a planar orthographic camera over the result.

pub mod app;
pub mod data;
pub mod error;
pub mod plot2d;
pub mod render;
pub mod state;
pub mod ui;

pub use error::{LoadError, ParseError};
