pub mod picking;
pub mod primitives;
