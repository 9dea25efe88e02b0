//! Geometric primitives.

pub mod point;

pub use point::Point;
