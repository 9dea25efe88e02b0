//! # quad-rs
//!
//! Reference-cell quadrature primitives for finite-element style codes.
//!
//! This crate provides the two building blocks everything else consumes:
//! - Fixed-dimension coordinate points ([`Point`])
//! - A quadrature-rule container ([`Quadrature`]): nodes plus weights on
//!   the unit line, unit square, and so on, with a degenerate
//!   zero-dimensional form for dimension-independent code
//!
//! Concrete rule generators (Gauss, midpoint, tensor products) live with
//! their consumers; this crate defines the container they fill and the
//! weighted-sum evaluation that consumes it.

pub mod geometry;
pub mod quadrature;

// Re-export main types for convenience
pub use geometry::Point;
pub use quadrature::{Quadrature, QuadratureError};
