//! Quadrature rules on the reference cell.

pub mod rule;

pub use rule::{Quadrature, QuadratureError};
