//! The quadrature-rule container.
//!
//! A [`Quadrature`] stores nodes and weights on the unit reference cell:
//! the unit line `[0,1]`, the unit square `[0,1]²`, and so on. Concrete
//! integration formulas (Gauss, midpoint, tensor products) are built by
//! their consumers and handed in through [`Quadrature::from_parts`] or
//! [`Quadrature::initialize`]; this module only defines the container
//! they fill and the weighted-sum evaluation every consumer performs.
//!
//! A zero-dimensional rule exists so that dimension-independent code can
//! treat an integral over zero dimensions as the evaluation at a single
//! point; see [`Quadrature::degenerate`].

use thiserror::Error;

use crate::geometry::Point;

/// Error type for quadrature construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuadratureError {
    /// Point and weight sequences of unequal length.
    #[error("points/weights length mismatch: {points} points, {weights} weights")]
    LengthMismatch { points: usize, weights: usize },
}

/// A quadrature rule of dimension `DIM`: nodes on the reference cell and
/// one weight per node.
///
/// The container maintains a single invariant: the point and weight
/// sequences have equal length at all times. Fallible constructors check
/// it before any state is built, so a rejected construction leaves nothing
/// observable behind. The only mutation path is [`Quadrature::initialize`],
/// which replaces the whole content under the same check; there is no
/// per-element update.
///
/// Cloning deep-copies both sequences, and equality is structural: same
/// size, and element-wise equal points and weights.
///
/// # Example
/// ```
/// use quad_rs::{Point, Quadrature};
///
/// // One-node midpoint rule on the unit line.
/// let rule = Quadrature::from_parts(vec![Point::<1>::new(0.5)], vec![1.0])?;
/// assert_eq!(rule.size(), 1);
/// assert!((rule.integrate(|_| 1.0) - 1.0).abs() < 1e-14);
/// # Ok::<(), quad_rs::QuadratureError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Quadrature<const DIM: usize> {
    points: Vec<Point<DIM>>,
    weights: Vec<f64>,
}

impl<const DIM: usize> Quadrature<DIM> {
    /// A rule with `n` nodes at the origin and `n` zero weights, meant to
    /// be filled through [`Quadrature::initialize`].
    ///
    /// Also valid for `DIM == 0`: the points carry no coordinate payload,
    /// but each still has a corresponding weight slot.
    pub fn with_size(n: usize) -> Self {
        Self {
            points: vec![Point::origin(); n],
            weights: vec![0.0; n],
        }
    }

    /// Build a rule from nodes and their weights.
    ///
    /// The nodes should lie in the unit cell and the weights typically sum
    /// to the cell volume, but neither is checked; only the lengths are.
    pub fn from_parts(
        points: Vec<Point<DIM>>,
        weights: Vec<f64>,
    ) -> Result<Self, QuadratureError> {
        if points.len() != weights.len() {
            return Err(QuadratureError::LengthMismatch {
                points: points.len(),
                weights: weights.len(),
            });
        }
        Ok(Self { points, weights })
    }

    /// A one-node rule: the given point with weight `1.0`.
    pub fn from_point(point: Point<DIM>) -> Self {
        Self {
            points: vec![point],
            weights: vec![1.0],
        }
    }

    /// Replace the entire content of the rule.
    ///
    /// The length check happens before either sequence is touched, so a
    /// failed call leaves the rule exactly as it was.
    pub fn initialize(
        &mut self,
        points: Vec<Point<DIM>>,
        weights: Vec<f64>,
    ) -> Result<(), QuadratureError> {
        if points.len() != weights.len() {
            return Err(QuadratureError::LengthMismatch {
                points: points.len(),
                weights: weights.len(),
            });
        }
        self.points = points;
        self.weights = weights;
        Ok(())
    }

    /// Number of quadrature nodes (equal to the number of weights).
    #[inline]
    pub fn size(&self) -> usize {
        self.weights.len()
    }

    /// The `i`th quadrature point.
    ///
    /// The bounds check runs in every build profile, not just debug.
    ///
    /// # Panics
    /// Panics if `i >= self.size()`, or if `DIM == 0`: a zero-dimensional
    /// point carries no coordinate information, so only the weights of a
    /// degenerate rule are accessible.
    #[inline]
    pub fn point(&self, i: usize) -> &Point<DIM> {
        assert!(
            DIM > 0,
            "zero-dimensional quadrature points carry no coordinates"
        );
        assert!(
            i < self.size(),
            "quadrature point index {i} out of range for a rule with {} nodes",
            self.size()
        );
        &self.points[i]
    }

    /// The weight of the `i`th quadrature point.
    ///
    /// # Panics
    /// Panics if `i >= self.size()`.
    #[inline]
    pub fn weight(&self, i: usize) -> f64 {
        assert!(
            i < self.size(),
            "quadrature weight index {i} out of range for a rule with {} nodes",
            self.size()
        );
        self.weights[i]
    }

    /// Read-only view of all quadrature points.
    pub fn points(&self) -> &[Point<DIM>] {
        &self.points
    }

    /// Read-only view of all weights.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Approximate the integral of `f` over the reference cell:
    /// `Σ wᵢ f(pᵢ)`.
    pub fn integrate<F>(&self, f: F) -> f64
    where
        F: Fn(&Point<DIM>) -> f64,
    {
        self.points
            .iter()
            .zip(&self.weights)
            .map(|(p, w)| w * f(p))
            .sum()
    }
}

impl Quadrature<0> {
    /// The conventional zero-dimensional rule: a single node with weight
    /// `1.0`.
    ///
    /// An integral over zero dimensions is the evaluation at a single
    /// point, so this is the form projectors combine into one-dimensional
    /// rules. The node itself is not accessible through
    /// [`Quadrature::point`].
    pub fn degenerate() -> Self {
        Self {
            points: vec![Point::origin()],
            weights: vec![1.0],
        }
    }
}
