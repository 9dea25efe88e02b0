//! Fixed-dimension coordinate points.
//!
//! [`Point`] is the basic geometric primitive: a stack-allocated tuple of
//! `DIM` coordinates with a small set of vector operations. Quadrature
//! rules store their nodes as points on the reference cell, and the same
//! type serves for physical coordinates after mapping.

use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

/// A point (or vector) in `DIM`-dimensional space.
///
/// The dimension is a compile-time parameter, so a point is a plain
/// `[f64; DIM]` on the stack with no heap allocation. Prefer passing a
/// `Point<DIM>` to functions that operate on coordinates of a priori
/// unknown dimension, rather than writing per-dimension signatures.
///
/// `Point<0>` is legal and carries no coordinate data; it exists so that
/// zero-dimensional quadrature rules can be handled by dimension-independent
/// code.
///
/// # Example
/// ```
/// use quad_rs::Point;
///
/// let p = Point::<2>::new(3.0, 4.0);
/// assert!((p.distance(&Point::origin()) - 5.0).abs() < 1e-14);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<const DIM: usize> {
    coords: [f64; DIM],
}

impl<const DIM: usize> Default for Point<DIM> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<const DIM: usize> Point<DIM> {
    /// The origin: all coordinates zero.
    pub fn origin() -> Self {
        Self { coords: [0.0; DIM] }
    }

    /// Build a point from a coordinate slice.
    ///
    /// # Panics
    /// Panics if `coords.len() != DIM`.
    pub fn from_slice(coords: &[f64]) -> Self {
        assert!(
            coords.len() == DIM,
            "expected {DIM} coordinates, got {}",
            coords.len()
        );
        let mut values = [0.0; DIM];
        values.copy_from_slice(coords);
        Self { coords: values }
    }

    /// Unit vector in coordinate direction `i`.
    ///
    /// # Panics
    /// Panics if `i >= DIM`.
    pub fn unit_vector(i: usize) -> Self {
        assert!(i < DIM, "direction {i} out of range for a {DIM}D point");
        let mut p = Self::origin();
        p.coords[i] = 1.0;
        p
    }

    /// Read coordinate `i`.
    ///
    /// The bounds check runs in every build profile, not just debug.
    ///
    /// # Panics
    /// Panics if `i >= DIM`.
    #[inline]
    pub fn coord(&self, i: usize) -> f64 {
        assert!(
            i < DIM,
            "coordinate index {i} out of range for a {DIM}D point"
        );
        self.coords[i]
    }

    /// Dot product with `other`.
    pub fn dot(&self, other: &Self) -> f64 {
        let mut sum = 0.0;
        for i in 0..DIM {
            sum += self.coords[i] * other.coords[i];
        }
        sum
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Squared Euclidean norm (avoids the sqrt for comparisons).
    pub fn norm_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Euclidean distance to `p`.
    ///
    /// Zero-dimensional points are all at distance `0.0` from each other.
    /// Non-finite coordinates propagate per IEEE semantics.
    pub fn distance(&self, p: &Self) -> f64 {
        (*self - *p).norm()
    }

    /// Squared distance to `p`.
    pub fn distance_squared(&self, p: &Self) -> f64 {
        (*self - *p).norm_squared()
    }
}

impl Point<1> {
    /// Constructor for one-dimensional points.
    ///
    /// Only `Point<1>` has this arity; calling it on any other dimension
    /// does not compile, so no coordinate can be left uninitialized.
    pub fn new(x: f64) -> Self {
        Self { coords: [x] }
    }
}

impl Point<2> {
    /// Constructor for two-dimensional points.
    pub fn new(x: f64, y: f64) -> Self {
        Self { coords: [x, y] }
    }
}

impl Point<3> {
    /// Constructor for three-dimensional points.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { coords: [x, y, z] }
    }
}

impl<const DIM: usize> Index<usize> for Point<DIM> {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        assert!(
            i < DIM,
            "coordinate index {i} out of range for a {DIM}D point"
        );
        &self.coords[i]
    }
}

impl<const DIM: usize> IndexMut<usize> for Point<DIM> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        assert!(
            i < DIM,
            "coordinate index {i} out of range for a {DIM}D point"
        );
        &mut self.coords[i]
    }
}

impl<const DIM: usize> Neg for Point<DIM> {
    type Output = Self;

    fn neg(mut self) -> Self {
        for c in &mut self.coords {
            *c = -*c;
        }
        self
    }
}

impl<const DIM: usize> Add for Point<DIM> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        for i in 0..DIM {
            self.coords[i] += rhs.coords[i];
        }
        self
    }
}

impl<const DIM: usize> Sub for Point<DIM> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        for i in 0..DIM {
            self.coords[i] -= rhs.coords[i];
        }
        self
    }
}

impl<const DIM: usize> Mul<f64> for Point<DIM> {
    type Output = Self;

    fn mul(mut self, c: f64) -> Self {
        for v in &mut self.coords {
            *v *= c;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-14;

    #[test]
    fn test_constructors_round_trip() {
        let p1 = Point::<1>::new(0.5);
        assert_eq!(p1.coord(0), 0.5);

        let p2 = Point::<2>::new(1.0, 2.0);
        assert_eq!(p2.coord(0), 1.0);
        assert_eq!(p2.coord(1), 2.0);

        let p3 = Point::<3>::new(1.0, 2.0, 3.0);
        assert_eq!(p3.coord(0), 1.0);
        assert_eq!(p3.coord(1), 2.0);
        assert_eq!(p3.coord(2), 3.0);
    }

    #[test]
    fn test_default_is_origin() {
        let p: Point<3> = Point::default();
        for i in 0..3 {
            assert_eq!(p.coord(i), 0.0);
        }
    }

    #[test]
    fn test_unit_vector() {
        for i in 0..3 {
            let e = Point::<3>::unit_vector(i);
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(e.coord(j), expected);
            }
        }
    }

    #[test]
    #[should_panic]
    fn test_unit_vector_out_of_range() {
        let _ = Point::<2>::unit_vector(2);
    }

    #[test]
    fn test_index_write() {
        let mut p: Point<3> = Point::origin();
        for i in 0..3 {
            p[i] = i as f64;
        }
        for i in 0..3 {
            assert_eq!(p.coord(i), i as f64);
        }
    }

    #[test]
    #[should_panic]
    fn test_coord_out_of_range_1d() {
        let p = Point::<1>::new(1.0);
        let _ = p.coord(1);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_2d() {
        let p = Point::<2>::new(1.0, 2.0);
        let _ = p[2];
    }

    #[test]
    fn test_double_negation() {
        let p = Point::<3>::new(1.0, -2.0, 3.0);
        assert_eq!(-(-p), p);
    }

    #[test]
    fn test_negation_does_not_alias() {
        let p = Point::<2>::new(1.0, 2.0);
        let q = -p;
        assert_eq!(p.coord(0), 1.0);
        assert_eq!(q.coord(0), -1.0);
    }

    #[test]
    fn test_distance_3_4_5() {
        let p = Point::<2>::new(3.0, 4.0);
        let origin = Point::<2>::origin();
        assert!((p.distance(&origin) - 5.0).abs() < TOL);
        assert!((p.distance_squared(&origin) - 25.0).abs() < TOL);
    }

    #[test]
    fn test_distance_symmetry() {
        let p = Point::<3>::new(1.0, 2.0, 3.0);
        let q = Point::<3>::new(-1.0, 0.5, 2.0);
        assert_eq!(p.distance(&q), q.distance(&p));
        assert_eq!(p.distance(&p), 0.0);
    }

    #[test]
    fn test_distance_zero_dimensional() {
        let p: Point<0> = Point::origin();
        let q: Point<0> = Point::origin();
        assert_eq!(p.distance(&q), 0.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Point::<2>::new(1.0, 2.0);
        let b = Point::<2>::new(3.0, 4.0);
        assert_eq!(a + b, Point::<2>::new(4.0, 6.0));
        assert_eq!(b - a, Point::<2>::new(2.0, 2.0));
        assert_eq!(a * 2.5, Point::<2>::new(2.5, 5.0));
        assert!((a.dot(&b) - 11.0).abs() < TOL);
    }

    #[test]
    fn test_norm() {
        let p = Point::<3>::new(2.0, 3.0, 6.0);
        assert!((p.norm() - 7.0).abs() < TOL);
        assert!((p.norm_squared() - 49.0).abs() < TOL);
    }

    #[test]
    fn test_from_slice() {
        let p = Point::<3>::from_slice(&[4.0, 5.0, 6.0]);
        assert_eq!(p, Point::<3>::new(4.0, 5.0, 6.0));
    }

    #[test]
    #[should_panic]
    fn test_from_slice_wrong_length() {
        let _ = Point::<3>::from_slice(&[1.0, 2.0]);
    }
}
