//! Sorted, frozen 2D point storage plus the orientation predicate.
//!
//! Purpose
//! - Give every point a stable index (its rank in x-sorted order) that the
//!   tracer and any renderer can share.
//! - Provide the single geometric primitive the hull needs: the signed area of
//!   an ordered triple, computed without trigonometry, roots, or division.
//!
//! Code cross-refs: `tracer::HullTracer`, `scatter::draw_points`

use nalgebra::Vector2;

use crate::error::HullError;

/// A point in the plane; `x` and `y` are the two coordinates.
pub type Point = Vector2<f64>;

/// Points sorted ascending by `x`, frozen at construction.
///
/// Invariants:
/// - Non-empty.
/// - Sorted by `x` (stable: ties keep input order), never reordered later.
/// - `source[i]` is the position of `pts[i]` in the slice passed to `build`.
#[derive(Clone, Debug)]
pub struct PointSet {
    pts: Vec<Point>,
    source: Vec<usize>,
}

impl PointSet {
    /// Sort `points` by `x` and freeze them. Fails only on empty input.
    pub fn build(points: &[Point]) -> Result<Self, HullError> {
        if points.is_empty() {
            return Err(HullError::EmptyInput);
        }
        let mut order: Vec<usize> = (0..points.len()).collect();
        // sort_by is stable, so equal x keeps insertion order.
        order.sort_by(|&a, &b| points[a].x.total_cmp(&points[b].x));
        let pts = order.iter().map(|&i| points[i]).collect();
        Ok(Self { pts, source: order })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.pts
    }

    /// Index of the extreme point in x (ties: the one sorted first).
    #[inline]
    pub fn leftmost(&self) -> usize {
        0
    }

    pub fn at(&self, index: usize) -> Result<Point, HullError> {
        self.pts.get(index).copied().ok_or(HullError::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Position of sorted point `index` in the caller's original input.
    pub fn source_index(&self, index: usize) -> Result<usize, HullError> {
        self.source
            .get(index)
            .copied()
            .ok_or(HullError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Signed area (cross-product form) of `(p[a], p[b], p[c])`.
    ///
    /// Positive: `c` strictly left of the ray `a→b` (counter-clockwise turn).
    /// Zero: collinear. Negative: clockwise turn.
    pub fn orientation(&self, a: usize, b: usize, c: usize) -> Result<f64, HullError> {
        let pa = self.at(a)?;
        let pb = self.at(b)?;
        let pc = self.at(c)?;
        Ok(signed_area(pa, pb, pc))
    }

    /// Collinear tie-break: does `c` lie on the same side of `a` as `b`, strictly farther out?
    ///
    /// Only meaningful when `orientation(a, b, c) == 0`. Uses squared lengths.
    pub fn extends_beyond(&self, a: usize, b: usize, c: usize) -> Result<bool, HullError> {
        Ok(extends_beyond(self.at(a)?, self.at(b)?, self.at(c)?))
    }
}

#[inline]
pub(crate) fn signed_area(a: Point, b: Point, c: Point) -> f64 {
    a.x * (b.y - c.y) - a.y * (b.x - c.x) + (b.x * c.y - b.y * c.x)
}

#[inline]
pub(crate) fn extends_beyond(a: Point, b: Point, c: Point) -> bool {
    let ab = b - a;
    let ac = c - a;
    ab.dot(&ac) > 0.0 && ac.norm_squared() > ab.norm_squared()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn build_rejects_empty_input() {
        assert_eq!(PointSet::build(&[]).unwrap_err(), HullError::EmptyInput);
    }

    #[test]
    fn build_sorts_by_x_and_keeps_tie_order() {
        let input = vec![
            vector![3.0, 0.0],
            vector![1.0, 5.0],
            vector![1.0, -2.0],
            vector![-4.0, 1.0],
        ];
        let set = PointSet::build(&input).unwrap();
        let xs: Vec<f64> = set.points().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![-4.0, 1.0, 1.0, 3.0]);
        // (1,5) came before (1,-2) in the input.
        assert_eq!(set.at(1).unwrap(), vector![1.0, 5.0]);
        assert_eq!(set.at(2).unwrap(), vector![1.0, -2.0]);
        let sources: Vec<usize> = (0..set.len())
            .map(|i| set.source_index(i).unwrap())
            .collect();
        assert_eq!(sources, vec![3, 1, 2, 0]);
    }

    #[test]
    fn at_out_of_range() {
        let set = PointSet::build(&[vector![0.0, 0.0]]).unwrap();
        assert_eq!(
            set.at(1).unwrap_err(),
            HullError::IndexOutOfRange { index: 1, len: 1 }
        );
        assert!(set.orientation(0, 0, 7).is_err());
        assert!(set.source_index(3).is_err());
    }

    #[test]
    fn orientation_sign_convention() {
        let set = PointSet::build(&[
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![2.0, 0.0],
            vector![1.0, -1.0],
        ])
        .unwrap();
        // Sorted: 0:(0,0) 1:(1,0) 2:(1,1) 3:(1,-1) 4:(2,0)
        assert!(set.orientation(0, 1, 2).unwrap() > 0.0);
        assert!(set.orientation(0, 1, 3).unwrap() < 0.0);
        assert_eq!(set.orientation(0, 1, 4).unwrap(), 0.0);
        // Unit right triangle has area 1/2, the determinant is twice that.
        assert!((set.orientation(0, 1, 2).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn orientation_matches_cross_product_seeded() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let a = vector![rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)];
            let b = vector![rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)];
            let c = vector![rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)];
            let ab = b - a;
            let ac = c - a;
            let expected = ab.x * ac.y - ab.y * ac.x;
            assert!((signed_area(a, b, c) - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn extends_beyond_requires_same_side_and_farther() {
        let set = PointSet::build(&[
            vector![-1.0, -1.0],
            vector![0.0, 0.0],
            vector![1.0, 1.0],
            vector![2.0, 2.0],
        ])
        .unwrap();
        assert!(set.extends_beyond(1, 2, 3).unwrap());
        assert!(!set.extends_beyond(1, 3, 2).unwrap());
        // Opposite side of the origin point, even though equally far.
        assert!(!set.extends_beyond(1, 2, 0).unwrap());
    }
}
