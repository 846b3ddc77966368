use std::sync::OnceLock;

use super::bbox::BoundingBox;
use super::coords::CoordSeq;
use super::segment::Segments;
use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// An open or closed chain of vertices.
///
/// Consecutive duplicate vertices and self-intersections are permitted;
/// only [`LinearRing`](super::LinearRing) adds closure constraints.
#[derive(Debug, Clone)]
pub struct LineString {
    coords: CoordSeq,
    bbox: OnceLock<BoundingBox>,
}

impl LineString {
    /// Creates a line string from a sequence of zero or at least two
    /// vertices.
    ///
    /// # Errors
    ///
    /// Returns an error for a one-vertex sequence.
    pub fn new(coords: CoordSeq) -> Result<Self> {
        if coords.vertex_count() == 1 {
            return Err(GeometryError::SingleVertexLineString);
        }
        Ok(Self {
            coords,
            bbox: OnceLock::new(),
        })
    }

    /// The empty line string.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            coords: CoordSeq::empty(),
            bbox: OnceLock::new(),
        }
    }

    /// Creates a 2D line string from points.
    ///
    /// # Errors
    ///
    /// Returns an error for a single point.
    pub fn from_points(points: &[Point2]) -> Result<Self> {
        Self::new(CoordSeq::from_points(points))
    }

    /// Creates a line string from a flat ordinate array.
    ///
    /// # Errors
    ///
    /// Returns an error for a bad axis count, a ragged array, or a
    /// single vertex.
    pub fn from_ordinates(axis_count: usize, ordinates: Vec<f64>) -> Result<Self> {
        Self::new(CoordSeq::from_ordinates(axis_count, ordinates)?)
    }

    // Construction for internally computed chains whose vertex count is
    // known to be valid.
    pub(crate) fn from_points_unchecked(points: &[Point2]) -> Self {
        debug_assert_ne!(points.len(), 1);
        Self {
            coords: CoordSeq::from_points(points),
            bbox: OnceLock::new(),
        }
    }

    /// Coordinate storage.
    #[must_use]
    pub fn coord_seq(&self) -> &CoordSeq {
        &self.coords
    }

    /// Whether the line string has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.coords.vertex_count()
    }

    /// Whether the first and last vertices coincide exactly in 2D.
    /// The empty line string is not closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        !self.is_empty() && self.coords.equal_2d(0, self.coords.vertex_count() - 1)
    }

    /// Sum of the 2D segment lengths.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.segments().map(|s| s.length()).sum()
    }

    /// Iterates the segments between consecutive vertices.
    #[must_use]
    pub fn segments(&self) -> Segments<'_> {
        Segments::new(&self.coords)
    }

    /// Bounds of all vertices, computed once and cached.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        *self.bbox.get_or_init(|| BoundingBox::of_seq(&self.coords))
    }
}

impl PartialEq for LineString {
    fn eq(&self, other: &Self) -> bool {
        self.coords == other.coords
    }
}

impl Eq for LineString {}

impl std::hash::Hash for LineString {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.coords.hash(state);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn single_vertex_is_rejected() {
        let seq = CoordSeq::from_points(&[Point2::new(1.0, 1.0)]);
        assert!(matches!(
            LineString::new(seq).unwrap_err(),
            GeometryError::SingleVertexLineString
        ));
    }

    #[test]
    fn length_of_an_l_shape() {
        let line = LineString::from_points(&[
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(3.0, 4.0),
        ])
        .unwrap();
        assert!((line.length() - 7.0).abs() < TOL);
        assert!(!line.is_closed());
    }

    #[test]
    fn closure_is_exact_2d_equality() {
        let closed = LineString::from_points(&[
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 0.0),
        ])
        .unwrap();
        assert!(closed.is_closed());

        let almost = LineString::from_points(&[
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1e-12, 0.0),
        ])
        .unwrap();
        assert!(!almost.is_closed(), "no tolerance in closure checks");
        assert!(!LineString::empty().is_closed());
    }

    #[test]
    fn equality_ignores_the_cached_box() {
        let a = LineString::from_points(&[Point2::new(0.0, 0.0), Point2::new(2.0, 1.0)]).unwrap();
        let b = LineString::from_points(&[Point2::new(0.0, 0.0), Point2::new(2.0, 1.0)]).unwrap();
        let _ = a.bounding_box();
        assert_eq!(a, b);
    }

    #[test]
    fn cached_box_matches_a_fresh_computation() {
        let line =
            LineString::from_points(&[Point2::new(-1.0, 2.0), Point2::new(4.0, -3.0)]).unwrap();
        let first = line.bounding_box();
        let second = line.bounding_box();
        assert!((first.min(0) - second.min(0)).abs() < TOL);
        assert!((first.max(1) - second.max(1)).abs() < TOL);
        assert!((first.min(0) + 1.0).abs() < TOL);
    }
}
