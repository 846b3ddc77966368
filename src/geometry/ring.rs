use std::sync::OnceLock;

use super::bbox::BoundingBox;
use super::coords::CoordSeq;
use super::segment::{Segment, Segments};
use crate::error::{GeometryError, Result};
use crate::math::intersect::{segment_intersection, SegmentIntersection};
use crate::math::orientation::{orientation, Orientation};
use crate::math::Point2;

/// A closed ring of zero or at least four vertices (the last vertex
/// repeats the first).
///
/// Closure and the vertex-count floor are checked at construction;
/// simplicity is a convention of well-formed data, checked on demand by
/// [`is_simple`](Self::is_simple) rather than enforced. A standalone
/// ring is a linear feature; only as part of a [`Polygon`](super::Polygon)
/// does it bound area.
#[derive(Debug, Clone)]
pub struct LinearRing {
    coords: CoordSeq,
    bbox: OnceLock<BoundingBox>,
}

impl LinearRing {
    /// Creates a ring from a closed sequence.
    ///
    /// # Errors
    ///
    /// Returns an error for one to three vertices, or when the first
    /// and last vertices differ in X or Y.
    pub fn new(coords: CoordSeq) -> Result<Self> {
        let n = coords.vertex_count();
        if n > 0 && n < 4 {
            return Err(GeometryError::TooFewRingVertices(n));
        }
        if n > 0 && !coords.equal_2d(0, n - 1) {
            return Err(GeometryError::UnclosedRing {
                x0: coords.x(0),
                y0: coords.y(0),
                x1: coords.x(n - 1),
                y1: coords.y(n - 1),
            });
        }
        Ok(Self {
            coords,
            bbox: OnceLock::new(),
        })
    }

    /// The empty ring.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            coords: CoordSeq::empty(),
            bbox: OnceLock::new(),
        }
    }

    /// Creates a 2D ring from points.
    ///
    /// # Errors
    ///
    /// Returns an error for too few points or an unclosed chain.
    pub fn from_points(points: &[Point2]) -> Result<Self> {
        Self::new(CoordSeq::from_points(points))
    }

    /// Creates a ring from a flat ordinate array.
    ///
    /// # Errors
    ///
    /// Returns an error for a bad axis count, a ragged array, too few
    /// vertices, or an unclosed chain.
    pub fn from_ordinates(axis_count: usize, ordinates: Vec<f64>) -> Result<Self> {
        Self::new(CoordSeq::from_ordinates(axis_count, ordinates)?)
    }

    // Construction for internally computed rings already known to be
    // closed and long enough.
    pub(crate) fn from_points_unchecked(points: &[Point2]) -> Self {
        debug_assert!(points.is_empty() || points.len() >= 4);
        debug_assert!(points.is_empty() || points[0] == points[points.len() - 1]);
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

    /// Whether the ring has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Number of vertices, the closing duplicate included.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.coords.vertex_count()
    }

    /// Perimeter of the ring.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.segments().map(|s| s.length()).sum()
    }

    /// Iterates the ring's segments in storage order.
    #[must_use]
    pub fn segments(&self) -> Segments<'_> {
        Segments::new(&self.coords)
    }

    /// Bounds of all vertices, computed once and cached.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        *self.bbox.get_or_init(|| BoundingBox::of_seq(&self.coords))
    }

    /// Whether the ring winds counterclockwise.
    ///
    /// Decided by the exact turn at the topmost vertex between its
    /// nearest distinct neighbours, so collinear runs and repeated
    /// vertices along the way do not disturb it. Returns `false` for
    /// the empty ring and for degenerate rings that never turn.
    #[must_use]
    pub fn is_ccw(&self) -> bool {
        let seq = &self.coords;
        // Ignore the closing duplicate.
        let n = seq.vertex_count().saturating_sub(1);
        if n < 3 {
            return false;
        }

        let mut hi_index = 0;
        for i in 1..=n {
            if seq.y(i) > seq.y(hi_index) {
                hi_index = i;
            }
        }
        let hi = seq.point2(hi_index);

        // Nearest distinct vertex before the top, wrapping around.
        let mut i_prev = hi_index;
        loop {
            i_prev = (i_prev + n - 1) % n;
            if seq.point2(i_prev) != hi || i_prev == hi_index {
                break;
            }
        }
        // Nearest distinct vertex after the top.
        let mut i_next = hi_index;
        loop {
            i_next = (i_next + 1) % n;
            if seq.point2(i_next) != hi || i_next == hi_index {
                break;
            }
        }

        let prev = seq.point2(i_prev);
        let next = seq.point2(i_next);
        // A ring that folds back over itself has no turn to read.
        if prev == hi || next == hi || prev == next {
            return false;
        }

        match orientation(prev, hi, next) {
            Orientation::CounterClockwise => true,
            Orientation::Clockwise => false,
            // Flat top: counterclockwise exactly when the walk heads
            // left through it.
            Orientation::Collinear => prev.x > next.x,
        }
    }

    /// Signed area enclosed by the ring.
    ///
    /// This kernel's convention: positive for a clockwise ring,
    /// negative for a counterclockwise one. The shoelace sum is
    /// evaluated on X ordinates shifted by the first vertex, which
    /// keeps the terms small for rings far from the origin.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let seq = &self.coords;
        let n = seq.vertex_count();
        if n < 3 {
            return 0.0;
        }
        let x0 = seq.x(0);
        let mut sum = 0.0;
        for i in 1..n - 1 {
            let x = seq.x(i) - x0;
            let y_prev = seq.y(i - 1);
            let y_next = seq.y(i + 1);
            sum += x * (y_prev - y_next);
        }
        sum / 2.0
    }

    /// Area enclosed by the ring, unsigned.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Whether the ring touches itself only where adjacent segments
    /// share their endpoint.
    ///
    /// Zero-length segments from repeated vertices are skipped.
    /// Quadratic over the segment pairs; meant for validation, not for
    /// hot paths.
    #[must_use]
    pub fn is_simple(&self) -> bool {
        let segments: Vec<Segment> = self.segments().filter(|s| s.p0 != s.p1).collect();
        let count = segments.len();
        if count < 2 {
            return true;
        }
        for i in 0..count {
            for j in (i + 1)..count {
                let a = segments[i];
                let b = segments[j];
                let wraps = i == 0 && j == count - 1;
                let adjacent = j == i + 1 || wraps;
                match segment_intersection(a.p0, a.p1, b.p0, b.p1) {
                    SegmentIntersection::None => {}
                    SegmentIntersection::Point(p) => {
                        if !adjacent {
                            return false;
                        }
                        // Adjacent segments may only meet in the vertex
                        // they share.
                        let shared = if wraps { a.p0 } else { a.p1 };
                        if p != shared {
                            return false;
                        }
                    }
                    SegmentIntersection::Collinear(_, _) => return false,
                }
            }
        }
        true
    }
}

impl PartialEq for LinearRing {
    fn eq(&self, other: &Self) -> bool {
        self.coords == other.coords
    }
}

impl Eq for LinearRing {}

impl std::hash::Hash for LinearRing {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.coords.hash(state);
    }
}
