use super::coords::CoordSeq;
use crate::math::distance::{point_line_distance, point_segment_distance};
use crate::math::Point2;

/// One segment of a vertex chain: a transient 2D view, not an owning
/// geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start vertex.
    pub p0: Point2,
    /// End vertex.
    pub p1: Point2,
}

impl Segment {
    /// Creates a segment between two points.
    #[must_use]
    pub fn new(p0: Point2, p1: Point2) -> Self {
        Self { p0, p1 }
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.p1 - self.p0).norm()
    }

    /// Midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        Point2::new((self.p0.x + self.p1.x) / 2.0, (self.p0.y + self.p1.y) / 2.0)
    }

    /// Distance from `p` to the segment.
    #[must_use]
    pub fn distance(&self, p: Point2) -> f64 {
        point_segment_distance(p, self.p0, self.p1)
    }

    /// Distance from `p` to the infinite line carrying the segment.
    #[must_use]
    pub fn distance_perpendicular(&self, p: Point2) -> f64 {
        point_line_distance(p, self.p0, self.p1)
    }

    /// Projection of `p` onto the carrier line. The projection factor
    /// is not clamped, so the result can fall outside the segment; the
    /// segment's own endpoints project to themselves exactly.
    #[must_use]
    pub fn project(&self, p: Point2) -> Point2 {
        if p == self.p0 || p == self.p1 {
            return p;
        }
        let dx = self.p1.x - self.p0.x;
        let dy = self.p1.y - self.p0.y;
        let len_sq = dx * dx + dy * dy;
        if len_sq <= 0.0 {
            return self.p0;
        }
        let r = ((p.x - self.p0.x) * dx + (p.y - self.p0.y) * dy) / len_sq;
        Point2::new(self.p0.x + r * dx, self.p0.y + r * dy)
    }
}

/// Iterator over the segments between consecutive vertices of a
/// sequence.
#[derive(Debug)]
pub struct Segments<'a> {
    seq: &'a CoordSeq,
    next: usize,
}

impl<'a> Segments<'a> {
    pub(crate) fn new(seq: &'a CoordSeq) -> Self {
        Self { seq, next: 1 }
    }
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if self.next >= self.seq.vertex_count() {
            return None;
        }
        let segment = Segment::new(self.seq.point2(self.next - 1), self.seq.point2(self.next));
        self.next += 1;
        Some(segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.seq.vertex_count().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Segments<'_> {}
