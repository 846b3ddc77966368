use super::coords::{CoordSeq, MAX_AXIS_COUNT};

/// Axis-aligned bounds of a geometry: a minimum and maximum per axis.
///
/// The box derived from a geometry with no vertices is a distinguished
/// empty state, not a zero-sized box at the origin. An axis whose
/// ordinates were never set (all NaN) bounds as NaN.
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    axis_count: usize,
    min: [f64; MAX_AXIS_COUNT],
    max: [f64; MAX_AXIS_COUNT],
}

impl BoundingBox {
    /// The empty box.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            axis_count: 0,
            min: [f64::NAN; MAX_AXIS_COUNT],
            max: [f64::NAN; MAX_AXIS_COUNT],
        }
    }

    /// Bounds of every vertex of a sequence.
    #[must_use]
    pub fn of_seq(seq: &CoordSeq) -> Self {
        let mut bbox = Self::empty();
        bbox.expand_seq(seq);
        bbox
    }

    /// Whether the box is the distinguished empty state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.axis_count == 0
    }

    /// Number of axes the box bounds (0 when empty).
    #[must_use]
    pub fn axis_count(&self) -> usize {
        self.axis_count
    }

    /// Minimum ordinate along an axis (NaN when empty or out of range).
    #[must_use]
    pub fn min(&self, axis: usize) -> f64 {
        if axis < self.axis_count {
            self.min[axis]
        } else {
            f64::NAN
        }
    }

    /// Maximum ordinate along an axis (NaN when empty or out of range).
    #[must_use]
    pub fn max(&self, axis: usize) -> f64 {
        if axis < self.axis_count {
            self.max[axis]
        } else {
            f64::NAN
        }
    }

    /// Grows the box to cover every vertex of `seq`.
    pub fn expand_seq(&mut self, seq: &CoordSeq) {
        let axes = seq.axis_count();
        for vertex in 0..seq.vertex_count() {
            if self.is_empty() {
                self.axis_count = axes;
                for axis in 0..axes {
                    let value = seq.ordinate(vertex, axis);
                    self.min[axis] = value;
                    self.max[axis] = value;
                }
                continue;
            }
            let shared = self.axis_count.min(axes);
            for axis in 0..shared {
                let value = seq.ordinate(vertex, axis);
                self.min[axis] = self.min[axis].min(value);
                self.max[axis] = self.max[axis].max(value);
            }
            // Adopt axes the box has not bounded yet.
            for axis in self.axis_count..axes {
                let value = seq.ordinate(vertex, axis);
                self.min[axis] = value;
                self.max[axis] = value;
            }
            self.axis_count = self.axis_count.max(axes);
        }
    }

    /// Grows the box to cover another box.
    pub fn expand_box(&mut self, other: &BoundingBox) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            *self = *other;
            return;
        }
        let shared = self.axis_count.min(other.axis_count);
        for axis in 0..shared {
            self.min[axis] = self.min[axis].min(other.min[axis]);
            self.max[axis] = self.max[axis].max(other.max[axis]);
        }
        for axis in self.axis_count..other.axis_count {
            self.min[axis] = other.min[axis];
            self.max[axis] = other.max[axis];
        }
        self.axis_count = self.axis_count.max(other.axis_count);
    }

    /// Whether the boxes overlap in X and Y. Empty boxes overlap
    /// nothing.
    #[must_use]
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.min[0] <= other.max[0]
            && self.max[0] >= other.min[0]
            && self.min[1] <= other.max[1]
            && self.max[1] >= other.min[1]
    }

    /// Whether the 2D position lies inside or on the box. Always false
    /// for the empty box.
    #[must_use]
    pub fn contains_xy(&self, x: f64, y: f64) -> bool {
        !self.is_empty()
            && x >= self.min[0]
            && x <= self.max[0]
            && y >= self.min[1]
            && y <= self.max[1]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;

    #[test]
    fn bounds_of_a_triangle() {
        let seq = CoordSeq::from_points(&[
            Point2::new(1.0, 5.0),
            Point2::new(-2.0, 0.5),
            Point2::new(4.0, 2.0),
        ]);
        let bbox = BoundingBox::of_seq(&seq);
        assert!(!bbox.is_empty());
        assert!((bbox.min(0) + 2.0).abs() < f64::EPSILON);
        assert!((bbox.max(0) - 4.0).abs() < f64::EPSILON);
        assert!((bbox.min(1) - 0.5).abs() < f64::EPSILON);
        assert!((bbox.max(1) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_sequence_gives_the_empty_box() {
        let bbox = BoundingBox::of_seq(&CoordSeq::empty());
        assert!(bbox.is_empty());
        assert!(bbox.min(0).is_nan());
        assert!(!bbox.contains_xy(0.0, 0.0));
    }

    #[test]
    fn empty_box_is_not_a_point_at_the_origin() {
        let origin = CoordSeq::from_points(&[Point2::new(0.0, 0.0)]);
        let at_origin = BoundingBox::of_seq(&origin);
        assert!(!at_origin.is_empty());
        assert!(at_origin.contains_xy(0.0, 0.0));
        assert!(!BoundingBox::empty().intersects(&at_origin));
    }

    #[test]
    fn expansion_unions_boxes() {
        let mut bbox = BoundingBox::of_seq(&CoordSeq::from_points(&[Point2::new(0.0, 0.0)]));
        let other = BoundingBox::of_seq(&CoordSeq::from_points(&[Point2::new(3.0, -1.0)]));
        bbox.expand_box(&other);
        assert!((bbox.max(0) - 3.0).abs() < f64::EPSILON);
        assert!((bbox.min(1) + 1.0).abs() < f64::EPSILON);
        assert!(bbox.contains_xy(1.5, -0.5));
    }

    #[test]
    fn boundary_counts_as_contained() {
        let bbox = BoundingBox::of_seq(&CoordSeq::from_points(&[
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 2.0),
        ]));
        assert!(bbox.contains_xy(0.0, 1.0));
        assert!(bbox.contains_xy(2.0, 2.0));
        assert!(!bbox.contains_xy(2.0 + 1e-12, 2.0));
    }

    #[test]
    fn unset_higher_axes_bound_as_nan() {
        let seq = CoordSeq::from_ordinates(3, vec![1.0, 2.0, f64::NAN]).unwrap();
        let bbox = BoundingBox::of_seq(&seq);
        assert_eq!(bbox.axis_count(), 3);
        assert!(bbox.min(2).is_nan());
        assert!((bbox.min(0) - 1.0).abs() < f64::EPSILON);
    }
}
