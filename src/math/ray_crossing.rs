use super::orientation::{orientation, Orientation};
use super::Point2;

/// Topological position of a point relative to a ring or an area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Inside the area.
    Interior,
    /// Exactly on the ring.
    Boundary,
    /// Outside the area.
    Exterior,
}

/// Crossing counter for the rightward horizontal ray from a query
/// point, fed one ring segment at a time.
///
/// Vertex-counting rule: an edge is counted when it straddles the ray
/// with its upper endpoint strictly above it, so a vertex shared by two
/// edges contributes exactly one crossing. Horizontal segments at the
/// ray height and any segment passing through the query point mark the
/// point as on the boundary instead of counting.
#[derive(Debug)]
pub struct RayCrossing {
    point: Point2,
    crossings: u32,
    on_segment: bool,
}

impl RayCrossing {
    /// Starts a count for the given query point.
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self {
            point,
            crossings: 0,
            on_segment: false,
        }
    }

    /// Accumulates one ring segment.
    #[allow(clippy::float_cmp)]
    pub fn count_segment(&mut self, p1: Point2, p2: Point2) {
        let p = self.point;

        // Entirely left of the query point: cannot cross the ray.
        if p1.x < p.x && p2.x < p.x {
            return;
        }

        if p == p2 {
            self.on_segment = true;
            return;
        }

        // Horizontal segment at the ray height: boundary if the query
        // X falls inside its span, otherwise ignored.
        if p1.y == p.y && p2.y == p.y {
            let min_x = p1.x.min(p2.x);
            let max_x = p1.x.max(p2.x);
            if p.x >= min_x && p.x <= max_x {
                self.on_segment = true;
            }
            return;
        }

        // Count edges straddling the ray, endpoints half-open so a
        // shared vertex is counted once.
        if (p1.y > p.y && p2.y <= p.y) || (p2.y > p.y && p1.y <= p.y) {
            let mut orient = orientation(p1, p2, p);
            if orient == Orientation::Collinear {
                self.on_segment = true;
                return;
            }
            // Normalize to an upward edge.
            if p2.y < p1.y {
                orient = orient.reversed();
            }
            if orient == Orientation::CounterClockwise {
                self.crossings += 1;
            }
        }
    }

    /// Whether any counted segment passed through the query point.
    /// When this turns true the final location is already known and the
    /// caller may stop feeding segments.
    #[must_use]
    pub fn on_segment(&self) -> bool {
        self.on_segment
    }

    /// Classification from the segments seen so far.
    #[must_use]
    pub fn location(&self) -> Location {
        if self.on_segment {
            return Location::Boundary;
        }
        if self.crossings % 2 == 1 {
            return Location::Interior;
        }
        Location::Exterior
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn locate_in_square(p: Point2) -> Location {
        // Unit square, counterclockwise.
        let ring = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.0, 0.0),
        ];
        let mut counter = RayCrossing::new(p);
        for pair in ring.windows(2) {
            counter.count_segment(pair[0], pair[1]);
        }
        counter.location()
    }

    #[test]
    fn center_is_interior() {
        assert_eq!(locate_in_square(Point2::new(0.5, 0.5)), Location::Interior);
    }

    #[test]
    fn outside_is_exterior() {
        assert_eq!(locate_in_square(Point2::new(1.5, 0.5)), Location::Exterior);
        assert_eq!(locate_in_square(Point2::new(-0.5, 0.5)), Location::Exterior);
    }

    #[test]
    fn edge_and_vertex_are_boundary() {
        assert_eq!(locate_in_square(Point2::new(1.0, 0.5)), Location::Boundary);
        assert_eq!(locate_in_square(Point2::new(0.0, 0.0)), Location::Boundary);
    }

    #[test]
    fn ray_through_a_vertex_counts_once() {
        // The ray from this point passes exactly through the ring
        // vertex (4, 0); the half-open rule counts it once.
        let ring = [
            Point2::new(0.0, 0.0),
            Point2::new(2.0, -1.0),
            Point2::new(4.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(0.0, 0.0),
        ];
        let mut counter = RayCrossing::new(Point2::new(1.0, 0.0));
        for pair in ring.windows(2) {
            counter.count_segment(pair[0], pair[1]);
        }
        assert_eq!(counter.location(), Location::Interior);
    }

    #[test]
    fn horizontal_edge_on_the_ray() {
        // Query sits level with a horizontal top edge but left of it.
        let ring = [
            Point2::new(2.0, 1.0),
            Point2::new(4.0, 1.0),
            Point2::new(4.0, 3.0),
            Point2::new(2.0, 3.0),
            Point2::new(2.0, 1.0),
        ];
        let mut counter = RayCrossing::new(Point2::new(0.0, 1.0));
        for pair in ring.windows(2) {
            counter.count_segment(pair[0], pair[1]);
        }
        assert_eq!(counter.location(), Location::Exterior);

        let mut on_edge = RayCrossing::new(Point2::new(3.0, 1.0));
        for pair in ring.windows(2) {
            on_edge.count_segment(pair[0], pair[1]);
        }
        assert_eq!(on_edge.location(), Location::Boundary);
    }
}
