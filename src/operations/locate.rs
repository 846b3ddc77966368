use crate::geometry::{LinearRing, Polygon};
use crate::math::ray_crossing::RayCrossing;
use crate::math::Point2;

pub use crate::math::ray_crossing::Location;

/// Locates a point relative to the area bounded by a ring.
///
/// The ring may wind either way; a point on the ring itself is
/// [`Location::Boundary`].
#[must_use]
pub fn locate_in_ring(point: Point2, ring: &LinearRing) -> Location {
    let seq = ring.coord_seq();
    let mut counter = RayCrossing::new(point);
    for vertex in 1..seq.vertex_count() {
        counter.count_segment(seq.point2(vertex - 1), seq.point2(vertex));
        if counter.on_segment() {
            return counter.location();
        }
    }
    counter.location()
}

/// Ring location over a bare closed point chain.
pub(crate) fn locate_in_points(point: Point2, ring: &[Point2]) -> Location {
    let mut counter = RayCrossing::new(point);
    for pair in ring.windows(2) {
        counter.count_segment(pair[0], pair[1]);
        if counter.on_segment() {
            return counter.location();
        }
    }
    counter.location()
}

/// Locates a point relative to a polygon, honoring its holes.
///
/// A point inside a hole is [`Location::Exterior`]; a point on any
/// ring, shell or hole, is [`Location::Boundary`].
#[must_use]
pub fn locate_in_polygon(point: Point2, polygon: &Polygon) -> Location {
    if polygon.is_empty() {
        return Location::Exterior;
    }
    if !polygon.bounding_box().contains_xy(point.x, point.y) {
        return Location::Exterior;
    }
    match locate_in_ring(point, polygon.shell()) {
        Location::Interior => {}
        outside => return outside,
    }
    for hole in polygon.holes() {
        match locate_in_ring(point, hole) {
            Location::Interior => return Location::Exterior,
            Location::Boundary => return Location::Boundary,
            Location::Exterior => {}
        }
    }
    Location::Interior
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::LinearRing;

    fn square_ring(lo: f64, hi: f64) -> LinearRing {
        LinearRing::from_points(&[
            Point2::new(lo, lo),
            Point2::new(hi, lo),
            Point2::new(hi, hi),
            Point2::new(lo, hi),
            Point2::new(lo, lo),
        ])
        .unwrap()
    }

    #[test]
    fn ring_winding_does_not_matter() {
        let ccw = square_ring(0.0, 4.0);
        let cw = LinearRing::from_points(&[
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 4.0),
            Point2::new(4.0, 4.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 0.0),
        ])
        .unwrap();

        let inside = Point2::new(2.0, 2.0);
        assert_eq!(locate_in_ring(inside, &ccw), Location::Interior);
        assert_eq!(locate_in_ring(inside, &cw), Location::Interior);

        let outside = Point2::new(5.0, 2.0);
        assert_eq!(locate_in_ring(outside, &ccw), Location::Exterior);
        assert_eq!(locate_in_ring(outside, &cw), Location::Exterior);
    }

    #[test]
    fn ring_edges_and_vertices_are_boundary() {
        let ring = square_ring(0.0, 4.0);
        assert_eq!(locate_in_ring(Point2::new(2.0, 0.0), &ring), Location::Boundary);
        assert_eq!(locate_in_ring(Point2::new(4.0, 4.0), &ring), Location::Boundary);
        assert_eq!(locate_in_ring(Point2::new(0.0, 3.0), &ring), Location::Boundary);
    }

    #[test]
    fn holes_punch_out_the_interior() {
        let polygon =
            Polygon::new(square_ring(0.0, 10.0), vec![square_ring(4.0, 6.0)]).unwrap();

        assert_eq!(
            locate_in_polygon(Point2::new(2.0, 2.0), &polygon),
            Location::Interior
        );
        assert_eq!(
            locate_in_polygon(Point2::new(5.0, 5.0), &polygon),
            Location::Exterior
        );
        assert_eq!(
            locate_in_polygon(Point2::new(4.0, 5.0), &polygon),
            Location::Boundary
        );
        assert_eq!(
            locate_in_polygon(Point2::new(10.0, 5.0), &polygon),
            Location::Boundary
        );
        assert_eq!(
            locate_in_polygon(Point2::new(11.0, 5.0), &polygon),
            Location::Exterior
        );
    }

    #[test]
    fn empty_polygon_has_only_exterior() {
        let polygon = Polygon::empty();
        assert_eq!(
            locate_in_polygon(Point2::new(0.0, 0.0), &polygon),
            Location::Exterior
        );
    }

    #[test]
    fn far_points_reject_on_the_bounding_box() {
        let polygon = Polygon::from_shell(square_ring(0.0, 1.0));
        assert_eq!(
            locate_in_polygon(Point2::new(1e9, 1e9), &polygon),
            Location::Exterior
        );
    }
}
