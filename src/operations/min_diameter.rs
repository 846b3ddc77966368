use crate::geometry::{Geometry, LineString, LinearRing, Point, Polygon, Segment};
use crate::math::intersect::line_intersection;
use crate::math::Point2;

use super::convex_hull::ConvexHull;

/// Computes the minimum diameter of a geometry.
///
/// The minimum diameter is the smallest width of the convex hull: the
/// closest spacing of two parallel lines that still enclose every
/// vertex. Found by walking the farthest vertex around the hull ring
/// once while the base edge advances.
pub struct MinimumDiameter<'a> {
    geometry: &'a Geometry,
    assume_convex: bool,
}

impl<'a> MinimumDiameter<'a> {
    /// Creates a new `MinimumDiameter` query. The convex hull of the
    /// input is computed first.
    #[must_use]
    pub fn new(geometry: &'a Geometry) -> Self {
        Self {
            geometry,
            assume_convex: false,
        }
    }

    /// Creates a query that trusts the input to already be convex,
    /// skipping the hull computation.
    #[must_use]
    pub fn new_convex(geometry: &'a Geometry) -> Self {
        Self {
            geometry,
            assume_convex: true,
        }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> Diameter {
        if self.assume_convex {
            Diameter::of_convex(convex_points(self.geometry))
        } else {
            let hull = ConvexHull::new(self.geometry).execute();
            Diameter::of_convex(convex_points(&hull))
        }
    }
}

/// The vertices a convex geometry spans, shell only for a polygon.
fn convex_points(geometry: &Geometry) -> Vec<Point2> {
    match geometry {
        Geometry::Polygon(polygon) => polygon.shell().coord_seq().points_2d(),
        other => other.points_2d(),
    }
}

/// Result of a [`MinimumDiameter`] search.
#[derive(Debug, Clone)]
pub struct Diameter {
    width: f64,
    base: Option<Segment>,
    width_point: Option<Point2>,
    hull: Vec<Point2>,
}

impl Diameter {
    fn of_convex(hull: Vec<Point2>) -> Self {
        let (width, base, width_point) = match hull.as_slice() {
            [] => (0.0, None, None),
            &[p] => (0.0, Some(Segment::new(p, p)), Some(p)),
            &[p0, p1] | &[p0, p1, _] => (0.0, Some(Segment::new(p0, p1)), Some(p0)),
            _ => return Self::of_convex_ring(hull),
        };
        Self {
            width,
            base,
            width_point,
            hull,
        }
    }

    /// Caliper walk over a closed convex ring of at least four
    /// vertices. Each hull edge picks up the search for its farthest
    /// vertex where the previous edge left off, so the whole walk is
    /// linear.
    fn of_convex_ring(hull: Vec<Point2>) -> Self {
        let mut width = f64::MAX;
        let mut base = None;
        let mut width_point = None;
        let mut max_index = 1;
        for pair in hull.windows(2) {
            let edge = Segment::new(pair[0], pair[1]);
            let (found_index, found_distance) = max_perpendicular(&hull, edge, max_index);
            if found_distance < width {
                width = found_distance;
                base = Some(edge);
                width_point = Some(hull[found_index]);
            }
            max_index = found_index;
        }
        Self {
            width,
            base,
            width_point,
            hull,
        }
    }

    /// The minimum width; 0 for empty or flat inputs.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.width
    }

    /// The hull vertex at the far end of the diameter.
    #[must_use]
    pub fn width_point(&self) -> Option<Point2> {
        self.width_point
    }

    /// The hull edge the width is measured from, as a two-vertex line;
    /// empty for an empty input.
    #[must_use]
    pub fn supporting_segment(&self) -> LineString {
        match self.base {
            Some(base) => LineString::from_points_unchecked(&[base.p0, base.p1]),
            None => LineString::empty(),
        }
    }

    /// The perpendicular from the supporting edge's line to the
    /// farthest hull vertex; empty for an empty input.
    #[must_use]
    pub fn diameter(&self) -> LineString {
        match (self.base, self.width_point) {
            (Some(base), Some(width_point)) => {
                let base_point = base.project(width_point);
                LineString::from_points_unchecked(&[base_point, width_point])
            }
            _ => LineString::empty(),
        }
    }

    /// The minimum-area rectangle enclosing the input.
    ///
    /// Degenerate inputs fall through to matching degenerate results:
    /// a point for a single position, the supporting segment for a
    /// flat hull, an empty polygon for an empty input.
    #[must_use]
    pub fn minimum_rectangle(&self) -> Geometry {
        let Some(base) = self.base else {
            return Geometry::Polygon(Polygon::empty());
        };
        if self.width <= 0.0 {
            if base.p0 == base.p1 {
                return Geometry::Point(Point::from_xy(base.p0.x, base.p0.y));
            }
            return Geometry::LineString(self.supporting_segment());
        }

        let dx = base.p1.x - base.p0.x;
        let dy = base.p1.y - base.p0.y;

        let mut min_para = f64::MAX;
        let mut max_para = -f64::MAX;
        let mut min_perp = f64::MAX;
        let mut max_perp = -f64::MAX;

        for point in &self.hull {
            let para = dx * point.y - dy * point.x;
            max_para = max_para.max(para);
            min_para = min_para.min(para);

            let perp = -dy * point.y - dx * point.x;
            max_perp = max_perp.max(perp);
            min_perp = min_perp.min(perp);
        }

        let max_perp_line = segment_for_line(-dx, -dy, max_perp);
        let min_perp_line = segment_for_line(-dx, -dy, min_perp);
        let max_para_line = segment_for_line(-dy, dx, max_para);
        let min_para_line = segment_for_line(-dy, dx, min_para);

        let corners = (
            corner(max_para_line, max_perp_line),
            corner(min_para_line, max_perp_line),
            corner(min_para_line, min_perp_line),
            corner(max_para_line, min_perp_line),
        );
        match corners {
            (Some(p0), Some(p1), Some(p2), Some(p3)) => {
                let shell = LinearRing::from_points_unchecked(&[p0, p1, p2, p3, p0]);
                Geometry::Polygon(Polygon::from_shell(shell))
            }
            // the side lines are perpendicular by construction, so a
            // missed corner means the arithmetic overflowed
            _ => Geometry::LineString(self.supporting_segment()),
        }
    }
}

/// Farthest vertex from the line under `base`, searched forward from
/// `start` and stopping at the first decrease.
fn max_perpendicular(points: &[Point2], base: Segment, start: usize) -> (usize, f64) {
    let mut max_distance = base.distance_perpendicular(points[start]);
    let mut next_distance = max_distance;
    let mut max_index = start;
    let mut next_index = max_index;
    while next_distance >= max_distance {
        max_distance = next_distance;
        max_index = next_index;
        next_index = (max_index + 1) % points.len();
        if next_index == start {
            break;
        }
        next_distance = base.distance_perpendicular(points[next_index]);
    }
    (max_index, max_distance)
}

fn corner(a: Segment, b: Segment) -> Option<Point2> {
    line_intersection(a.p0, a.p1, b.p0, b.p1)
}

/// Two points spanning the line `a*x + b*y = c`, parameterized off the
/// larger coefficient.
fn segment_for_line(a: f64, b: f64, c: f64) -> Segment {
    if b.abs() > a.abs() {
        Segment::new(Point2::new(0.0, c / b), Point2::new(1.0, c / b - a / b))
    } else {
        Segment::new(Point2::new(c / a, 0.0), Point2::new(c / a - b / a, 1.0))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::GeometryCollection;

    const TOL: f64 = 1e-10;

    fn geometry_of(points: &[Point2]) -> Geometry {
        let collection = points
            .iter()
            .map(|p| Geometry::Point(Point::from_xy(p.x, p.y)))
            .collect();
        Geometry::Collection(GeometryCollection::new(collection))
    }

    #[test]
    fn unit_square_width_is_one_across_a_side() {
        let square = geometry_of(&[
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]);
        let diameter = MinimumDiameter::new(&square).execute();

        assert!((diameter.length() - 1.0).abs() < TOL);
        let base = diameter.supporting_segment();
        let seq = base.coord_seq();
        // the base lies along a side of the square
        assert!(
            (seq.x(0) - seq.x(1)).abs() < TOL || (seq.y(0) - seq.y(1)).abs() < TOL
        );
        assert!((diameter.diameter().length() - 1.0).abs() < TOL);
    }

    #[test]
    fn long_rectangle_width_is_the_short_side() {
        let rectangle = geometry_of(&[
            Point2::new(0.0, 0.0),
            Point2::new(8.0, 0.0),
            Point2::new(8.0, 2.0),
            Point2::new(0.0, 2.0),
        ]);
        let diameter = MinimumDiameter::new(&rectangle).execute();
        assert!((diameter.length() - 2.0).abs() < TOL);
    }

    #[test]
    fn rotation_does_not_change_the_width() {
        // the 8 x 2 rectangle from above, rotated 30 degrees
        let (sin, cos) = 30.0f64.to_radians().sin_cos();
        let rotate = |x: f64, y: f64| Point2::new(x * cos - y * sin, x * sin + y * cos);
        let rectangle = geometry_of(&[
            rotate(0.0, 0.0),
            rotate(8.0, 0.0),
            rotate(8.0, 2.0),
            rotate(0.0, 2.0),
        ]);
        let diameter = MinimumDiameter::new(&rectangle).execute();
        assert!((diameter.length() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn minimum_rectangle_of_a_square_is_the_square() {
        let square = geometry_of(&[
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]);
        let rectangle = MinimumDiameter::new(&square).execute().minimum_rectangle();
        let Geometry::Polygon(polygon) = &rectangle else {
            panic!("expected a polygon, got {rectangle}");
        };
        assert!((polygon.area() - 1.0).abs() < TOL);

        let bounds = polygon.bounding_box();
        assert!(bounds.min(0).abs() < TOL && bounds.min(1).abs() < TOL);
        assert!((bounds.max(0) - 1.0).abs() < TOL && (bounds.max(1) - 1.0).abs() < TOL);
    }

    #[test]
    fn empty_input_yields_empty_results() {
        let empty = Geometry::Collection(GeometryCollection::empty());
        let diameter = MinimumDiameter::new(&empty).execute();

        assert!(diameter.length().abs() < TOL);
        assert!(diameter.supporting_segment().is_empty());
        assert!(diameter.diameter().is_empty());
        assert_eq!(
            diameter.minimum_rectangle(),
            Geometry::Polygon(Polygon::empty())
        );
    }

    #[test]
    fn single_point_collapses_everything_onto_it() {
        let point = Geometry::Point(Point::from_xy(5.0, 7.0));
        let diameter = MinimumDiameter::new(&point).execute();

        assert!(diameter.length().abs() < TOL);
        assert_eq!(diameter.width_point(), Some(Point2::new(5.0, 7.0)));
        assert_eq!(
            diameter.minimum_rectangle(),
            Geometry::Point(Point::from_xy(5.0, 7.0))
        );
    }

    #[test]
    fn collinear_input_degenerates_to_its_segment() {
        let flat = geometry_of(&[
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(5.0, 5.0),
        ]);
        let diameter = MinimumDiameter::new(&flat).execute();

        assert!(diameter.length().abs() < TOL);
        let rectangle = diameter.minimum_rectangle();
        let Geometry::LineString(segment) = &rectangle else {
            panic!("expected a line, got {rectangle}");
        };
        assert!((segment.length() - 50.0f64.sqrt()).abs() < TOL);
    }

    #[test]
    fn convex_input_can_skip_the_hull() {
        let ring = LinearRing::from_points(&[
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 3.0),
            Point2::new(6.0, 3.0),
            Point2::new(6.0, 0.0),
            Point2::new(0.0, 0.0),
        ])
        .unwrap();
        let polygon = Geometry::Polygon(Polygon::from_shell(ring));

        let direct = MinimumDiameter::new_convex(&polygon).execute();
        let hulled = MinimumDiameter::new(&polygon).execute();
        assert!((direct.length() - 3.0).abs() < TOL);
        assert!((direct.length() - hulled.length()).abs() < TOL);
    }
}
