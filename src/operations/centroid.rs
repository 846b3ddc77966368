use crate::geometry::{Geometry, LinearRing, Polygon};
use crate::math::{Point2, Vector2};

/// Computes the centroid of a geometry.
///
/// The centroid is taken from the highest-dimensional content present:
/// areal geometry dominates lineal geometry, which dominates points.
/// Degenerate content falls through to its effective dimension, so a
/// zero-area polygon is weighed by its boundary and a zero-length
/// chain by its vertices.
pub struct Centroid<'a> {
    geometry: &'a Geometry,
}

impl<'a> Centroid<'a> {
    /// Creates a new `Centroid` query.
    #[must_use]
    pub fn new(geometry: &'a Geometry) -> Self {
        Self { geometry }
    }

    /// Executes the query, returning `None` for an empty input.
    #[must_use]
    pub fn execute(&self) -> Option<Point2> {
        let mut sums = Sums::new();
        sums.add(self.geometry);
        sums.centroid()
    }
}

/// Running sums for all three dimensional tiers at once. Which tier
/// decides is settled only at the end.
struct Sums {
    /// Base vertex the areal triangle fan hangs off, taken from the
    /// first shell seen.
    area_base: Option<Point2>,
    /// Twice the signed area.
    area_sum_2: f64,
    /// Sum of triangle centroids, scaled by three times their weight.
    area_cent_sum_3: Vector2,
    line_length: f64,
    line_cent_sum: Vector2,
    points: Vec<Point2>,
}

impl Sums {
    fn new() -> Self {
        Self {
            area_base: None,
            area_sum_2: 0.0,
            area_cent_sum_3: Vector2::zeros(),
            line_length: 0.0,
            line_cent_sum: Vector2::zeros(),
            points: Vec::new(),
        }
    }

    fn add(&mut self, geometry: &Geometry) {
        match geometry {
            Geometry::Point(point) => {
                if !point.is_empty() {
                    self.add_point(point.position());
                }
            }
            Geometry::LineString(line) => self.add_line(&line.coord_seq().points_2d()),
            Geometry::LinearRing(ring) => self.add_line(&ring.coord_seq().points_2d()),
            Geometry::Polygon(polygon) => self.add_polygon(polygon),
            Geometry::Collection(collection) => {
                for member in collection.members() {
                    self.add(member);
                }
            }
        }
    }

    fn add_polygon(&mut self, polygon: &Polygon) {
        self.add_shell(polygon.shell());
        for hole in polygon.holes() {
            self.add_hole(hole);
        }
    }

    fn add_shell(&mut self, ring: &LinearRing) {
        let points = ring.coord_seq().points_2d();
        if let Some(&first) = points.first() {
            self.area_base = Some(first);
        }
        let positive = !ring.is_ccw();
        for pair in points.windows(2) {
            self.add_triangle(pair[0], pair[1], positive);
        }
        self.add_line(&points);
    }

    fn add_hole(&mut self, ring: &LinearRing) {
        let points = ring.coord_seq().points_2d();
        let positive = ring.is_ccw();
        for pair in points.windows(2) {
            self.add_triangle(pair[0], pair[1], positive);
        }
        self.add_line(&points);
    }

    /// Accumulates the triangle spanned by the fan base and a ring
    /// edge, signed so that holes cancel against the shell.
    fn add_triangle(&mut self, p1: Point2, p2: Point2, positive: bool) {
        let Some(base) = self.area_base else {
            return;
        };
        let sign = if positive { 1.0 } else { -1.0 };
        let area_2 =
            (p1.x - base.x) * (p2.y - base.y) - (p2.x - base.x) * (p1.y - base.y);
        let cent_3 = Vector2::new(base.x + p1.x + p2.x, base.y + p1.y + p2.y);
        self.area_cent_sum_3 += cent_3 * (sign * area_2);
        self.area_sum_2 += sign * area_2;
    }

    fn add_line(&mut self, points: &[Point2]) {
        let mut length = 0.0;
        for pair in points.windows(2) {
            let segment_length = (pair[1] - pair[0]).norm();
            if segment_length > 0.0 {
                length += segment_length;
                let mid_x = (pair[0].x + pair[1].x) / 2.0;
                let mid_y = (pair[0].y + pair[1].y) / 2.0;
                self.line_cent_sum += Vector2::new(mid_x, mid_y) * segment_length;
            }
        }
        self.line_length += length;
        // a chain of coincident vertices still marks a position
        if length <= 0.0 {
            if let Some(&first) = points.first() {
                self.add_point(first);
            }
        }
    }

    fn add_point(&mut self, point: Point2) {
        self.points.push(point);
    }

    fn centroid(mut self) -> Option<Point2> {
        if self.area_sum_2.abs() > 0.0 {
            let scale = 3.0 * self.area_sum_2;
            return Some(Point2::new(
                self.area_cent_sum_3.x / scale,
                self.area_cent_sum_3.y / scale,
            ));
        }
        if self.line_length > 0.0 {
            return Some(Point2::from(self.line_cent_sum / self.line_length));
        }
        if self.points.is_empty() {
            return None;
        }
        // coincident positions carry no extra weight
        self.points
            .sort_by(|a, b| a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y)));
        self.points.dedup();
        let mut sum = Vector2::zeros();
        for point in &self.points {
            sum += point.coords;
        }
        #[allow(clippy::cast_precision_loss)]
        let count = self.points.len() as f64;
        Some(Point2::from(sum / count))
    }
}
