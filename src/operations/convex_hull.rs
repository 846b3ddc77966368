use std::cmp::Ordering;

use crate::geometry::{Geometry, GeometryCollection, LineString, LinearRing, Point, Polygon};
use crate::math::orientation::{orientation, Orientation};
use crate::math::Point2;

use super::locate::{locate_in_points, Location};

/// Vertex count above which the input is first reduced to the points
/// not interior to an inner octagon of extremal vertices.
const REDUCTION_THRESHOLD: usize = 50;

/// Computes the convex hull of a geometry's vertices by Graham scan.
///
/// The result keeps only the minimal vertex set: points in the middle
/// of a hull edge are dropped. Inputs without three distinct
/// non-collinear points degrade to lower-dimensional results, down to
/// an empty collection for an empty input.
pub struct ConvexHull {
    points: Vec<Point2>,
}

impl ConvexHull {
    /// Creates a new `ConvexHull` query over a geometry's vertices.
    #[must_use]
    pub fn new(geometry: &Geometry) -> Self {
        Self {
            points: geometry.points_2d(),
        }
    }

    /// Creates a new `ConvexHull` query over bare points.
    #[must_use]
    pub fn from_points(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Executes the query.
    ///
    /// Returns a `Polygon` whose shell winds clockwise for three or
    /// more distinct non-collinear input points, a two-vertex
    /// `LineString` holding the extremes of a collinear input, a
    /// `Point` when every input point coincides, and an empty
    /// collection for an empty input.
    #[must_use]
    pub fn execute(&self) -> Geometry {
        if let Some(few) = self.few_points_result() {
            return few;
        }
        let mut points = self.points.clone();
        if points.len() > REDUCTION_THRESHOLD {
            points = reduce(&points);
        }
        pre_sort(&mut points);
        let ring = graham_scan(&points);
        hull_geometry(&clean_ring(&ring))
    }

    /// Short-circuit for inputs with at most two distinct points.
    fn few_points_result(&self) -> Option<Geometry> {
        let distinct = distinct_within(&self.points, 2)?;
        let geometry = match distinct.as_slice() {
            [] => Geometry::Collection(GeometryCollection::empty()),
            [point] => Geometry::Point(Point::from_xy(point.x, point.y)),
            line => Geometry::LineString(LineString::from_points_unchecked(line)),
        };
        Some(geometry)
    }
}

/// Collects the distinct points in encounter order, giving up with
/// `None` once more than `cap` are seen.
fn distinct_within(points: &[Point2], cap: usize) -> Option<Vec<Point2>> {
    let mut distinct: Vec<Point2> = Vec::with_capacity(cap + 1);
    for &point in points {
        if !distinct.contains(&point) {
            distinct.push(point);
            if distinct.len() > cap {
                return None;
            }
        }
    }
    Some(distinct)
}

/// Drops points interior to the octagon spanned by the extremal
/// vertices in eight directions. Points on the octagon itself stay
/// candidates. The hull of the survivors equals the hull of the full
/// set.
fn reduce(points: &[Point2]) -> Vec<Point2> {
    let Some(octagon) = inner_octagon_ring(points) else {
        return points.to_vec();
    };
    let mut reduced: Vec<Point2> = octagon[..octagon.len() - 1].to_vec();
    for &point in points {
        if locate_in_points(point, &octagon) != Location::Interior {
            reduced.push(point);
        }
    }
    sort_distinct(&mut reduced);
    // the scan seeds its stack with three points
    while reduced.len() < 3 {
        let first = reduced[0];
        reduced.push(first);
    }
    reduced
}

fn inner_octagon_ring(points: &[Point2]) -> Option<Vec<Point2>> {
    let mut ring: Vec<Point2> = Vec::with_capacity(9);
    for corner in octagon_corners(points) {
        if ring.last() != Some(&corner) {
            ring.push(corner);
        }
    }
    // extremal points all in a line: nothing interior to discard
    if ring.len() < 3 {
        return None;
    }
    if ring.first() != ring.last() {
        let first = ring[0];
        ring.push(first);
    }
    Some(ring)
}

fn octagon_corners(points: &[Point2]) -> [Point2; 8] {
    let mut corners = [points[0]; 8];
    for &p in &points[1..] {
        if p.x < corners[0].x {
            corners[0] = p;
        }
        if p.x - p.y < corners[1].x - corners[1].y {
            corners[1] = p;
        }
        if p.y > corners[2].y {
            corners[2] = p;
        }
        if p.x + p.y > corners[3].x + corners[3].y {
            corners[3] = p;
        }
        if p.x > corners[4].x {
            corners[4] = p;
        }
        if p.x - p.y > corners[5].x - corners[5].y {
            corners[5] = p;
        }
        if p.y < corners[6].y {
            corners[6] = p;
        }
        if p.x + p.y < corners[7].x + corners[7].y {
            corners[7] = p;
        }
    }
    corners
}

fn sort_distinct(points: &mut Vec<Point2>) {
    points.sort_by(|a, b| a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y)));
    points.dedup();
}

/// Moves the lowest point (leftmost on ties) to the front and sorts
/// the rest by decreasing polar angle around it.
fn pre_sort(points: &mut [Point2]) {
    for i in 1..points.len() {
        let lower = points[i]
            .y
            .total_cmp(&points[0].y)
            .then_with(|| points[i].x.total_cmp(&points[0].x));
        if lower == Ordering::Less {
            points.swap(0, i);
        }
    }
    let pivot = points[0];
    points[1..].sort_by(|&p, &q| polar_compare(pivot, p, q));
}

fn polar_compare(origin: Point2, p: Point2, q: Point2) -> Ordering {
    match orientation(origin, p, q) {
        Orientation::CounterClockwise => Ordering::Greater,
        Orientation::Clockwise => Ordering::Less,
        // collinear points sort nearest first; both lie in the closed
        // half-plane above the origin, so the ordinates stand in for
        // the distance
        Orientation::Collinear => p.y.total_cmp(&q.y).then_with(|| p.x.total_cmp(&q.x)),
    }
}

/// Clockwise scan over the radially sorted points. Collinear runs
/// survive the scan and are removed by [`clean_ring`].
fn graham_scan(points: &[Point2]) -> Vec<Point2> {
    let mut stack: Vec<Point2> = Vec::with_capacity(points.len() + 1);
    stack.extend_from_slice(&points[..3]);
    for &next in &points[3..] {
        while stack.len() > 1 {
            let top = stack[stack.len() - 1];
            let under = stack[stack.len() - 2];
            if orientation(under, top, next) == Orientation::CounterClockwise {
                stack.pop();
            } else {
                break;
            }
        }
        stack.push(next);
    }
    stack.push(points[0]);
    stack
}

/// Removes repeated vertices and vertices in the middle of a hull
/// edge, keeping the ring closed.
fn clean_ring(ring: &[Point2]) -> Vec<Point2> {
    debug_assert_eq!(ring.first(), ring.last());
    let mut cleaned: Vec<Point2> = Vec::with_capacity(ring.len());
    let mut previous_distinct: Option<Point2> = None;
    for pair in ring.windows(2) {
        let current = pair[0];
        let next = pair[1];
        if current == next {
            continue;
        }
        if let Some(previous) = previous_distinct {
            if is_between(previous, current, next) {
                continue;
            }
        }
        cleaned.push(current);
        previous_distinct = Some(current);
    }
    if let Some(&last) = ring.last() {
        cleaned.push(last);
    }
    cleaned
}

#[allow(clippy::float_cmp)]
fn is_between(p1: Point2, p2: Point2, p3: Point2) -> bool {
    if orientation(p1, p2, p3) != Orientation::Collinear {
        return false;
    }
    if p1.x != p3.x {
        if p1.x <= p2.x && p2.x <= p3.x {
            return true;
        }
        if p3.x <= p2.x && p2.x <= p1.x {
            return true;
        }
    }
    if p1.y != p3.y {
        if p1.y <= p2.y && p2.y <= p3.y {
            return true;
        }
        if p3.y <= p2.y && p2.y <= p1.y {
            return true;
        }
    }
    false
}

/// Turns a cleaned closed ring into the output geometry: a degenerate
/// three-vertex ring means the input was collinear.
fn hull_geometry(ring: &[Point2]) -> Geometry {
    if ring.len() == 3 {
        return Geometry::LineString(LineString::from_points_unchecked(&ring[..2]));
    }
    let shell = LinearRing::from_points_unchecked(ring);
    Geometry::Polygon(Polygon::from_shell(shell))
}
