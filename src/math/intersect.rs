use super::distance::point_segment_distance;
use super::orientation::{orientation, Orientation};
use super::Point2;

/// Result of intersecting two line segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection {
    /// The segments do not meet.
    None,
    /// The segments meet in a single point.
    Point(Point2),
    /// The segments are collinear and share a subsegment.
    Collinear(Point2, Point2),
}

/// Robust intersection of the segments `p1`-`p2` and `q1`-`q2`.
///
/// Classification runs entirely on the exact orientation predicate, so
/// touching endpoints and collinear overlaps are detected reliably. A
/// proper crossing point is computed on translated coordinates and, if
/// round-off still pushes it outside either segment's envelope, snapped
/// to the nearest input endpoint. Where an input endpoint is the
/// intersection, its coordinates are returned bit for bit.
#[must_use]
pub fn segment_intersection(
    p1: Point2,
    p2: Point2,
    q1: Point2,
    q2: Point2,
) -> SegmentIntersection {
    if !envelopes_overlap(p1, p2, q1, q2) {
        return SegmentIntersection::None;
    }

    let p_q1 = orientation(p1, p2, q1);
    let p_q2 = orientation(p1, p2, q2);
    if strictly_same_side(p_q1, p_q2) {
        return SegmentIntersection::None;
    }

    let q_p1 = orientation(q1, q2, p1);
    let q_p2 = orientation(q1, q2, p2);
    if strictly_same_side(q_p1, q_p2) {
        return SegmentIntersection::None;
    }

    let all_collinear = p_q1 == Orientation::Collinear
        && p_q2 == Orientation::Collinear
        && q_p1 == Orientation::Collinear
        && q_p2 == Orientation::Collinear;
    if all_collinear {
        return collinear_intersection(p1, p2, q1, q2);
    }

    let touches = p_q1 == Orientation::Collinear
        || p_q2 == Orientation::Collinear
        || q_p1 == Orientation::Collinear
        || q_p2 == Orientation::Collinear;
    let point = if touches {
        // An endpoint lies on the other segment; reuse its exact
        // coordinates instead of recomputing them.
        if p1 == q1 || p1 == q2 {
            p1
        } else if p2 == q1 || p2 == q2 {
            p2
        } else if p_q1 == Orientation::Collinear {
            q1
        } else if p_q2 == Orientation::Collinear {
            q2
        } else if q_p1 == Orientation::Collinear {
            p1
        } else {
            p2
        }
    } else {
        proper_intersection(p1, p2, q1, q2)
    };
    SegmentIntersection::Point(point)
}

/// Intersection of the infinite lines through `p1`-`p2` and `q1`-`q2`,
/// or `None` when they are parallel.
///
/// Solved in homogeneous coordinates after translating everything by
/// the midpoint of the overlap of the two segment envelopes; the
/// translation is undone on the way out.
#[must_use]
pub fn line_intersection(p1: Point2, p2: Point2, q1: Point2, q2: Point2) -> Option<Point2> {
    let min_x0 = p1.x.min(p2.x);
    let max_x0 = p1.x.max(p2.x);
    let min_y0 = p1.y.min(p2.y);
    let max_y0 = p1.y.max(p2.y);
    let min_x1 = q1.x.min(q2.x);
    let max_x1 = q1.x.max(q2.x);
    let min_y1 = q1.y.min(q2.y);
    let max_y1 = q1.y.max(q2.y);

    let mid_x = (min_x0.max(min_x1) + max_x0.min(max_x1)) / 2.0;
    let mid_y = (min_y0.max(min_y1) + max_y0.min(max_y1)) / 2.0;

    let p1x = p1.x - mid_x;
    let p1y = p1.y - mid_y;
    let p2x = p2.x - mid_x;
    let p2y = p2.y - mid_y;
    let q1x = q1.x - mid_x;
    let q1y = q1.y - mid_y;
    let q2x = q2.x - mid_x;
    let q2y = q2.y - mid_y;

    let px = p1y - p2y;
    let py = p2x - p1x;
    let pw = p1x * p2y - p2x * p1y;
    let qx = q1y - q2y;
    let qy = q2x - q1x;
    let qw = q1x * q2y - q2x * q1y;

    let x = py * qw - qy * pw;
    let y = qx * pw - px * qw;
    let w = px * qy - qx * py;
    let x_int = x / w;
    let y_int = y / w;
    if !x_int.is_finite() || !y_int.is_finite() {
        return None;
    }
    Some(Point2::new(x_int + mid_x, y_int + mid_y))
}

fn strictly_same_side(a: Orientation, b: Orientation) -> bool {
    (a == Orientation::Clockwise && b == Orientation::Clockwise)
        || (a == Orientation::CounterClockwise && b == Orientation::CounterClockwise)
}

// Overlap resolution for four collinear endpoints, by envelope tests.
// A shared endpoint with no further overlap collapses to a point.
fn collinear_intersection(p1: Point2, p2: Point2, q1: Point2, q2: Point2) -> SegmentIntersection {
    let q1_in_p = envelope_contains(p1, p2, q1);
    let q2_in_p = envelope_contains(p1, p2, q2);
    let p1_in_q = envelope_contains(q1, q2, p1);
    let p2_in_q = envelope_contains(q1, q2, p2);

    if q1_in_p && q2_in_p {
        return SegmentIntersection::Collinear(q1, q2);
    }
    if p1_in_q && p2_in_q {
        return SegmentIntersection::Collinear(p1, p2);
    }
    if q1_in_p && p1_in_q {
        if q1 == p1 && !q2_in_p && !p2_in_q {
            return SegmentIntersection::Point(q1);
        }
        return SegmentIntersection::Collinear(q1, p1);
    }
    if q1_in_p && p2_in_q {
        if q1 == p2 && !q2_in_p && !p1_in_q {
            return SegmentIntersection::Point(q1);
        }
        return SegmentIntersection::Collinear(q1, p2);
    }
    if q2_in_p && p1_in_q {
        if q2 == p1 && !q1_in_p && !p2_in_q {
            return SegmentIntersection::Point(q2);
        }
        return SegmentIntersection::Collinear(q2, p1);
    }
    if q2_in_p && p2_in_q {
        if q2 == p2 && !q1_in_p && !p1_in_q {
            return SegmentIntersection::Point(q2);
        }
        return SegmentIntersection::Collinear(q2, p2);
    }
    SegmentIntersection::None
}

// Crossing point for segments known to cross properly, with the
// snap-back repair for round-off.
fn proper_intersection(p1: Point2, p2: Point2, q1: Point2, q2: Point2) -> Point2 {
    let point = line_intersection(p1, p2, q1, q2)
        .unwrap_or_else(|| nearest_endpoint(p1, p2, q1, q2));
    if envelope_contains(p1, p2, point) && envelope_contains(q1, q2, point) {
        point
    } else {
        nearest_endpoint(p1, p2, q1, q2)
    }
}

/// The input endpoint closest to the opposite segment. Always inside
/// both envelopes, which makes it a safe stand-in for a crossing point
/// the division could not deliver.
fn nearest_endpoint(p1: Point2, p2: Point2, q1: Point2, q2: Point2) -> Point2 {
    let mut nearest = p1;
    let mut min_dist = point_segment_distance(p1, q1, q2);

    let dist = point_segment_distance(p2, q1, q2);
    if dist < min_dist {
        min_dist = dist;
        nearest = p2;
    }
    let dist = point_segment_distance(q1, p1, p2);
    if dist < min_dist {
        min_dist = dist;
        nearest = q1;
    }
    let dist = point_segment_distance(q2, p1, p2);
    if dist < min_dist {
        nearest = q2;
    }
    nearest
}

fn envelopes_overlap(p1: Point2, p2: Point2, q1: Point2, q2: Point2) -> bool {
    p1.x.min(p2.x) <= q1.x.max(q2.x)
        && p1.x.max(p2.x) >= q1.x.min(q2.x)
        && p1.y.min(p2.y) <= q1.y.max(q2.y)
        && p1.y.max(p2.y) >= q1.y.min(q2.y)
}

fn envelope_contains(a: Point2, b: Point2, p: Point2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn pt(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn plain_crossing() {
        let result = segment_intersection(pt(0.0, 0.0), pt(2.0, 2.0), pt(0.0, 2.0), pt(2.0, 0.0));
        match result {
            SegmentIntersection::Point(p) => {
                assert!((p.x - 1.0).abs() < TOL && (p.y - 1.0).abs() < TOL);
            }
            other => panic!("expected a point, got {other:?}"),
        }
    }

    #[test]
    fn disjoint_segments_inside_each_others_envelope() {
        let result = segment_intersection(pt(0.0, 0.0), pt(4.0, 4.0), pt(3.0, 0.0), pt(4.0, 1.0));
        assert_eq!(result, SegmentIntersection::None);
    }

    #[test]
    fn far_apart_segments_fail_the_envelope_gate() {
        let result =
            segment_intersection(pt(0.0, 0.0), pt(1.0, 0.0), pt(10.0, 10.0), pt(11.0, 10.0));
        assert_eq!(result, SegmentIntersection::None);
    }

    #[test]
    fn shared_endpoint_is_returned_exactly() {
        let shared = pt(1.0, 1.0);
        let result = segment_intersection(pt(0.0, 0.0), shared, shared, pt(5.0, -3.0));
        assert_eq!(result, SegmentIntersection::Point(shared));
    }

    #[test]
    fn endpoint_touching_the_other_interior_is_exact() {
        // T junction: q1 sits in the middle of the first segment.
        let result = segment_intersection(pt(0.0, 0.0), pt(2.0, 0.0), pt(1.0, 0.0), pt(1.0, 5.0));
        assert_eq!(result, SegmentIntersection::Point(pt(1.0, 0.0)));
    }

    #[test]
    fn collinear_overlap_reports_the_shared_stretch() {
        let result = segment_intersection(pt(0.0, 0.0), pt(4.0, 0.0), pt(1.0, 0.0), pt(6.0, 0.0));
        match result {
            SegmentIntersection::Collinear(a, b) => {
                assert_eq!((a, b), (pt(1.0, 0.0), pt(4.0, 0.0)));
            }
            other => panic!("expected an overlap, got {other:?}"),
        }
    }

    #[test]
    fn contained_collinear_segment_is_the_overlap() {
        let result = segment_intersection(pt(0.0, 0.0), pt(10.0, 0.0), pt(2.0, 0.0), pt(5.0, 0.0));
        assert_eq!(
            result,
            SegmentIntersection::Collinear(pt(2.0, 0.0), pt(5.0, 0.0))
        );
    }

    #[test]
    fn collinear_segments_meeting_at_one_endpoint() {
        let result = segment_intersection(pt(0.0, 0.0), pt(2.0, 0.0), pt(2.0, 0.0), pt(7.0, 0.0));
        assert_eq!(result, SegmentIntersection::Point(pt(2.0, 0.0)));
    }

    #[test]
    fn collinear_disjoint_segments() {
        let result = segment_intersection(pt(0.0, 0.0), pt(1.0, 0.0), pt(2.0, 0.0), pt(3.0, 0.0));
        assert_eq!(result, SegmentIntersection::None);
    }

    #[test]
    fn near_parallel_crossing_stays_inside_both_envelopes() {
        // An ill-conditioned crossing at a very shallow angle.
        let p1 = pt(0.0, 0.0);
        let p2 = pt(1e8, 1.0);
        let q1 = pt(0.0, 1e-7);
        let q2 = pt(1e8, 0.9999999);
        match segment_intersection(p1, p2, q1, q2) {
            SegmentIntersection::Point(p) => {
                assert!(envelope_contains(p1, p2, p), "point left the first envelope");
                assert!(envelope_contains(q1, q2, p), "point left the second envelope");
            }
            other => panic!("expected a point, got {other:?}"),
        }
    }

    #[test]
    fn line_intersection_of_perpendicular_lines() {
        let p = line_intersection(pt(0.0, 3.0), pt(10.0, 3.0), pt(4.0, -5.0), pt(4.0, 20.0));
        let p = p.unwrap();
        assert!((p.x - 4.0).abs() < TOL && (p.y - 3.0).abs() < TOL);
    }

    #[test]
    fn line_intersection_of_parallel_lines_is_none() {
        let p = line_intersection(pt(0.0, 0.0), pt(5.0, 5.0), pt(0.0, 1.0), pt(5.0, 6.0));
        assert_eq!(p, None);
    }
}
