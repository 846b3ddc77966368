use super::Point2;

/// Minimum distance from `p` to the segment `a`-`b`.
#[must_use]
pub fn point_segment_distance(p: Point2, a: Point2, b: Point2) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    // Degenerate segment (zero length).
    if len_sq <= 0.0 {
        return (p - a).norm();
    }

    // Projection parameter clamped onto the segment.
    let t = ((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);
    let closest = Point2::new(a.x + t * dx, a.y + t * dy);
    (p - closest).norm()
}

/// Distance from `p` to the infinite line through `a` and `b`.
#[must_use]
pub fn point_line_distance(p: Point2, a: Point2, b: Point2) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    // A degenerate line carrier collapses to its anchor point.
    if len_sq <= 0.0 {
        return (p - a).norm();
    }

    let s = ((a.y - p.y) * dx - (a.x - p.x) * dy) / len_sq;
    s.abs() * len_sq.sqrt()
}
