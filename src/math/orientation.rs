use super::dd::Dd;
use super::Point2;

/// Relative error bound of the double-precision orientation filter.
/// Determinants smaller than this fraction of the term magnitudes get
/// re-evaluated in extended precision.
pub const DP_SAFE_EPSILON: f64 = 1e-15;

/// Turn direction at `p2` when travelling `p1 -> p2 -> q`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Right turn; `q` lies to the right of the directed line `p1 -> p2`.
    Clockwise,
    /// Left turn; `q` lies to the left of the directed line `p1 -> p2`.
    CounterClockwise,
    /// No turn; the three points lie on one line.
    Collinear,
}

impl Orientation {
    /// The turn seen when the directed line is traversed backwards.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::CounterClockwise => Orientation::Clockwise,
            Orientation::Collinear => Orientation::Collinear,
        }
    }

    fn from_det(det: f64) -> Self {
        if det > 0.0 {
            Orientation::CounterClockwise
        } else if det < 0.0 {
            Orientation::Clockwise
        } else {
            Orientation::Collinear
        }
    }
}

/// Orientation of `q` relative to the directed line `p1 -> p2`.
///
/// The sign returned is always the sign of the true determinant: a
/// double-precision filter answers when its error bound allows, and
/// everything inside the bound is re-evaluated exactly in double-double
/// arithmetic on coordinate differences.
#[must_use]
pub fn orientation(p1: Point2, p2: Point2, q: Point2) -> Orientation {
    match orientation_filter(p1, p2, q) {
        Some(orient) => orient,
        None => orientation_exact(p1, p2, q),
    }
}

/// Double-precision filter. `None` means the determinant magnitude fell
/// inside the error bound and its sign cannot be trusted.
fn orientation_filter(p1: Point2, p2: Point2, q: Point2) -> Option<Orientation> {
    let det_left = (p1.x - q.x) * (p2.y - q.y);
    let det_right = (p1.y - q.y) * (p2.x - q.x);
    let det = det_left - det_right;

    let det_sum = if det_left > 0.0 {
        if det_right <= 0.0 {
            return Some(Orientation::from_det(det));
        }
        det_left + det_right
    } else if det_left < 0.0 {
        if det_right >= 0.0 {
            return Some(Orientation::from_det(det));
        }
        -det_left - det_right
    } else {
        return Some(Orientation::from_det(det));
    };

    let err_bound = DP_SAFE_EPSILON * det_sum;
    if det >= err_bound || -det >= err_bound {
        Some(Orientation::from_det(det))
    } else {
        None
    }
}

// Exact determinant sign in double-double arithmetic. The coordinate
// differences are formed as exact two-term sums first, so no precision
// is lost before the multiplies.
fn orientation_exact(p1: Point2, p2: Point2, q: Point2) -> Orientation {
    let dx1 = Dd::diff(p2.x, p1.x);
    let dy1 = Dd::diff(p2.y, p1.y);
    let dx2 = Dd::diff(q.x, p2.x);
    let dy2 = Dd::diff(q.y, p2.y);
    let det = dx1 * dy2 - dy1 * dx2;
    match det.signum() {
        s if s > 0 => Orientation::CounterClockwise,
        s if s < 0 => Orientation::Clockwise,
        _ => Orientation::Collinear,
    }
}
