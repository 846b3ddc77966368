use std::sync::OnceLock;

use super::bbox::BoundingBox;
use super::coords::CoordSeq;
use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// A single position, or the empty point.
#[derive(Debug, Clone)]
pub struct Point {
    coords: CoordSeq,
    bbox: OnceLock<BoundingBox>,
}

impl Point {
    /// Creates a point from a sequence of at most one vertex.
    ///
    /// # Errors
    ///
    /// Returns an error if the sequence has more than one vertex.
    pub fn new(coords: CoordSeq) -> Result<Self> {
        if coords.vertex_count() > 1 {
            return Err(GeometryError::TooManyPointVertices(coords.vertex_count()));
        }
        Ok(Self {
            coords,
            bbox: OnceLock::new(),
        })
    }

    /// The empty point.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            coords: CoordSeq::empty(),
            bbox: OnceLock::new(),
        }
    }

    /// Creates a 2D point.
    #[must_use]
    pub fn from_xy(x: f64, y: f64) -> Self {
        Self {
            coords: CoordSeq::from_points(&[Point2::new(x, y)]),
            bbox: OnceLock::new(),
        }
    }

    /// Creates a point from a flat ordinate array.
    ///
    /// # Errors
    ///
    /// Returns an error for a bad axis count, a ragged array, or more
    /// than one vertex.
    pub fn from_ordinates(axis_count: usize, ordinates: Vec<f64>) -> Result<Self> {
        Self::new(CoordSeq::from_ordinates(axis_count, ordinates)?)
    }

    /// Coordinate storage.
    #[must_use]
    pub fn coord_seq(&self) -> &CoordSeq {
        &self.coords
    }

    /// Whether the point is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// X ordinate (NaN when empty).
    #[must_use]
    pub fn x(&self) -> f64 {
        self.coords.x(0)
    }

    /// Y ordinate (NaN when empty).
    #[must_use]
    pub fn y(&self) -> f64 {
        self.coords.y(0)
    }

    /// The 2D position (NaN ordinates when empty).
    #[must_use]
    pub fn position(&self) -> Point2 {
        self.coords.point2(0)
    }

    /// Bounds of the point; the empty box for the empty point.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        *self.bbox.get_or_init(|| BoundingBox::of_seq(&self.coords))
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.coords == other.coords
    }
}

impl Eq for Point {}

impl std::hash::Hash for Point {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.coords.hash(state);
    }
}
