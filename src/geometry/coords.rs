use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// Smallest number of ordinates a vertex can carry (X and Y).
pub const MIN_AXIS_COUNT: usize = 2;

/// Largest number of ordinates a vertex can carry (X, Y, Z and M).
pub const MAX_AXIS_COUNT: usize = 4;

// Folds -0.0 onto 0.0 and every NaN onto one bit pattern, so equality
// and hashing agree on a single canonical form per ordinate value.
#[allow(clippy::float_cmp)]
fn ordinate_key(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

/// An immutable sequence of vertices stored as one flat ordinate array.
///
/// Every vertex carries the same `axis_count` ordinates: X and Y always,
/// optionally Z and M, addressed by axis index 0 to 3. All geometry
/// kinds store their vertices in sequences; [`CoordSeqBuilder`] is the
/// mutable accumulation buffer that freezes into one.
///
/// Equality and hashing are value-based over the ordinates, with `-0.0`
/// equal to `0.0` and NaN equal to NaN, so sequences work as map keys.
#[derive(Debug, Clone)]
pub struct CoordSeq {
    ordinates: Vec<f64>,
    axis_count: usize,
}

impl CoordSeq {
    /// The empty 2D sequence.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            ordinates: Vec::new(),
            axis_count: MIN_AXIS_COUNT,
        }
    }

    /// Wraps a flat ordinate array.
    ///
    /// # Errors
    ///
    /// Returns an error if `axis_count` is outside `2..=4` or the array
    /// length is not a multiple of it.
    pub fn from_ordinates(axis_count: usize, ordinates: Vec<f64>) -> Result<Self> {
        if !(MIN_AXIS_COUNT..=MAX_AXIS_COUNT).contains(&axis_count) {
            return Err(GeometryError::AxisCountOutOfRange(axis_count));
        }
        if ordinates.len() % axis_count != 0 {
            return Err(GeometryError::RaggedOrdinates {
                len: ordinates.len(),
                axis_count,
            });
        }
        Ok(Self {
            ordinates,
            axis_count,
        })
    }

    /// Builds a 2D sequence from points.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Self {
        let mut ordinates = Vec::with_capacity(points.len() * MIN_AXIS_COUNT);
        for p in points {
            ordinates.push(p.x);
            ordinates.push(p.y);
        }
        Self {
            ordinates,
            axis_count: MIN_AXIS_COUNT,
        }
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.ordinates.len() / self.axis_count
    }

    /// Number of ordinates per vertex.
    #[must_use]
    pub fn axis_count(&self) -> usize {
        self.axis_count
    }

    /// Whether the sequence has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordinates.is_empty()
    }

    /// One ordinate of one vertex. Out-of-range vertex or axis indices
    /// read as NaN rather than failing, as do axes the sequence does
    /// not store.
    #[must_use]
    pub fn ordinate(&self, vertex: usize, axis: usize) -> f64 {
        if axis >= self.axis_count || vertex >= self.vertex_count() {
            return f64::NAN;
        }
        self.ordinates[vertex * self.axis_count + axis]
    }

    /// X ordinate of a vertex (NaN when out of range).
    #[must_use]
    pub fn x(&self, vertex: usize) -> f64 {
        self.ordinate(vertex, 0)
    }

    /// Y ordinate of a vertex (NaN when out of range).
    #[must_use]
    pub fn y(&self, vertex: usize) -> f64 {
        self.ordinate(vertex, 1)
    }

    /// Z ordinate of a vertex (NaN when absent or out of range).
    #[must_use]
    pub fn z(&self, vertex: usize) -> f64 {
        self.ordinate(vertex, 2)
    }

    /// Measure ordinate of a vertex (NaN when absent or out of range).
    #[must_use]
    pub fn m(&self, vertex: usize) -> f64 {
        self.ordinate(vertex, 3)
    }

    /// The 2D position of a vertex.
    #[must_use]
    pub fn point2(&self, vertex: usize) -> Point2 {
        Point2::new(self.x(vertex), self.y(vertex))
    }

    /// Every vertex position projected to 2D, in storage order.
    #[must_use]
    pub fn points_2d(&self) -> Vec<Point2> {
        (0..self.vertex_count()).map(|i| self.point2(i)).collect()
    }

    /// Whether two vertices coincide exactly in X and Y.
    #[must_use]
    pub fn equal_2d(&self, i: usize, j: usize) -> bool {
        self.point2(i) == self.point2(j)
    }

    /// The flat ordinate storage.
    #[must_use]
    pub fn ordinates(&self) -> &[f64] {
        &self.ordinates
    }
}

impl PartialEq for CoordSeq {
    fn eq(&self, other: &Self) -> bool {
        self.axis_count == other.axis_count
            && self.ordinates.len() == other.ordinates.len()
            && self
                .ordinates
                .iter()
                .zip(&other.ordinates)
                .all(|(a, b)| ordinate_key(*a) == ordinate_key(*b))
    }
}

impl Eq for CoordSeq {}

impl std::hash::Hash for CoordSeq {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.axis_count.hash(state);
        for value in &self.ordinates {
            ordinate_key(*value).hash(state);
        }
    }
}

/// Mutable accumulation buffer for a [`CoordSeq`].
///
/// This is the only mutable piece of the model; freeze it with
/// [`build`](Self::build) before sharing. Index violations on the
/// mutating operations panic like slice indexing does, in contrast to
/// sequence reads, which return NaN.
#[derive(Debug, Clone)]
pub struct CoordSeqBuilder {
    ordinates: Vec<f64>,
    axis_count: usize,
}

impl CoordSeqBuilder {
    /// Creates a builder for vertices with `axis_count` ordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if `axis_count` is outside `2..=4`.
    pub fn new(axis_count: usize) -> Result<Self> {
        if !(MIN_AXIS_COUNT..=MAX_AXIS_COUNT).contains(&axis_count) {
            return Err(GeometryError::AxisCountOutOfRange(axis_count));
        }
        Ok(Self {
            ordinates: Vec::new(),
            axis_count,
        })
    }

    /// Appends a vertex by its X and Y; higher axes are left unset
    /// (NaN).
    pub fn push_xy(&mut self, x: f64, y: f64) {
        self.ordinates.push(x);
        self.ordinates.push(y);
        for _ in MIN_AXIS_COUNT..self.axis_count {
            self.ordinates.push(f64::NAN);
        }
    }

    /// Appends a vertex from one ordinate per axis.
    ///
    /// # Panics
    ///
    /// Panics if `vertex.len()` differs from the builder's axis count.
    pub fn push(&mut self, vertex: &[f64]) {
        assert_eq!(
            vertex.len(),
            self.axis_count,
            "vertex carries {} ordinates, builder stores {}",
            vertex.len(),
            self.axis_count
        );
        self.ordinates.extend_from_slice(vertex);
    }

    /// Overwrites one ordinate of an existing vertex.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` or `axis` is out of range.
    pub fn set_ordinate(&mut self, vertex: usize, axis: usize, value: f64) {
        assert!(
            axis < self.axis_count,
            "axis {axis} out of range for axis count {}",
            self.axis_count
        );
        assert!(
            vertex < self.vertex_count(),
            "vertex {vertex} out of range for {} vertices",
            self.vertex_count()
        );
        self.ordinates[vertex * self.axis_count + axis] = value;
    }

    /// Inserts a vertex before position `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is past the end or the ordinate count is
    /// wrong.
    pub fn insert(&mut self, vertex: usize, ordinates: &[f64]) {
        assert_eq!(
            ordinates.len(),
            self.axis_count,
            "vertex carries {} ordinates, builder stores {}",
            ordinates.len(),
            self.axis_count
        );
        assert!(
            vertex <= self.vertex_count(),
            "vertex {vertex} out of range for {} vertices",
            self.vertex_count()
        );
        let at = vertex * self.axis_count;
        self.ordinates.splice(at..at, ordinates.iter().copied());
    }

    /// Removes a vertex.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range.
    pub fn remove(&mut self, vertex: usize) {
        assert!(
            vertex < self.vertex_count(),
            "vertex {vertex} out of range for {} vertices",
            self.vertex_count()
        );
        let at = vertex * self.axis_count;
        self.ordinates.drain(at..at + self.axis_count);
    }

    /// Number of vertices accumulated so far.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.ordinates.len() / self.axis_count
    }

    /// Whether nothing has been accumulated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordinates.is_empty()
    }

    /// Freezes the accumulated vertices into an immutable sequence.
    #[must_use]
    pub fn build(self) -> CoordSeq {
        CoordSeq {
            ordinates: self.ordinates,
            axis_count: self.axis_count,
        }
    }
}
