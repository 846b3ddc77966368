use std::sync::OnceLock;

use super::bbox::BoundingBox;
use super::ring::LinearRing;
use crate::error::{GeometryError, Result};

/// An area bounded by one shell ring and zero or more hole rings.
///
/// Holes are expected to lie inside the shell and wind freely; the
/// constructor checks structure, not containment. Area and point
/// location treat every hole as cut out of the shell.
#[derive(Debug, Clone)]
pub struct Polygon {
    shell: LinearRing,
    holes: Vec<LinearRing>,
    bbox: OnceLock<BoundingBox>,
}

impl Polygon {
    /// Creates a polygon from a shell and holes.
    ///
    /// # Errors
    ///
    /// Returns an error if the shell is empty while holes are present.
    pub fn new(shell: LinearRing, holes: Vec<LinearRing>) -> Result<Self> {
        if shell.is_empty() && !holes.is_empty() {
            return Err(GeometryError::HolesWithoutShell);
        }
        Ok(Self {
            shell,
            holes,
            bbox: OnceLock::new(),
        })
    }

    /// Creates a polygon from a shell alone.
    #[must_use]
    pub fn from_shell(shell: LinearRing) -> Self {
        Self {
            shell,
            holes: Vec::new(),
            bbox: OnceLock::new(),
        }
    }

    /// The empty polygon.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_shell(LinearRing::empty())
    }

    /// The outer boundary.
    #[must_use]
    pub fn shell(&self) -> &LinearRing {
        &self.shell
    }

    /// The inner boundaries.
    #[must_use]
    pub fn holes(&self) -> &[LinearRing] {
        &self.holes
    }

    /// Whether the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shell.is_empty()
    }

    /// Total number of vertices over all rings.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.shell.vertex_count() + self.holes.iter().map(LinearRing::vertex_count).sum::<usize>()
    }

    /// Total boundary length, holes included.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.shell.length() + self.holes.iter().map(LinearRing::length).sum::<f64>()
    }

    /// Enclosed area: the shell's area minus the holes' areas.
    #[must_use]
    pub fn area(&self) -> f64 {
        let mut area = self.shell.area();
        for hole in &self.holes {
            area -= hole.area();
        }
        area
    }

    /// Bounds of the shell, computed once and cached. Holes lie inside
    /// the shell by convention and do not widen the box.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        *self
            .bbox
            .get_or_init(|| BoundingBox::of_seq(self.shell.coord_seq()))
    }
}

impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        self.shell == other.shell && self.holes == other.holes
    }
}

impl Eq for Polygon {}

impl std::hash::Hash for Polygon {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.shell.hash(state);
        self.holes.hash(state);
    }
}
