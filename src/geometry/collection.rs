use std::sync::OnceLock;

use super::bbox::BoundingBox;
use super::{Geometry, Spatial};

/// A heterogeneous collection of geometries, possibly nested.
#[derive(Debug, Clone)]
pub struct GeometryCollection {
    members: Vec<Geometry>,
    bbox: OnceLock<BoundingBox>,
}

impl GeometryCollection {
    /// Creates a collection from its members.
    #[must_use]
    pub fn new(members: Vec<Geometry>) -> Self {
        Self {
            members,
            bbox: OnceLock::new(),
        }
    }

    /// The collection with no members.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// The member geometries in order.
    #[must_use]
    pub fn members(&self) -> &[Geometry] {
        &self.members
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether every member is empty (true for no members).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.iter().all(Spatial::is_empty)
    }

    /// Total number of vertices over all members.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.members.iter().map(Spatial::vertex_count).sum()
    }

    /// Union of the member bounds, computed once and cached.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        *self.bbox.get_or_init(|| {
            let mut bbox = BoundingBox::empty();
            for member in &self.members {
                bbox.expand_box(&member.bounding_box());
            }
            bbox
        })
    }
}

impl PartialEq for GeometryCollection {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl Eq for GeometryCollection {}

impl std::hash::Hash for GeometryCollection {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.members.hash(state);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{LineString, Point};
    use crate::math::Point2;

    const TOL: f64 = 1e-10;

    #[test]
    fn bounds_union_all_members() {
        let collection = GeometryCollection::new(vec![
            Geometry::Point(Point::from_xy(-5.0, 0.0)),
            Geometry::LineString(
                LineString::from_points(&[Point2::new(0.0, 1.0), Point2::new(2.0, 8.0)]).unwrap(),
            ),
        ]);
        let bbox = collection.bounding_box();
        assert!((bbox.min(0) + 5.0).abs() < TOL);
        assert!((bbox.max(1) - 8.0).abs() < TOL);
    }

    #[test]
    fn emptiness_looks_through_members() {
        assert!(GeometryCollection::empty().is_empty());
        let hollow = GeometryCollection::new(vec![Geometry::Point(Point::empty())]);
        assert!(hollow.is_empty());
        assert_eq!(hollow.len(), 1);

        let mixed = GeometryCollection::new(vec![
            Geometry::Point(Point::empty()),
            Geometry::Point(Point::from_xy(1.0, 1.0)),
        ]);
        assert!(!mixed.is_empty());
    }

    #[test]
    fn empty_members_leave_the_box_empty() {
        let hollow = GeometryCollection::new(vec![Geometry::Point(Point::empty())]);
        assert!(hollow.bounding_box().is_empty());
    }
}
