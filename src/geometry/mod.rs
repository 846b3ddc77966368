pub mod bbox;
pub mod collection;
pub mod coords;
pub mod line_string;
pub mod point;
pub mod polygon;
pub mod ring;
pub mod segment;
mod wkt;

pub use bbox::BoundingBox;
pub use collection::GeometryCollection;
pub use coords::{CoordSeq, CoordSeqBuilder, MAX_AXIS_COUNT, MIN_AXIS_COUNT};
pub use line_string::LineString;
pub use point::Point;
pub use polygon::Polygon;
pub use ring::LinearRing;
pub use segment::{Segment, Segments};

use crate::math::Point2;

/// Topological dimension of a geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Dimension {
    /// Points and empty geometries.
    Point,
    /// Chains and standalone rings.
    Line,
    /// Polygons.
    Area,
}

/// Access surface shared by every geometry kind.
pub trait Spatial {
    /// Whether the geometry has no vertices.
    fn is_empty(&self) -> bool;

    /// Total number of stored vertices.
    fn vertex_count(&self) -> usize;

    /// Ordinates per vertex. Collections report the widest member.
    fn axis_count(&self) -> usize;

    /// Topological dimension. Collections report the highest member.
    fn dimension(&self) -> Dimension;

    /// Axis-aligned bounds; the empty box for an empty geometry.
    fn bounding_box(&self) -> BoundingBox;
}

/// A geometry value of any kind.
///
/// The closed set of variants stands in for an open type hierarchy:
/// algorithms dispatch by match, and every variant shares the
/// [`Spatial`] surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Geometry {
    /// A single position.
    Point(Point),
    /// An open or closed vertex chain.
    LineString(LineString),
    /// A closed ring.
    LinearRing(LinearRing),
    /// An area with optional holes.
    Polygon(Polygon),
    /// A heterogeneous aggregate.
    Collection(GeometryCollection),
}

impl Geometry {
    /// The 2D positions of every vertex, in storage order. Polygons
    /// list the shell before the holes; collections flatten their
    /// members in order.
    #[must_use]
    pub fn points_2d(&self) -> Vec<Point2> {
        let mut points = Vec::with_capacity(self.vertex_count());
        self.collect_points_2d(&mut points);
        points
    }

    fn collect_points_2d(&self, out: &mut Vec<Point2>) {
        match self {
            Geometry::Point(g) => {
                if !g.is_empty() {
                    out.push(g.position());
                }
            }
            Geometry::LineString(g) => out.extend(g.coord_seq().points_2d()),
            Geometry::LinearRing(g) => out.extend(g.coord_seq().points_2d()),
            Geometry::Polygon(g) => {
                out.extend(g.shell().coord_seq().points_2d());
                for hole in g.holes() {
                    out.extend(hole.coord_seq().points_2d());
                }
            }
            Geometry::Collection(g) => {
                for member in g.members() {
                    member.collect_points_2d(out);
                }
            }
        }
    }

    /// Length of the geometry: 0 for points, chain length for lines
    /// and rings, boundary length for polygons, the sum for
    /// collections.
    #[must_use]
    pub fn length(&self) -> f64 {
        match self {
            Geometry::Point(_) => 0.0,
            Geometry::LineString(g) => g.length(),
            Geometry::LinearRing(g) => g.length(),
            Geometry::Polygon(g) => g.length(),
            Geometry::Collection(g) => g.members().iter().map(Geometry::length).sum(),
        }
    }

    /// Enclosed area: polygons contribute shell minus holes, anything
    /// linear or punctual contributes 0.
    #[must_use]
    pub fn area(&self) -> f64 {
        match self {
            Geometry::Polygon(g) => g.area(),
            Geometry::Collection(g) => g.members().iter().map(Geometry::area).sum(),
            _ => 0.0,
        }
    }
}

impl Spatial for Point {
    fn is_empty(&self) -> bool {
        Point::is_empty(self)
    }

    fn vertex_count(&self) -> usize {
        self.coord_seq().vertex_count()
    }

    fn axis_count(&self) -> usize {
        self.coord_seq().axis_count()
    }

    fn dimension(&self) -> Dimension {
        Dimension::Point
    }

    fn bounding_box(&self) -> BoundingBox {
        Point::bounding_box(self)
    }
}

impl Spatial for LineString {
    fn is_empty(&self) -> bool {
        LineString::is_empty(self)
    }

    fn vertex_count(&self) -> usize {
        LineString::vertex_count(self)
    }

    fn axis_count(&self) -> usize {
        self.coord_seq().axis_count()
    }

    fn dimension(&self) -> Dimension {
        Dimension::Line
    }

    fn bounding_box(&self) -> BoundingBox {
        LineString::bounding_box(self)
    }
}

impl Spatial for LinearRing {
    fn is_empty(&self) -> bool {
        LinearRing::is_empty(self)
    }

    fn vertex_count(&self) -> usize {
        LinearRing::vertex_count(self)
    }

    fn axis_count(&self) -> usize {
        self.coord_seq().axis_count()
    }

    fn dimension(&self) -> Dimension {
        Dimension::Line
    }

    fn bounding_box(&self) -> BoundingBox {
        LinearRing::bounding_box(self)
    }
}

impl Spatial for Polygon {
    fn is_empty(&self) -> bool {
        Polygon::is_empty(self)
    }

    fn vertex_count(&self) -> usize {
        Polygon::vertex_count(self)
    }

    fn axis_count(&self) -> usize {
        self.shell().coord_seq().axis_count()
    }

    fn dimension(&self) -> Dimension {
        Dimension::Area
    }

    fn bounding_box(&self) -> BoundingBox {
        Polygon::bounding_box(self)
    }
}

impl Spatial for GeometryCollection {
    fn is_empty(&self) -> bool {
        GeometryCollection::is_empty(self)
    }

    fn vertex_count(&self) -> usize {
        GeometryCollection::vertex_count(self)
    }

    fn axis_count(&self) -> usize {
        self.members()
            .iter()
            .map(Spatial::axis_count)
            .max()
            .unwrap_or(MIN_AXIS_COUNT)
    }

    fn dimension(&self) -> Dimension {
        self.members()
            .iter()
            .map(Spatial::dimension)
            .max()
            .unwrap_or(Dimension::Point)
    }

    fn bounding_box(&self) -> BoundingBox {
        GeometryCollection::bounding_box(self)
    }
}

impl Spatial for Geometry {
    fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(g) => Spatial::is_empty(g),
            Geometry::LineString(g) => Spatial::is_empty(g),
            Geometry::LinearRing(g) => Spatial::is_empty(g),
            Geometry::Polygon(g) => Spatial::is_empty(g),
            Geometry::Collection(g) => Spatial::is_empty(g),
        }
    }

    fn vertex_count(&self) -> usize {
        match self {
            Geometry::Point(g) => Spatial::vertex_count(g),
            Geometry::LineString(g) => Spatial::vertex_count(g),
            Geometry::LinearRing(g) => Spatial::vertex_count(g),
            Geometry::Polygon(g) => Spatial::vertex_count(g),
            Geometry::Collection(g) => Spatial::vertex_count(g),
        }
    }

    fn axis_count(&self) -> usize {
        match self {
            Geometry::Point(g) => Spatial::axis_count(g),
            Geometry::LineString(g) => Spatial::axis_count(g),
            Geometry::LinearRing(g) => Spatial::axis_count(g),
            Geometry::Polygon(g) => Spatial::axis_count(g),
            Geometry::Collection(g) => Spatial::axis_count(g),
        }
    }

    fn dimension(&self) -> Dimension {
        match self {
            Geometry::Point(g) => Spatial::dimension(g),
            Geometry::LineString(g) => Spatial::dimension(g),
            Geometry::LinearRing(g) => Spatial::dimension(g),
            Geometry::Polygon(g) => Spatial::dimension(g),
            Geometry::Collection(g) => Spatial::dimension(g),
        }
    }

    fn bounding_box(&self) -> BoundingBox {
        match self {
            Geometry::Point(g) => Spatial::bounding_box(g),
            Geometry::LineString(g) => Spatial::bounding_box(g),
            Geometry::LinearRing(g) => Spatial::bounding_box(g),
            Geometry::Polygon(g) => Spatial::bounding_box(g),
            Geometry::Collection(g) => Spatial::bounding_box(g),
        }
    }
}

impl From<Point> for Geometry {
    fn from(g: Point) -> Self {
        Geometry::Point(g)
    }
}

impl From<LineString> for Geometry {
    fn from(g: LineString) -> Self {
        Geometry::LineString(g)
    }
}

impl From<LinearRing> for Geometry {
    fn from(g: LinearRing) -> Self {
        Geometry::LinearRing(g)
    }
}

impl From<Polygon> for Geometry {
    fn from(g: Polygon) -> Self {
        Geometry::Polygon(g)
    }
}

impl From<GeometryCollection> for Geometry {
    fn from(g: GeometryCollection) -> Self {
        Geometry::Collection(g)
    }
}
