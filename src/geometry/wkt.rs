//! WKT-flavored [`Display`](std::fmt::Display) renderings.
//!
//! The output is meant for logs and debugging rather than interchange:
//! ordinates print with `{}` so the text stays short, and no parser is
//! provided.

use std::fmt;

use super::{CoordSeq, Geometry, GeometryCollection, LineString, LinearRing, Point, Polygon};

fn axis_tag(axis_count: usize) -> &'static str {
    match axis_count {
        3 => " Z",
        4 => " ZM",
        _ => "",
    }
}

fn write_vertex(f: &mut fmt::Formatter<'_>, seq: &CoordSeq, index: usize) -> fmt::Result {
    write!(f, "{}", seq.ordinate(index, 0))?;
    for axis in 1..seq.axis_count() {
        write!(f, " {}", seq.ordinate(index, axis))?;
    }
    Ok(())
}

fn write_seq(f: &mut fmt::Formatter<'_>, seq: &CoordSeq) -> fmt::Result {
    f.write_str("(")?;
    for index in 0..seq.vertex_count() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write_vertex(f, seq, index)?;
    }
    f.write_str(")")
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "POINT{}", axis_tag(self.coord_seq().axis_count()))?;
        if self.is_empty() {
            return f.write_str(" EMPTY");
        }
        f.write_str(" (")?;
        write_vertex(f, self.coord_seq(), 0)?;
        f.write_str(")")
    }
}

impl fmt::Display for LineString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LINESTRING{}", axis_tag(self.coord_seq().axis_count()))?;
        if self.is_empty() {
            return f.write_str(" EMPTY");
        }
        f.write_str(" ")?;
        write_seq(f, self.coord_seq())
    }
}

impl fmt::Display for LinearRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LINEARRING{}", axis_tag(self.coord_seq().axis_count()))?;
        if self.is_empty() {
            return f.write_str(" EMPTY");
        }
        f.write_str(" ")?;
        write_seq(f, self.coord_seq())
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axis_count = self.shell().coord_seq().axis_count();
        write!(f, "POLYGON{}", axis_tag(axis_count))?;
        if self.is_empty() {
            return f.write_str(" EMPTY");
        }
        f.write_str(" (")?;
        write_seq(f, self.shell().coord_seq())?;
        for hole in self.holes() {
            f.write_str(", ")?;
            write_seq(f, hole.coord_seq())?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for GeometryCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GEOMETRYCOLLECTION")?;
        if self.members().is_empty() {
            return f.write_str(" EMPTY");
        }
        f.write_str(" (")?;
        for (index, member) in self.members().iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            member.fmt(f)?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Geometry::Point(g) => g.fmt(f),
            Geometry::LineString(g) => g.fmt(f),
            Geometry::LinearRing(g) => g.fmt(f),
            Geometry::Polygon(g) => g.fmt(f),
            Geometry::Collection(g) => g.fmt(f),
        }
    }
}
