mod centroid;
mod convex_hull;
mod locate;
mod min_diameter;

pub use centroid::Centroid;
pub use convex_hull::ConvexHull;
pub use locate::{locate_in_polygon, locate_in_ring, Location};
pub use min_diameter::{Diameter, MinimumDiameter};
