pub mod dd;
pub mod distance;
pub mod intersect;
pub mod orientation;
pub mod ray_crossing;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;
