pub mod intersect_2d;
pub mod point_ops;

pub use intersect_2d::solve_2x2;
pub use point_ops::{add, point_from_coords, scale, subtract};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type, used as a direction (`Δx`, `Δy`).
pub type Vector2 = nalgebra::Vector2<f64>;

/// Integer pixel coordinate.
pub type PixelPoint = nalgebra::Point2<i32>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
