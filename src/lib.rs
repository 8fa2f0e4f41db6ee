//! A small planar geometry kernel.
//!
//! Points are [`nalgebra`] points with `f64` coordinates. On top of them the
//! crate provides [`LineSegment`] (built from endpoints or from
//! length/midpoint/angle), infinite [`Line`]s and their intersection, plus the
//! pure pixel mapping a drawing layer needs to put this geometry on screen.

pub mod error;
pub mod geometry;
pub mod math;
pub mod plot;
pub mod viewport;

pub use error::{ErrorKind, PlanarError, Result};
pub use geometry::{Line, LineSegment};
pub use math::{PixelPoint, Point2, Vector2};
