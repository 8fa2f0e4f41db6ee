use tracing::debug;

use super::LineSegment;
use crate::error::{GeometryError, Result};
use crate::math::{point_ops, solve_2x2, Point2, Vector2};

/// An infinite line through `point` along the direction `slope`.
///
/// The parametric form is `P(t) = point + t * slope`. Combined with the
/// Cartesian form `a*x + b*y = k` it gives
///
/// ```text
/// (-Δy)*x + (Δx)*y = (Δx)*Ay - (Δy)*Ax
/// ```
///
/// where `(Ax, Ay)` is `point` and `(Δx, Δy)` is `slope`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    point: Point2,
    slope: Vector2,
}

impl Line {
    /// Creates a new line through `point` with direction `slope`.
    ///
    /// The slope is kept as given, not normalized. Any nonzero slope is
    /// accepted, however short.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if `slope` is exactly zero, and
    /// [`GeometryError::Degenerate`] if it has a non-finite component.
    pub fn new(point: Point2, slope: Vector2) -> Result<Self> {
        if slope == Vector2::zeros() {
            debug!("rejected line with zero direction");
            return Err(GeometryError::ZeroVector.into());
        }
        if !(slope.x.is_finite() && slope.y.is_finite()) {
            debug!(?slope, "rejected line with non-finite direction");
            return Err(
                GeometryError::Degenerate(format!("non-finite line direction {slope:?}")).into(),
            );
        }
        Ok(Self { point, slope })
    }

    /// Creates the line passing through `a` and then `b`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the points coincide.
    pub fn through(a: Point2, b: Point2) -> Result<Self> {
        Self::new(a, point_ops::subtract(&a, &b).coords)
    }

    /// Returns the point the line passes through.
    #[must_use]
    pub fn point(&self) -> &Point2 {
        &self.point
    }

    /// Returns the direction vector of the line.
    #[must_use]
    pub fn slope(&self) -> &Vector2 {
        &self.slope
    }

    /// Returns `(a, b, k)` of the line's equation `a*x + b*y = k`.
    #[must_use]
    pub fn coefficients(&self) -> (f64, f64, f64) {
        cartesian(&self.point, &self.slope)
    }

    /// Finds the point where this line crosses the segment's supporting line.
    ///
    /// The result is not clipped to the segment and may lie beyond either
    /// endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the line is parallel to (or
    /// coincides with) the supporting line, or if the segment has zero length.
    pub fn meet(&self, segment: &LineSegment) -> Result<Point2> {
        let (a, b, k1) = self.coefficients();

        let [start, end] = segment.endpoints();
        let dir = point_ops::subtract(&start, &end).coords;
        let (c, d, k2) = cartesian(&start, &dir);

        let Some((x, y)) = solve_2x2(a, b, c, d, k1, k2) else {
            debug!(line = ?self, ?segment, "line does not meet segment support");
            return Err(GeometryError::Degenerate(
                "line is parallel to the segment's supporting line".into(),
            )
            .into());
        };
        Ok(Point2::new(x, y))
    }
}

impl Default for Line {
    /// The horizontal line through the origin.
    fn default() -> Self {
        Self {
            point: Point2::origin(),
            slope: Vector2::new(1.0, 0.0),
        }
    }
}

fn cartesian(point: &Point2, dir: &Vector2) -> (f64, f64, f64) {
    (-dir.y, dir.x, dir.x * point.y - dir.y * point.x)
}
