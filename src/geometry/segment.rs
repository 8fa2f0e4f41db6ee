use tracing::debug;

use crate::error::{GeometryError, InputError, PlanarError, Result};
use crate::math::{point_ops, Point2, Vector2};

/// A directed line segment between two endpoints.
///
/// Endpoint order is meaningful: it defines the direction used by
/// [`angle`](Self::angle), [`heading`](Self::heading) and
/// [`direction`](Self::direction), and the order in which the endpoints are
/// drawn. Both endpoints may coincide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    endpoints: [Point2; 2],
}

impl LineSegment {
    /// Creates a segment from its two endpoints.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self {
            endpoints: [start, end],
        }
    }

    /// Creates a segment from its length, midpoint and angle in degrees.
    ///
    /// Endpoint 0 lies on the negative side of the midpoint along the angle,
    /// endpoint 1 on the positive side. A negative angle mirrors the segment
    /// across the horizontal axis through the midpoint.
    #[must_use]
    pub fn from_length(length: f64, midpoint: Point2, angle_degrees: f64) -> Self {
        let radians = angle_degrees.to_radians();
        let dy = length * radians.sin();
        let dx = length * radians.cos();
        Self::new(
            Point2::new(midpoint.x - dx / 2.0, midpoint.y - dy / 2.0),
            Point2::new(midpoint.x + dx / 2.0, midpoint.y + dy / 2.0),
        )
    }

    /// Creates a horizontal segment of the given length centered on the origin.
    #[must_use]
    pub fn centered(length: f64) -> Self {
        Self::from_length(length, Point2::origin(), 0.0)
    }

    /// Returns both endpoints in order.
    #[must_use]
    pub fn endpoints(&self) -> [Point2; 2] {
        self.endpoints
    }

    /// Returns endpoint 0.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.endpoints[0]
    }

    /// Returns endpoint 1.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.endpoints[1]
    }

    /// Returns the vector from endpoint 0 to endpoint 1.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        point_ops::subtract(&self.endpoints[0], &self.endpoints[1]).coords
    }

    /// Returns the Euclidean distance between the endpoints.
    #[must_use]
    pub fn length(&self) -> f64 {
        let [a, b] = self.endpoints;
        ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
    }

    /// Returns the arithmetic mean of the endpoints.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        let [a, b] = self.endpoints;
        point_ops::scale(&point_ops::sum(&a, &[b]), 0.5)
    }

    /// Returns the slope angle of the segment in degrees, in `(-90, 90)`.
    ///
    /// This is the single-quadrant arctangent of `Δy / Δx`, so a segment and
    /// its reverse report the same angle. Use [`heading`](Self::heading) when
    /// the direction matters.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::VerticalSegment`] when `Δx == 0`, which
    /// includes zero-length segments.
    pub fn angle(&self) -> Result<f64> {
        let d = self.direction();
        if d.x == 0.0 {
            debug!(dy = d.y, "angle requested for a vertical segment");
            return Err(GeometryError::VerticalSegment.into());
        }
        Ok((d.y / d.x).atan().to_degrees())
    }

    /// Returns the four-quadrant direction of the segment in degrees, in
    /// `(-180, 180]`.
    ///
    /// A zero-length segment reports `0`.
    #[must_use]
    pub fn heading(&self) -> f64 {
        let d = self.direction();
        d.y.atan2(d.x).to_degrees()
    }
}

impl TryFrom<&[Point2]> for LineSegment {
    type Error = PlanarError;

    fn try_from(points: &[Point2]) -> Result<Self> {
        match points {
            [a, b] => Ok(Self::new(*a, *b)),
            other => Err(InputError::InvalidArgument(format!(
                "a line segment needs exactly 2 endpoints, got {}",
                other.len()
            ))
            .into()),
        }
    }
}
