//! Mapping from drawing units to window pixels.
//!
//! Drawing space has `+x` to the right and `+y` up. Pixel space has its
//! origin at the window's top-left corner with rows growing downward. The
//! [`PixelCoordSystem`] places the drawing origin relative to the window
//! center and sets how many drawing units make up one pixel.

use tracing::debug;

use crate::error::{InputError, Result};
use crate::math::{PixelPoint, Point2};

/// Window dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    /// Creates a window size from pixel columns and rows.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the pixel at the center of the window.
    #[must_use]
    pub fn center(&self) -> PixelPoint {
        PixelPoint::new(
            round_px(f64::from(self.width) / 2.0),
            round_px(f64::from(self.height) / 2.0),
        )
    }
}

/// Placement and zoom of drawing space inside a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelCoordSystem {
    scale: f64,
    origin: Point2,
}

impl PixelCoordSystem {
    /// Creates a coordinate system.
    ///
    /// At `scale` N one pixel spans N drawing units. `origin` is the pixel
    /// offset of the drawing origin from the window center, with `+y`
    /// pointing down the screen.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidArgument`] if `scale` is not a positive
    /// finite number.
    pub fn new(scale: f64, origin: Point2) -> Result<Self> {
        if !(scale.is_finite() && scale > 0.0) {
            debug!(scale, "rejected pixel coordinate system scale");
            return Err(InputError::InvalidArgument(format!(
                "pixel coordinate scale must be positive and finite, got {scale}"
            ))
            .into());
        }
        Ok(Self { scale, origin })
    }

    /// Returns the number of drawing units per pixel.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the pixel offset of the drawing origin from the window center.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }
}

impl Default for PixelCoordSystem {
    /// One drawing unit per pixel, drawing origin at the window center.
    fn default() -> Self {
        Self {
            scale: 1.0,
            origin: Point2::origin(),
        }
    }
}

/// Returns the pixel that `point` lands on in `window`.
///
/// Every coordinate is rounded half-to-even, so `0.5` maps to `0` and
/// `0.51` to `1`. Points outside the window map to pixels outside it,
/// clamped to the `i32` range.
#[must_use]
pub fn pix_coord(point: &Point2, window: WindowSize, pcsys: &PixelCoordSystem) -> PixelPoint {
    let cx = (f64::from(window.width) / 2.0).round_ties_even();
    let cy = (f64::from(window.height) / 2.0).round_ties_even();
    let ox = cx + pcsys.origin.x.round_ties_even();
    let oy = cy + pcsys.origin.y.round_ties_even();
    PixelPoint::new(
        saturate_px(ox + (point.x / pcsys.scale).round_ties_even()),
        saturate_px(oy - (point.y / pcsys.scale).round_ties_even()),
    )
}

/// Maps each point with [`pix_coord`], preserving order.
#[must_use]
pub fn pix_coords(
    points: &[Point2],
    window: WindowSize,
    pcsys: &PixelCoordSystem,
) -> Vec<PixelPoint> {
    points
        .iter()
        .map(|p| pix_coord(p, window, pcsys))
        .collect()
}

fn round_px(v: f64) -> i32 {
    saturate_px(v.round_ties_even())
}

/// Converts an integral pixel value, clamping to the `i32` range.
#[allow(clippy::cast_possible_truncation)]
fn saturate_px(v: f64) -> i32 {
    v as i32
}
