//! Prints where a 45° line crosses a few segments, and where those points
//! land in a 1200x600 window.
//!
//! Run with `RUST_LOG=debug` to see degenerate inputs being rejected.

use planar::viewport::{pix_coord, PixelCoordSystem, WindowSize};
use planar::{Line, LineSegment, Point2, Vector2};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), planar::PlanarError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let line = Line::new(Point2::origin(), Vector2::new(1.0, 1.0))?;
    let window = WindowSize::new(1200, 600);
    let pcsys = PixelCoordSystem::new(0.05, Point2::origin())?;

    let segments = [
        LineSegment::from_length(2.0, Point2::origin(), -45.0),
        LineSegment::new(Point2::new(-1.0, 2.0), Point2::new(5.0, 1.0)),
        LineSegment::from_length(4.0, Point2::new(0.0, 1.0), 45.0),
    ];

    for seg in &segments {
        match line.meet(seg) {
            Ok(p) => {
                let px = pix_coord(&p, window, &pcsys);
                tracing::info!(x = p.x, y = p.y, px = px.x, py = px.y, "meet");
            }
            Err(e) => tracing::warn!(error = %e, "no single intersection"),
        }
    }
    Ok(())
}
