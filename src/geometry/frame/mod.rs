mod axis_2d;
mod axis_3d;
mod frame_2d;
mod frame_3d;
mod plane;
mod sketch_plane;

pub use axis_2d::Axis2d;
pub use axis_3d::Axis3d;
pub use frame_2d::Frame2d;
pub use frame_3d::Frame3d;
pub use plane::Plane3d;
pub use sketch_plane::SketchPlane3d;

use crate::error::{GeometryError, Result};
use crate::log;
use crate::math::TOLERANCE;

/// Checks that two basis directions are perpendicular within [`TOLERANCE`].
///
/// Unit length is already guaranteed by the direction types.
fn ensure_perpendicular(first: &'static str, second: &'static str, dot: f64) -> Result<()> {
    if dot.abs() <= TOLERANCE {
        return Ok(());
    }
    log::debug!(first, second, dot, "rejected non-orthogonal basis directions");
    Err(GeometryError::NotOrthonormal { first, second, dot }.into())
}
