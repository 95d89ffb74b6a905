//! Prepared transforms.
//!
//! Each type evaluates its trigonometry or reflection matrix once at
//! construction and can then be applied to any number of vectors, directions
//! and points. The per-value `rotate_around`/`mirror_across` methods on the
//! geometry types build the same matrices on the fly.

mod mirror;
mod rotation;

pub use mirror::{householder_2d, householder_3d, Mirror2d, Mirror3d};
pub use rotation::{rotation_matrix_2d, rotation_matrix_3d, Rotation2d, Rotation3d};
