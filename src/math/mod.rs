pub mod norm;

pub use norm::{compare_lexicographic, perpendicular_3d, stable_length, stable_normalize};

/// 2D component storage.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D component storage.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 2x2 matrix used by prepared 2D transforms.
pub type Matrix2 = nalgebra::Matrix2<f64>;

/// 3x3 matrix used by prepared 3D transforms.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Quaternion used to derive 3D rotation matrices.
pub type Quaternion = nalgebra::Quaternion<f64>;

/// Global geometric tolerance for validating frame and plane directions.
pub const TOLERANCE: f64 = 1e-10;
