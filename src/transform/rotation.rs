use crate::geometry::{Axis3d, Direction2d, Direction3d, Point2d, Point3d, Vector2d, Vector3d};
use crate::macros::impl_value_traits;
use crate::math::{Matrix2, Matrix3, Quaternion};
use crate::units::Angle;

/// The 2x2 counterclockwise rotation matrix for `angle`.
#[must_use]
pub fn rotation_matrix_2d(angle: Angle) -> Matrix2 {
    let (s, c) = angle.in_radians().sin_cos();
    Matrix2::new(c, -s, s, c)
}

/// The 3x3 matrix rotating by `angle` around `direction` (right-hand rule).
///
/// Goes through the unit quaternion `(sin(angle/2) * direction, cos(angle/2))`
/// so that only one `sin_cos` call is needed.
#[must_use]
pub fn rotation_matrix_3d<C>(direction: Direction3d<C>, angle: Angle) -> Matrix3 {
    let (s, c) = (0.5 * angle.in_radians()).sin_cos();
    let axis = direction.raw() * s;
    quaternion_to_matrix(&Quaternion::new(c, axis.x, axis.y, axis.z))
}

#[rustfmt::skip]
#[allow(clippy::many_single_char_names)]
fn quaternion_to_matrix(q: &Quaternion) -> Matrix3 {
    let (w, x, y, z) = (q.w, q.i, q.j, q.k);
    let (xx, yy, zz) = (x * x, y * y, z * z);
    let (xy, xz, yz) = (x * y, x * z, y * z);
    let (wx, wy, wz) = (w * x, w * y, w * z);

    Matrix3::new(
        1.0 - 2.0 * (yy + zz), 2.0 * (xy - wz),       2.0 * (xz + wy),
        2.0 * (xy + wz),       1.0 - 2.0 * (xx + zz), 2.0 * (yz - wx),
        2.0 * (xz - wy),       2.0 * (yz + wx),       1.0 - 2.0 * (xx + yy),
    )
}

/// A rotation about a fixed 2D point, with its trigonometry evaluated once.
pub struct Rotation2d<U, C> {
    center: Point2d<U, C>,
    matrix: Matrix2,
}

impl_value_traits! {
    Rotation2d<U, C> { center, matrix }
}

impl<U, C> Rotation2d<U, C> {
    /// Counterclockwise rotation by `angle` about `center`.
    #[must_use]
    pub fn about(center: Point2d<U, C>, angle: Angle) -> Self {
        Self {
            center,
            matrix: rotation_matrix_2d(angle),
        }
    }

    /// Returns the precomputed matrix.
    #[must_use]
    pub fn matrix(&self) -> &Matrix2 {
        &self.matrix
    }

    /// Rotates a vector; the center does not affect vectors.
    #[must_use]
    pub fn rotate_vector<V>(&self, vector: Vector2d<V, C>) -> Vector2d<V, C> {
        Vector2d::from_raw(self.matrix * vector.raw())
    }

    /// Returns the rotated direction.
    #[must_use]
    pub fn rotate_direction(&self, direction: Direction2d<C>) -> Direction2d<C> {
        Direction2d::unchecked(self.matrix * direction.raw())
    }

    /// Returns the rotated point.
    #[must_use]
    pub fn rotate_point(&self, point: Point2d<U, C>) -> Point2d<U, C> {
        self.center + self.rotate_vector(point - self.center)
    }
}

/// A rotation around a 3D axis, with its matrix computed once.
pub struct Rotation3d<U, C> {
    origin: Point3d<U, C>,
    matrix: Matrix3,
}

impl_value_traits! {
    Rotation3d<U, C> { origin, matrix }
}

impl<U, C> Rotation3d<U, C> {
    /// Rotation by `angle` around `axis`, counterclockwise when looking
    /// back along the axis direction.
    #[must_use]
    pub fn around(axis: &Axis3d<U, C>, angle: Angle) -> Self {
        Self {
            origin: axis.origin_point(),
            matrix: rotation_matrix_3d(axis.direction(), angle),
        }
    }

    /// Returns the precomputed matrix.
    #[must_use]
    pub fn matrix(&self) -> &Matrix3 {
        &self.matrix
    }

    /// Rotates a vector; only the axis direction affects vectors.
    #[must_use]
    pub fn rotate_vector<V>(&self, vector: Vector3d<V, C>) -> Vector3d<V, C> {
        Vector3d::from_raw(self.matrix * vector.raw())
    }

    /// Returns the rotated direction.
    #[must_use]
    pub fn rotate_direction(&self, direction: Direction3d<C>) -> Direction3d<C> {
        Direction3d::unchecked(self.matrix * direction.raw())
    }

    /// Returns the rotated point.
    #[must_use]
    pub fn rotate_point(&self, point: Point3d<U, C>) -> Point3d<U, C> {
        self.origin + self.rotate_vector(point - self.origin)
    }
}
