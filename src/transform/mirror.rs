use crate::geometry::{Axis2d, Direction2d, Direction3d, Plane3d, Point2d, Point3d, Vector2d, Vector3d};
use crate::macros::impl_value_traits;
use crate::math::{Matrix2, Matrix3, Vector2, Vector3};

/// The 2D Householder reflection `I - 2 n n^T` for a unit normal `n`.
#[must_use]
pub fn householder_2d(normal: &Vector2) -> Matrix2 {
    Matrix2::identity() - normal * normal.transpose() * 2.0
}

/// The 3D Householder reflection `I - 2 n n^T` for a unit normal `n`.
#[must_use]
pub fn householder_3d(normal: &Vector3) -> Matrix3 {
    Matrix3::identity() - normal * normal.transpose() * 2.0
}

/// A reflection across a 2D axis, with its matrix computed once.
pub struct Mirror2d<U, C> {
    origin: Point2d<U, C>,
    matrix: Matrix2,
}

impl_value_traits! {
    Mirror2d<U, C> { origin, matrix }
}

impl<U, C> Mirror2d<U, C> {
    /// Reflection across the line through `axis`.
    #[must_use]
    pub fn across(axis: &Axis2d<U, C>) -> Self {
        Self {
            origin: axis.origin_point(),
            matrix: householder_2d(&axis.direction().perpendicular_to().raw()),
        }
    }

    /// Returns the precomputed matrix.
    #[must_use]
    pub fn matrix(&self) -> &Matrix2 {
        &self.matrix
    }

    /// Returns the mirrored vector; only the orientation affects vectors.
    #[must_use]
    pub fn mirror_vector<V>(&self, vector: Vector2d<V, C>) -> Vector2d<V, C> {
        Vector2d::from_raw(self.matrix * vector.raw())
    }

    /// Returns the mirrored direction.
    #[must_use]
    pub fn mirror_direction(&self, direction: Direction2d<C>) -> Direction2d<C> {
        Direction2d::unchecked(self.matrix * direction.raw())
    }

    /// Returns the mirrored point.
    #[must_use]
    pub fn mirror_point(&self, point: Point2d<U, C>) -> Point2d<U, C> {
        self.origin + self.mirror_vector(point - self.origin)
    }
}

/// A reflection across a plane, with its matrix computed once.
pub struct Mirror3d<U, C> {
    origin: Point3d<U, C>,
    matrix: Matrix3,
}

impl_value_traits! {
    Mirror3d<U, C> { origin, matrix }
}

impl<U, C> Mirror3d<U, C> {
    /// Reflection across `plane`.
    #[must_use]
    pub fn across(plane: &Plane3d<U, C>) -> Self {
        Self {
            origin: plane.origin_point(),
            matrix: householder_3d(&plane.normal_direction().raw()),
        }
    }

    /// Returns the precomputed matrix.
    #[must_use]
    pub fn matrix(&self) -> &Matrix3 {
        &self.matrix
    }

    /// Returns the mirrored vector; only the orientation affects vectors.
    #[must_use]
    pub fn mirror_vector<V>(&self, vector: Vector3d<V, C>) -> Vector3d<V, C> {
        Vector3d::from_raw(self.matrix * vector.raw())
    }

    /// Returns the mirrored direction.
    #[must_use]
    pub fn mirror_direction(&self, direction: Direction3d<C>) -> Direction3d<C> {
        Direction3d::unchecked(self.matrix * direction.raw())
    }

    /// Returns the mirrored point.
    #[must_use]
    pub fn mirror_point(&self, point: Point3d<U, C>) -> Point3d<U, C> {
        self.origin + self.mirror_vector(point - self.origin)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::units::Meters;

    enum World {}

    #[test]
    fn householder_is_an_involution() {
        let normal = Vector3::new(1.0, 2.0, -2.0) / 3.0;
        let matrix = householder_3d(&normal);
        assert_relative_eq!(matrix * matrix, Matrix3::identity(), epsilon = 1e-15);
        assert_relative_eq!(matrix * normal, -normal, epsilon = 1e-15);
    }

    #[test]
    fn mirror_3d_across_offset_plane() {
        let plane = Plane3d::through(Point3d::<Meters, World>::meters(0.0, 0.0, 1.0), Direction3d::z());
        let mirror = Mirror3d::across(&plane);
        assert_eq!(mirror.mirror_point(Point3d::meters(1.0, 2.0, 3.0)), Point3d::meters(1.0, 2.0, -1.0));
        assert_eq!(
            mirror.mirror_vector(Vector3d::<Meters, World>::meters(1.0, 2.0, 3.0)),
            Vector3d::meters(1.0, 2.0, -3.0)
        );
        assert_eq!(mirror.mirror_direction(Direction3d::z()), Direction3d::negative_z());
    }

    #[test]
    fn mirror_2d_across_diagonal() {
        let axis = Axis2d::through(
            Point2d::<Meters, World>::origin(),
            Direction2d::from_components(1.0, 1.0).unwrap(),
        );
        let mirror = Mirror2d::across(&axis);
        let mirrored = mirror.mirror_point(Point2d::meters(3.0, 1.0));
        assert!(mirrored.equal_within(crate::units::Length::meters(1e-12), Point2d::meters(1.0, 3.0)));
        assert_eq!(
            mirror.mirror_point(Point2d::meters(3.0, 1.0)),
            Point2d::meters(3.0, 1.0).mirror_across(&axis)
        );
        let direction = mirror.mirror_direction(Direction2d::x());
        assert_relative_eq!(direction.y_component(), 1.0, epsilon = 1e-15);
    }
}
