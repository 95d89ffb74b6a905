use std::marker::PhantomData;

use crate::error::{GeometryError, Result};
use crate::geometry::{Axis3d, Direction3d, Plane3d, Point3d, Vector3d};
use crate::log;
use crate::macros::impl_value_traits;
use crate::math::TOLERANCE;
use crate::units::Quantity;

use super::ensure_perpendicular;

/// A planar 2D coordinate system embedded in 3D coordinates `C`, defining
/// 2D local coordinates `L`.
///
/// `x_direction` and `y_direction` are orthonormal; the normal is their
/// cross product.
pub struct SketchPlane3d<U, C, L> {
    origin: Point3d<U, C>,
    x_direction: Direction3d<C>,
    y_direction: Direction3d<C>,
    defines: PhantomData<fn() -> L>,
}

impl_value_traits! {
    SketchPlane3d<U, C, L> { origin, x_direction, y_direction }
}

impl<U, C, L> SketchPlane3d<U, C, L> {
    pub(crate) fn unchecked(
        origin: Point3d<U, C>,
        x_direction: Direction3d<C>,
        y_direction: Direction3d<C>,
    ) -> Self {
        Self {
            origin,
            x_direction,
            y_direction,
            defines: PhantomData,
        }
    }

    /// The global XY plane, local X along global X.
    #[must_use]
    pub fn xy() -> Self {
        Self::unchecked(Point3d::origin(), Direction3d::positive_x(), Direction3d::positive_y())
    }

    /// The global YZ plane, local X along global Y.
    #[must_use]
    pub fn yz() -> Self {
        Self::unchecked(Point3d::origin(), Direction3d::positive_y(), Direction3d::positive_z())
    }

    /// The global ZX plane, local X along global Z.
    #[must_use]
    pub fn zx() -> Self {
        Self::unchecked(Point3d::origin(), Direction3d::positive_z(), Direction3d::positive_x())
    }

    /// A sketch plane with the given in-plane basis directions.
    ///
    /// # Errors
    ///
    /// Returns an error if the directions are not perpendicular.
    pub fn with_directions(
        origin: Point3d<U, C>,
        x_direction: Direction3d<C>,
        y_direction: Direction3d<C>,
    ) -> Result<Self> {
        ensure_perpendicular("x", "y", x_direction.component_in(y_direction))?;
        Ok(Self::unchecked(origin, x_direction, y_direction))
    }

    /// Builds a sketch plane from two spanning vectors by Gram-Schmidt:
    /// X is along `x_vector`, Y is the part of `y_vector` perpendicular
    /// to it. Y vectors within a relative [`TOLERANCE`] of parallel are
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if `x_vector` is zero or the vectors are parallel.
    pub fn from_vectors<V>(
        origin: Point3d<U, C>,
        x_vector: Vector3d<V, C>,
        y_vector: Vector3d<V, C>,
    ) -> Result<Self> {
        let x_direction = x_vector.direction().ok_or(GeometryError::ZeroVector)?;
        let remainder = y_vector - y_vector.projection_in(x_direction);
        let Some(y_direction) = remainder
            .direction()
            .filter(|_| remainder.length().raw() > TOLERANCE * y_vector.length().raw())
        else {
            log::debug!("rejected sketch plane from parallel vectors");
            return Err(GeometryError::Degenerate("sketch plane vectors are parallel".into()).into());
        };
        Ok(Self::unchecked(origin, x_direction, y_direction))
    }

    /// Returns the origin point.
    #[must_use]
    pub fn origin_point(&self) -> Point3d<U, C> {
        self.origin
    }

    /// Returns the X basis direction.
    #[must_use]
    pub fn x_direction(&self) -> Direction3d<C> {
        self.x_direction
    }

    /// Returns the Y basis direction.
    #[must_use]
    pub fn y_direction(&self) -> Direction3d<C> {
        self.y_direction
    }

    /// Returns the unit normal.
    #[must_use]
    pub fn normal_direction(&self) -> Direction3d<C> {
        Direction3d::unchecked(self.x_direction.raw().cross(&self.y_direction.raw()))
    }

    /// Returns the axis through the origin along the X direction.
    #[must_use]
    pub fn x_axis(&self) -> Axis3d<U, C> {
        Axis3d::through(self.origin, self.x_direction)
    }

    /// Returns the axis through the origin along the Y direction.
    #[must_use]
    pub fn y_axis(&self) -> Axis3d<U, C> {
        Axis3d::through(self.origin, self.y_direction)
    }

    /// The plane containing this sketch plane, oriented by its normal.
    #[must_use]
    pub fn to_plane(&self) -> Plane3d<U, C> {
        Plane3d::through(self.origin, self.normal_direction())
    }

    /// The parallel sketch plane at signed `distance` along the normal.
    #[must_use]
    pub fn offset_by(&self, distance: Quantity<U>) -> Self {
        Self::unchecked(
            self.origin.translate_in(self.normal_direction(), distance),
            self.x_direction,
            self.y_direction,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::GeoprimError;
    use crate::units::{Meters, Unitless};

    enum World {}
    enum Sketch {}

    type S = SketchPlane3d<Meters, World, Sketch>;

    #[test]
    fn standard_sketch_planes_have_expected_normals() {
        assert_eq!(S::xy().normal_direction(), Direction3d::z());
        assert_eq!(S::yz().normal_direction(), Direction3d::x());
        assert_eq!(S::zx().normal_direction(), Direction3d::y());
        assert_eq!(S::xy().to_plane().normal_direction(), Direction3d::z());
    }

    #[test]
    fn from_vectors_orthogonalizes() {
        let sketch_plane = S::from_vectors(
            Point3d::origin(),
            Vector3d::<Unitless, World>::unitless(2.0, 0.0, 0.0),
            Vector3d::unitless(1.0, 1.0, 0.0),
        )
        .unwrap();
        assert_eq!(sketch_plane.x_direction(), Direction3d::x());
        assert_eq!(sketch_plane.y_direction(), Direction3d::y());
        assert_relative_eq!(
            sketch_plane.normal_direction().component_in(Direction3d::z()),
            1.0
        );
    }

    #[test]
    fn from_vectors_rejects_degenerate_input() {
        let parallel = S::from_vectors(
            Point3d::origin(),
            Vector3d::<Unitless, World>::unitless(1.0, 1.0, 0.0),
            Vector3d::unitless(-2.0, -2.0, 0.0),
        );
        assert!(matches!(parallel, Err(GeoprimError::Geometry(GeometryError::Degenerate(_)))));

        let zero = S::from_vectors(
            Point3d::origin(),
            Vector3d::<Unitless, World>::zero(),
            Vector3d::unitless(0.0, 1.0, 0.0),
        );
        assert!(matches!(zero, Err(GeoprimError::Geometry(GeometryError::ZeroVector))));
    }

    #[test]
    fn with_directions_validates() {
        assert!(S::with_directions(Point3d::origin(), Direction3d::z(), Direction3d::x()).is_ok());
        assert!(S::with_directions(Point3d::origin(), Direction3d::z(), Direction3d::z()).is_err());
    }
}
