use std::marker::PhantomData;

use crate::error::Result;
use crate::geometry::{Axis3d, Direction3d, Plane3d, Point3d, SketchPlane3d};
use crate::macros::impl_value_traits;

use super::ensure_perpendicular;

/// A 3D coordinate frame expressed in coordinates `C` that defines local
/// coordinates `L`.
///
/// Points and vectors move between the two with `relative_to` (from `C` to
/// `L`) and `place_in` (from `L` back to `C`).
pub struct Frame3d<U, C, L> {
    origin: Point3d<U, C>,
    x_direction: Direction3d<C>,
    y_direction: Direction3d<C>,
    z_direction: Direction3d<C>,
    defines: PhantomData<fn() -> L>,
}

impl_value_traits! {
    Frame3d<U, C, L> { origin, x_direction, y_direction, z_direction }
}

impl<U, C, L> Frame3d<U, C, L> {
    fn unchecked(
        origin: Point3d<U, C>,
        x_direction: Direction3d<C>,
        y_direction: Direction3d<C>,
        z_direction: Direction3d<C>,
    ) -> Self {
        Self {
            origin,
            x_direction,
            y_direction,
            z_direction,
            defines: PhantomData,
        }
    }

    /// The frame coinciding with the global coordinate system.
    #[must_use]
    pub fn at_origin() -> Self {
        Self::at_point(Point3d::origin())
    }

    /// A frame with global axis directions, moved to `origin`.
    #[must_use]
    pub fn at_point(origin: Point3d<U, C>) -> Self {
        Self::unchecked(
            origin,
            Direction3d::positive_x(),
            Direction3d::positive_y(),
            Direction3d::positive_z(),
        )
    }

    /// A right-handed frame with the given Z direction and an arbitrary but
    /// deterministic choice of X and Y directions.
    #[must_use]
    pub fn with_z_direction(origin: Point3d<U, C>, z_direction: Direction3d<C>) -> Self {
        let (x_direction, y_direction) = z_direction.perpendicular_basis();
        Self::unchecked(origin, x_direction, y_direction, z_direction)
    }

    /// A frame with the given basis directions.
    ///
    /// # Errors
    ///
    /// Returns an error if any two of the directions are not perpendicular.
    pub fn with_directions(
        origin: Point3d<U, C>,
        x_direction: Direction3d<C>,
        y_direction: Direction3d<C>,
        z_direction: Direction3d<C>,
    ) -> Result<Self> {
        ensure_perpendicular("x", "y", x_direction.component_in(y_direction))?;
        ensure_perpendicular("y", "z", y_direction.component_in(z_direction))?;
        ensure_perpendicular("z", "x", z_direction.component_in(x_direction))?;
        Ok(Self::unchecked(origin, x_direction, y_direction, z_direction))
    }

    /// Returns the origin of the frame.
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

    /// Returns the Z basis direction.
    #[must_use]
    pub fn z_direction(&self) -> Direction3d<C> {
        self.z_direction
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

    /// Returns the axis through the origin along the Z direction.
    #[must_use]
    pub fn z_axis(&self) -> Axis3d<U, C> {
        Axis3d::through(self.origin, self.z_direction)
    }

    /// True if `x cross y` points along `z`.
    #[must_use]
    pub fn is_right_handed(&self) -> bool {
        let x = self.x_direction.raw();
        x.cross(&self.y_direction.raw()).dot(&self.z_direction.raw()) > 0.0
    }

    /// The plane through the origin spanned by X and Y, with Z as normal.
    #[must_use]
    pub fn xy_plane(&self) -> Plane3d<U, C> {
        Plane3d::through(self.origin, self.z_direction)
    }

    /// The plane spanned by Y and Z, with X as normal.
    #[must_use]
    pub fn yz_plane(&self) -> Plane3d<U, C> {
        Plane3d::through(self.origin, self.x_direction)
    }

    /// The plane spanned by Z and X, with Y as normal.
    #[must_use]
    pub fn zx_plane(&self) -> Plane3d<U, C> {
        Plane3d::through(self.origin, self.y_direction)
    }

    /// Returns the sketch plane spanned by the X and Y directions.
    #[must_use]
    pub fn xy_sketch_plane<S>(&self) -> SketchPlane3d<U, C, S> {
        SketchPlane3d::unchecked(self.origin, self.x_direction, self.y_direction)
    }

    /// Returns the sketch plane spanned by the Y and Z directions.
    #[must_use]
    pub fn yz_sketch_plane<S>(&self) -> SketchPlane3d<U, C, S> {
        SketchPlane3d::unchecked(self.origin, self.y_direction, self.z_direction)
    }

    /// Returns the sketch plane spanned by the Z and X directions.
    #[must_use]
    pub fn zx_sketch_plane<S>(&self) -> SketchPlane3d<U, C, S> {
        SketchPlane3d::unchecked(self.origin, self.z_direction, self.x_direction)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::{GeometryError, GeoprimError};
    use crate::units::{Length, Meters};

    enum World {}
    enum Local {}
    enum Sketch {}

    type F = Frame3d<Meters, World, Local>;

    #[test]
    fn with_z_direction_is_right_handed_and_orthonormal() {
        let z = Direction3d::from_components(2.0, -1.0, 0.5).unwrap();
        let frame = F::with_z_direction(Point3d::origin(), z);
        assert!(frame.is_right_handed());
        assert_relative_eq!(frame.x_direction().component_in(z), 0.0, epsilon = 1e-15);
        assert_relative_eq!(frame.y_direction().component_in(z), 0.0, epsilon = 1e-15);
        assert_relative_eq!(
            frame.x_direction().component_in(frame.y_direction()),
            0.0,
            epsilon = 1e-15
        );
    }

    #[test]
    fn with_directions_rejects_skewed_basis() {
        let origin = Point3d::meters(1.0, 1.0, 1.0);
        let left_handed = F::with_directions(
            origin,
            Direction3d::x(),
            Direction3d::y(),
            Direction3d::negative_z(),
        )
        .unwrap();
        assert!(!left_handed.is_right_handed());

        let skewed = F::with_directions(
            origin,
            Direction3d::x(),
            Direction3d::from_components(1.0, 1.0, 0.0).unwrap(),
            Direction3d::z(),
        );
        assert!(matches!(
            skewed,
            Err(GeoprimError::Geometry(GeometryError::NotOrthonormal { first: "x", second: "y", .. }))
        ));
    }

    #[test]
    fn planes_and_sketch_planes() {
        let frame = F::at_point(Point3d::meters(0.0, 0.0, 5.0));
        let point = Point3d::meters(1.0, 2.0, 3.0);
        assert_eq!(point.signed_distance_from(&frame.xy_plane()), Length::meters(-2.0));
        assert_eq!(point.signed_distance_from(&frame.yz_plane()), Length::meters(1.0));
        let sketch_plane: SketchPlane3d<Meters, World, Sketch> = frame.zx_sketch_plane();
        assert_eq!(sketch_plane.normal_direction(), Direction3d::y());
    }

    #[test]
    fn axes_use_basis_directions() {
        let frame = F::at_origin();
        let rotated = Point3d::meters(0.0, 1.0, 0.0)
            .rotate_around(&frame.x_axis(), crate::units::Angle::degrees(90.0));
        assert!(rotated.equal_within(Length::meters(1e-12), Point3d::meters(0.0, 0.0, 1.0)));
        assert_eq!(frame.z_axis().direction(), Direction3d::z());
        assert_eq!(frame.y_axis().origin_point(), Point3d::origin());
    }
}
