use std::marker::PhantomData;

use crate::geometry::{Axis3d, Direction2d, Frame3d, Plane3d, SketchPlane3d, Vector3d};
use crate::macros::impl_value_traits;
use crate::math::{perpendicular_3d, stable_normalize, Vector2, Vector3};
use crate::transform::{householder_3d, rotation_matrix_3d};
use crate::units::{Angle, Unitless};

/// A unit-length direction in 3D coordinates `C`.
pub struct Direction3d<C> {
    components: Vector3,
    coordinates: PhantomData<fn() -> C>,
}

impl_value_traits! {
    Direction3d<C> { components }
}

impl<C> Direction3d<C> {
    /// Builds a direction from components that are already unit length.
    pub(crate) fn unchecked(components: Vector3) -> Self {
        Self {
            components,
            coordinates: PhantomData,
        }
    }

    /// Returns the +X direction.
    #[must_use]
    pub fn positive_x() -> Self {
        Self::unchecked(Vector3::x())
    }

    /// Returns the -X direction.
    #[must_use]
    pub fn negative_x() -> Self {
        Self::unchecked(-Vector3::x())
    }

    /// Returns the +Y direction.
    #[must_use]
    pub fn positive_y() -> Self {
        Self::unchecked(Vector3::y())
    }

    /// Returns the -Y direction.
    #[must_use]
    pub fn negative_y() -> Self {
        Self::unchecked(-Vector3::y())
    }

    /// Returns the +Z direction.
    #[must_use]
    pub fn positive_z() -> Self {
        Self::unchecked(Vector3::z())
    }

    /// Returns the -Z direction.
    #[must_use]
    pub fn negative_z() -> Self {
        Self::unchecked(-Vector3::z())
    }

    /// Alias for [`Direction3d::positive_x`].
    #[must_use]
    pub fn x() -> Self {
        Self::positive_x()
    }

    /// Alias for [`Direction3d::positive_y`].
    #[must_use]
    pub fn y() -> Self {
        Self::positive_y()
    }

    /// Alias for [`Direction3d::positive_z`].
    #[must_use]
    pub fn z() -> Self {
        Self::positive_z()
    }

    /// Normalizes the given components, returning `None` if all are zero.
    #[must_use]
    pub fn from_components(x: f64, y: f64, z: f64) -> Option<Self> {
        stable_normalize(Vector3::new(x, y, z)).map(|(_, unit)| Self::unchecked(unit))
    }

    /// The direction at `azimuth` counterclockwise from the X axis in the XY
    /// plane, tilted up by `elevation` towards Z.
    #[must_use]
    pub fn from_azimuth_and_elevation(azimuth: Angle, elevation: Angle) -> Self {
        let horizontal = elevation.cos();
        Self::unchecked(Vector3::new(
            horizontal * azimuth.cos(),
            horizontal * azimuth.sin(),
            elevation.sin(),
        ))
    }

    /// Returns the `(x, y, z)` components.
    #[must_use]
    pub fn components(self) -> (f64, f64, f64) {
        (self.components.x, self.components.y, self.components.z)
    }

    /// Returns the X component.
    #[must_use]
    pub fn x_component(self) -> f64 {
        self.components.x
    }

    /// Returns the Y component.
    #[must_use]
    pub fn y_component(self) -> f64 {
        self.components.y
    }

    /// Returns the Z component.
    #[must_use]
    pub fn z_component(self) -> f64 {
        self.components.z
    }

    /// Cosine of the angle between the two directions.
    #[must_use]
    pub fn component_in(self, other: Self) -> f64 {
        self.components.dot(&other.components)
    }

    /// Unsigned angle between the two directions, in `[0, pi]`.
    ///
    /// Uses `2 atan2(|a - b|, |a + b|)`, which stays accurate for nearly
    /// parallel and nearly opposite directions where `acos` of the dot
    /// product loses precision.
    #[must_use]
    pub fn angle_from(self, other: Self) -> Angle {
        let difference = (self.components - other.components).norm();
        let sum = (self.components + other.components).norm();
        Angle::radians(2.0 * difference.atan2(sum))
    }

    /// Returns true if the angle between the directions is at most `tolerance`.
    #[must_use]
    pub fn equal_within(self, tolerance: Angle, other: Self) -> bool {
        self.angle_from(other) <= tolerance
    }

    /// Returns the opposite direction.
    #[must_use]
    pub fn reverse(self) -> Self {
        Self::unchecked(-self.components)
    }

    /// An arbitrary but deterministic perpendicular direction.
    ///
    /// See [`perpendicular_3d`] for the branch rule. The two largest
    /// components of a unit vector have a norm of at least `sqrt(2/3)`, so
    /// the plain normalization cannot divide by zero.
    #[must_use]
    pub fn perpendicular_to(self) -> Self {
        Self::unchecked(perpendicular_3d(&self.components).normalize())
    }

    /// Two directions that together with this one form a right-handed
    /// orthonormal basis `(x, y, self)`.
    #[must_use]
    pub fn perpendicular_basis(self) -> (Self, Self) {
        let x_direction = self.perpendicular_to();
        let y_direction = Self::unchecked(self.components.cross(&x_direction.components));
        (x_direction, y_direction)
    }

    /// Rotates around the direction of `axis`; the axis origin is irrelevant
    /// for directions.
    #[must_use]
    pub fn rotate_around<U>(self, axis: &Axis3d<U, C>, angle: Angle) -> Self {
        Self::unchecked(rotation_matrix_3d(axis.direction(), angle) * self.components)
    }

    /// Mirrors across `plane`; only its normal matters.
    #[must_use]
    pub fn mirror_across<U>(self, plane: &Plane3d<U, C>) -> Self {
        Self::unchecked(householder_3d(&plane.normal_direction().components) * self.components)
    }

    /// Projects onto `plane` and renormalizes, or `None` if this direction
    /// is the plane normal (or its reverse).
    #[must_use]
    pub fn project_onto<U>(self, plane: &Plane3d<U, C>) -> Option<Self> {
        self.to_vector().project_onto(plane).direction()
    }

    /// Expresses this direction in the local coordinates of `frame`.
    #[must_use]
    pub fn relative_to<U, L>(self, frame: &Frame3d<U, C, L>) -> Direction3d<L> {
        Direction3d::unchecked(Vector3::new(
            self.component_in(frame.x_direction()),
            self.component_in(frame.y_direction()),
            self.component_in(frame.z_direction()),
        ))
    }

    /// Converts a direction given in the local coordinates of `frame` back
    /// to the coordinates `frame` is expressed in.
    #[must_use]
    pub fn place_in<U, G>(self, frame: &Frame3d<U, G, C>) -> Direction3d<G> {
        Direction3d::unchecked(
            frame.x_direction().components * self.components.x
                + frame.y_direction().components * self.components.y
                + frame.z_direction().components * self.components.z,
        )
    }

    /// Projects into the 2D coordinates of `sketch_plane`, or `None` if this
    /// direction is perpendicular to the sketch plane.
    #[must_use]
    pub fn project_into<U, L>(self, sketch_plane: &SketchPlane3d<U, C, L>) -> Option<Direction2d<L>> {
        stable_normalize(Vector2::new(
            self.component_in(sketch_plane.x_direction()),
            self.component_in(sketch_plane.y_direction()),
        ))
        .map(|(_, unit)| Direction2d::unchecked(unit))
    }

    /// The unitless vector with the same components.
    #[must_use]
    pub fn to_vector(self) -> Vector3d<Unitless, C> {
        Vector3d::from_raw(self.components)
    }

    pub(crate) fn raw(self) -> Vector3 {
        self.components
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use super::*;
    use crate::units::Meters;

    enum World {}
    enum Local {}
    enum Sketch {}

    #[test]
    fn perpendicular_basis_is_orthonormal() {
        let d = Direction3d::<World>::from_components(1.0, -2.0, 0.5).unwrap();
        let (x, y) = d.perpendicular_basis();
        assert_relative_eq!(x.component_in(d), 0.0, epsilon = 1e-15);
        assert_relative_eq!(y.component_in(d), 0.0, epsilon = 1e-15);
        assert_relative_eq!(x.component_in(y), 0.0, epsilon = 1e-15);
        assert_relative_eq!(y.to_vector().length().raw(), 1.0, epsilon = 1e-15);
        let z = x.to_vector().cross(y.to_vector());
        assert_relative_eq!(z.raw(), d.raw(), epsilon = 1e-15);
    }

    #[test]
    fn azimuth_and_elevation() {
        let d = Direction3d::<World>::from_azimuth_and_elevation(
            Angle::degrees(90.0),
            Angle::degrees(45.0),
        );
        let expected = Direction3d::from_components(0.0, 1.0, 1.0).unwrap();
        assert!(d.equal_within(Angle::radians(1e-12), expected));
    }

    #[test]
    fn angle_from_handles_opposite_directions() {
        let x = Direction3d::<World>::x();
        assert_relative_eq!(x.angle_from(x.reverse()).in_radians(), PI);
        assert_relative_eq!(x.angle_from(Direction3d::y()).in_radians(), FRAC_PI_2);
        assert_eq!(x.angle_from(x).in_radians(), 0.0);
    }

    #[test]
    fn rotate_x_around_z_gives_y() {
        let rotated = Direction3d::<World>::x()
            .rotate_around(&Axis3d::<Meters, World>::z(), Angle::degrees(90.0));
        assert!(rotated.equal_within(Angle::radians(1e-12), Direction3d::y()));
    }

    #[test]
    fn mirror_and_project_against_xy_plane() {
        let plane = Plane3d::<Meters, World>::xy();
        let d = Direction3d::<World>::from_components(0.0, 3.0, 4.0).unwrap();
        assert_relative_eq!(d.mirror_across(&plane).raw(), Vector3::new(0.0, 0.6, -0.8));
        assert_eq!(d.project_onto(&plane), Some(Direction3d::y()));
        assert_eq!(Direction3d::<World>::z().project_onto(&plane), None);
    }

    #[test]
    fn frame_round_trip() {
        let frame = Frame3d::<Meters, World, Local>::with_z_direction(
            crate::Point3d::meters(1.0, 2.0, 3.0),
            Direction3d::from_components(1.0, 1.0, 1.0).unwrap(),
        );
        let d = Direction3d::<World>::from_components(-2.0, 0.5, 3.0).unwrap();
        let back = d.relative_to(&frame).place_in(&frame);
        assert_relative_eq!(back.raw(), d.raw(), epsilon = 1e-12);
        assert_relative_eq!(
            frame.z_direction().relative_to(&frame).raw(),
            Vector3::z(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn project_into_sketch_plane() {
        let sketch_plane = SketchPlane3d::<Meters, World, Sketch>::yz();
        let d = Direction3d::<World>::from_components(5.0, 0.0, 2.0).unwrap();
        assert_eq!(
            d.project_into(&sketch_plane).map(Direction2d::components),
            Some((0.0, 1.0))
        );
        assert!(Direction3d::<World>::x().project_into(&sketch_plane).is_none());
    }
}
