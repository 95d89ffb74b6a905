use std::marker::PhantomData;

use crate::geometry::{Axis2d, Frame2d, Vector2d};
use crate::macros::impl_value_traits;
use crate::math::{stable_normalize, Vector2};
use crate::transform::{householder_2d, rotation_matrix_2d};
use crate::units::{Angle, Unitless};

/// A unit-length direction in 2D coordinates `C`.
pub struct Direction2d<C> {
    components: Vector2,
    coordinates: PhantomData<fn() -> C>,
}

impl_value_traits! {
    Direction2d<C> { components }
}

impl<C> Direction2d<C> {
    /// Builds a direction from components that are already unit length.
    pub(crate) fn unchecked(components: Vector2) -> Self {
        Self {
            components,
            coordinates: PhantomData,
        }
    }

    /// Returns the +X direction.
    #[must_use]
    pub fn positive_x() -> Self {
        Self::unchecked(Vector2::new(1.0, 0.0))
    }

    /// Returns the -X direction.
    #[must_use]
    pub fn negative_x() -> Self {
        Self::unchecked(Vector2::new(-1.0, 0.0))
    }

    /// Returns the +Y direction.
    #[must_use]
    pub fn positive_y() -> Self {
        Self::unchecked(Vector2::new(0.0, 1.0))
    }

    /// Returns the -Y direction.
    #[must_use]
    pub fn negative_y() -> Self {
        Self::unchecked(Vector2::new(0.0, -1.0))
    }

    /// Alias for [`Direction2d::positive_x`].
    #[must_use]
    pub fn x() -> Self {
        Self::positive_x()
    }

    /// Alias for [`Direction2d::positive_y`].
    #[must_use]
    pub fn y() -> Self {
        Self::positive_y()
    }

    /// The direction at `angle` counterclockwise from the positive X axis.
    #[must_use]
    pub fn from_angle(angle: Angle) -> Self {
        Self::unchecked(Vector2::new(angle.cos(), angle.sin()))
    }

    /// Normalizes the given components, returning `None` if both are zero.
    #[must_use]
    pub fn from_components(x: f64, y: f64) -> Option<Self> {
        stable_normalize(Vector2::new(x, y)).map(|(_, unit)| Self::unchecked(unit))
    }

    /// Angle counterclockwise from the positive X axis, in `(-pi, pi]`.
    #[must_use]
    pub fn to_angle(self) -> Angle {
        Angle::atan2(self.components.y, self.components.x)
    }

    /// Returns the `(x, y)` components.
    #[must_use]
    pub fn components(self) -> (f64, f64) {
        (self.components.x, self.components.y)
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

    /// Component of this direction along `other`, i.e. the cosine of the
    /// angle between them.
    #[must_use]
    pub fn component_in(self, other: Self) -> f64 {
        self.components.dot(&other.components)
    }

    /// Signed counterclockwise angle from `other` to this direction, in
    /// `(-pi, pi]`.
    #[must_use]
    pub fn angle_from(self, other: Self) -> Angle {
        let cross = other.components.perp(&self.components);
        let dot = other.components.dot(&self.components);
        Angle::atan2(cross, dot)
    }

    /// True if the angle between the two directions is at most `tolerance`.
    #[must_use]
    pub fn equal_within(self, tolerance: Angle, other: Self) -> bool {
        self.angle_from(other).abs() <= tolerance
    }

    /// Returns the opposite direction.
    #[must_use]
    pub fn reverse(self) -> Self {
        Self::unchecked(-self.components)
    }

    /// The direction rotated 90 degrees counterclockwise, `(x, y) -> (-y, x)`.
    #[must_use]
    pub fn perpendicular_to(self) -> Self {
        self.rotate_counterclockwise()
    }

    /// Returns this direction rotated a quarter turn counterclockwise.
    #[must_use]
    pub fn rotate_counterclockwise(self) -> Self {
        Self::unchecked(Vector2::new(-self.components.y, self.components.x))
    }

    /// Returns this direction rotated a quarter turn clockwise.
    #[must_use]
    pub fn rotate_clockwise(self) -> Self {
        Self::unchecked(Vector2::new(self.components.y, -self.components.x))
    }

    /// Returns this direction rotated counterclockwise by `angle`.
    #[must_use]
    pub fn rotate_by(self, angle: Angle) -> Self {
        Self::unchecked(rotation_matrix_2d(angle) * self.components)
    }

    /// Mirrors across the line through `axis`; only its direction matters.
    #[must_use]
    pub fn mirror_across<U>(self, axis: &Axis2d<U, C>) -> Self {
        let normal = axis.direction().perpendicular_to().components;
        Self::unchecked(householder_2d(&normal) * self.components)
    }

    /// Expresses this direction in the local coordinates of `frame`.
    #[must_use]
    pub fn relative_to<U, L>(self, frame: &Frame2d<U, C, L>) -> Direction2d<L> {
        Direction2d::unchecked(Vector2::new(
            self.component_in(frame.x_direction()),
            self.component_in(frame.y_direction()),
        ))
    }

    /// Converts a direction given in the local coordinates of `frame` back
    /// to the coordinates `frame` is expressed in.
    #[must_use]
    pub fn place_in<U, G>(self, frame: &Frame2d<U, G, C>) -> Direction2d<G> {
        Direction2d::unchecked(
            frame.x_direction().components * self.components.x
                + frame.y_direction().components * self.components.y,
        )
    }

    /// The unitless vector with the same components.
    #[must_use]
    pub fn to_vector(self) -> Vector2d<Unitless, C> {
        Vector2d::from_raw(self.components)
    }

    pub(crate) fn raw(self) -> Vector2 {
        self.components
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::Point2d;

    enum World {}
    enum Local {}

    #[test]
    fn perpendicular_rotates_counterclockwise() {
        let d = Direction2d::<World>::from_components(3.0, 4.0).unwrap();
        assert_eq!(d.perpendicular_to().components(), (-0.8, 0.6));
        assert_eq!(d.reverse().reverse(), d);
    }

    #[test]
    fn zero_components_have_no_direction() {
        assert!(Direction2d::<World>::from_components(0.0, 0.0).is_none());
    }

    #[test]
    fn angles_round_trip() {
        let d = Direction2d::<World>::from_angle(Angle::degrees(135.0));
        assert_relative_eq!(d.to_angle().in_degrees(), 135.0, epsilon = 1e-12);
        let angle = Direction2d::<World>::y().angle_from(Direction2d::x());
        assert_relative_eq!(angle.in_radians(), FRAC_PI_2);
        assert_relative_eq!(
            Direction2d::<World>::x().angle_from(Direction2d::y()).in_radians(),
            -FRAC_PI_2
        );
    }

    #[test]
    fn mirror_across_x_axis_negates_y() {
        let d = Direction2d::<World>::from_components(1.0, 1.0).unwrap();
        let mirrored = d.mirror_across(&Axis2d::<crate::Meters, World>::x());
        assert_relative_eq!(mirrored.y_component(), -d.y_component());
        assert_relative_eq!(mirrored.x_component(), d.x_component());
    }

    #[test]
    fn mirror_matches_prepared_mirror() {
        let axis = Axis2d::<crate::Meters, World>::through(
            Point2d::meters(3.0, -1.0),
            Direction2d::from_angle(Angle::degrees(30.0)),
        );
        let d = Direction2d::<World>::from_angle(Angle::degrees(100.0));
        assert_eq!(d.mirror_across(&axis), crate::Mirror2d::across(&axis).mirror_direction(d));
        assert!(d
            .mirror_across(&axis)
            .equal_within(Angle::radians(1e-12), Direction2d::from_angle(Angle::degrees(-40.0))));
    }

    #[test]
    fn frame_round_trip() {
        let frame = Frame2d::<crate::Meters, World, Local>::with_x_direction(
            Point2d::meters(2.0, 1.0),
            Direction2d::from_angle(Angle::degrees(30.0)),
        );
        let d = Direction2d::<World>::from_angle(Angle::degrees(75.0));
        let local = d.relative_to(&frame);
        assert_relative_eq!(local.to_angle().in_degrees(), 45.0, epsilon = 1e-12);
        let back = local.place_in(&frame);
        assert!(back.equal_within(Angle::radians(1e-12), d));
    }
}
