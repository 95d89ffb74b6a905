use std::cmp::Ordering;
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::geometry::{Axis2d, Direction2d, Frame2d, Point2d, SketchPlane3d, Vector3d};
use crate::log;
use crate::macros::impl_value_traits;
use crate::math::norm::interpolate;
use crate::math::{compare_lexicographic, stable_length, stable_normalize, Vector2};
use crate::transform::{householder_2d, rotation_matrix_2d};
use crate::units::{Angle, Meters, Product, Quantity, Squared, Unitless};

/// A 2D displacement with components in units `U`, expressed in
/// coordinates `C`.
pub struct Vector2d<U, C> {
    components: Vector2,
    units: PhantomData<fn() -> (U, C)>,
}

impl_value_traits! {
    Vector2d<U, C> { components }
}

impl<U, C> Vector2d<U, C> {
    pub(crate) fn from_raw(components: Vector2) -> Self {
        Self {
            components,
            units: PhantomData,
        }
    }

    pub(crate) fn raw(self) -> Vector2 {
        self.components
    }

    /// The zero vector. It has no direction.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_raw(Vector2::zeros())
    }

    /// Builds a vector from X and Y quantities in units `U`.
    #[must_use]
    pub fn xy(x: Quantity<U>, y: Quantity<U>) -> Self {
        Self::from_components(x.raw(), y.raw())
    }

    /// Builds a vector from raw components in units `U`.
    #[must_use]
    pub fn from_components(x: f64, y: f64) -> Self {
        Self::from_raw(Vector2::new(x, y))
    }

    /// A vector of length `radius` at `angle` counterclockwise from X.
    #[must_use]
    pub fn polar(radius: Quantity<U>, angle: Angle) -> Self {
        Self::from_components(radius.raw() * angle.cos(), radius.raw() * angle.sin())
    }

    /// The displacement from `start` to `end`, i.e. `end - start`.
    #[must_use]
    pub fn from_points(start: Point2d<U, C>, end: Point2d<U, C>) -> Self {
        Self::from_raw(end.raw() - start.raw())
    }

    /// A vector of signed length `length` along `direction`.
    #[must_use]
    pub fn with_length(length: Quantity<U>, direction: Direction2d<C>) -> Self {
        Self::from_raw(direction.raw() * length.raw())
    }

    /// Interpolates from `start` (`t = 0`) to `end` (`t = 1`).
    ///
    /// Values of `t` outside `[0, 1]` extrapolate. The result is computed
    /// from whichever endpoint is nearer, which keeps `t = 1` exact.
    #[must_use]
    pub fn interpolate_from(start: Self, end: Self, t: f64) -> Self {
        Self::from_raw(interpolate(&start.components, &end.components, t))
    }

    /// Returns the `(x, y)` components.
    #[must_use]
    pub fn components(self) -> (Quantity<U>, Quantity<U>) {
        (self.x_component(), self.y_component())
    }

    /// Returns the X component.
    #[must_use]
    pub fn x_component(self) -> Quantity<U> {
        self.component_in(Direction2d::positive_x())
    }

    /// Returns the Y component.
    #[must_use]
    pub fn y_component(self) -> Quantity<U> {
        self.component_in(Direction2d::positive_y())
    }

    /// Signed component of this vector along `direction`.
    #[must_use]
    pub fn component_in(self, direction: Direction2d<C>) -> Quantity<U> {
        Quantity::from_raw(self.components.dot(&direction.raw()))
    }

    /// Length and angle counterclockwise from X.
    #[must_use]
    pub fn polar_components(self) -> (Quantity<U>, Angle) {
        (
            self.length(),
            Angle::atan2(self.components.y, self.components.x),
        )
    }

    /// Length, computed without intermediate overflow or underflow.
    #[must_use]
    pub fn length(self) -> Quantity<U> {
        Quantity::from_raw(stable_length(self.components))
    }

    /// Squared length, cheaper than [`Vector2d::length`] for comparisons.
    #[must_use]
    pub fn squared_length(self) -> Quantity<Squared<U>> {
        Quantity::from_raw(self.components.norm_squared())
    }

    /// The direction of this vector, or `None` for the exact zero vector.
    #[must_use]
    pub fn direction(self) -> Option<Direction2d<C>> {
        self.length_and_direction().map(|(_, direction)| direction)
    }

    /// Returns the length and the direction together, or `None` for the zero vector.
    #[must_use]
    pub fn length_and_direction(self) -> Option<(Quantity<U>, Direction2d<C>)> {
        let result = stable_normalize(self.components)
            .map(|(length, unit)| (Quantity::from_raw(length), Direction2d::unchecked(unit)));
        if result.is_none() {
            log::trace!("zero 2D vector has no direction");
        }
        result
    }

    /// The unit vector in the same direction, or the zero vector if this is
    /// zero. Use [`Vector2d::direction`] to handle the zero case explicitly.
    #[must_use]
    pub fn normalize(self) -> Vector2d<Unitless, C> {
        stable_normalize(self.components).map_or_else(Vector2d::zero, |(_, unit)| {
            Vector2d::from_raw(unit)
        })
    }

    /// True if `length(self - other) <= tolerance`.
    #[must_use]
    pub fn equal_within(self, tolerance: Quantity<U>, other: Self) -> bool {
        (self - other).length() <= tolerance
    }

    /// Orders by X component, then Y component.
    #[must_use]
    pub fn compare_lexicographic(&self, other: &Self) -> Ordering {
        compare_lexicographic(&self.components, &other.components)
    }

    /// Returns the component-wise sum, `self + other`.
    #[must_use]
    pub fn plus(self, other: Self) -> Self {
        self + other
    }

    /// `self - other`.
    #[must_use]
    pub fn minus(self, other: Self) -> Self {
        self - other
    }

    /// Returns the dot product, in the product of both units.
    #[must_use]
    pub fn dot<V>(self, other: Vector2d<V, C>) -> Quantity<Product<U, V>> {
        Quantity::from_raw(self.components.dot(&other.components))
    }

    /// The scalar 2D cross product `x1 * y2 - y1 * x2`.
    #[must_use]
    pub fn cross<V>(self, other: Vector2d<V, C>) -> Quantity<Product<U, V>> {
        Quantity::from_raw(self.components.perp(&other.components))
    }

    /// Returns the negated vector.
    #[must_use]
    pub fn reverse(self) -> Self {
        -self
    }

    /// Returns this vector multiplied by `factor`.
    #[must_use]
    pub fn scale_by(self, factor: f64) -> Self {
        self * factor
    }

    /// Multiplies by a quantity, promoting the units.
    #[must_use]
    pub fn times<V>(self, factor: Quantity<V>) -> Vector2d<Product<V, U>, C> {
        Vector2d::from_raw(self.components * factor.raw())
    }

    /// Rescales to the given length; the zero vector stays zero.
    #[must_use]
    pub fn scale_to<V>(self, length: Quantity<V>) -> Vector2d<V, C> {
        Vector2d::from_raw(self.normalize().components * length.raw())
    }

    /// Rotated 90 degrees counterclockwise, `(x, y) -> (-y, x)`.
    #[must_use]
    pub fn perpendicular_to(self) -> Self {
        self.rotate_counterclockwise()
    }

    /// Returns this vector rotated a quarter turn counterclockwise.
    #[must_use]
    pub fn rotate_counterclockwise(self) -> Self {
        Self::from_components(-self.components.y, self.components.x)
    }

    /// Returns this vector rotated a quarter turn clockwise.
    #[must_use]
    pub fn rotate_clockwise(self) -> Self {
        Self::from_components(self.components.y, -self.components.x)
    }

    /// Returns this vector rotated counterclockwise by `angle`.
    #[must_use]
    pub fn rotate_by(self, angle: Angle) -> Self {
        Self::from_raw(rotation_matrix_2d(angle) * self.components)
    }

    /// Mirrors across the direction of `axis`.
    #[must_use]
    pub fn mirror_across<A>(self, axis: &Axis2d<A, C>) -> Self {
        let normal = axis.direction().perpendicular_to().raw();
        Self::from_raw(householder_2d(&normal) * self.components)
    }

    /// The component of this vector parallel to `direction`.
    #[must_use]
    pub fn projection_in(self, direction: Direction2d<C>) -> Self {
        Self::with_length(self.component_in(direction), direction)
    }

    /// Projects onto the direction of `axis`.
    #[must_use]
    pub fn project_onto<A>(self, axis: &Axis2d<A, C>) -> Self {
        self.projection_in(axis.direction())
    }

    /// Expresses this vector in the local coordinates of `frame`.
    #[must_use]
    pub fn relative_to<A, L>(self, frame: &Frame2d<A, C, L>) -> Vector2d<U, L> {
        Vector2d::from_components(
            self.component_in(frame.x_direction()).raw(),
            self.component_in(frame.y_direction()).raw(),
        )
    }

    /// Converts a vector given in the local coordinates of `frame` back to
    /// the coordinates `frame` is expressed in.
    #[must_use]
    pub fn place_in<A, G>(self, frame: &Frame2d<A, G, C>) -> Vector2d<U, G> {
        Vector2d::from_raw(
            frame.x_direction().raw() * self.components.x
                + frame.y_direction().raw() * self.components.y,
        )
    }

    /// Converts a vector in the 2D coordinates of `sketch_plane` to the 3D
    /// coordinates the sketch plane is expressed in.
    #[must_use]
    pub fn place_onto<A, G>(self, sketch_plane: &SketchPlane3d<A, G, C>) -> Vector3d<U, G> {
        Vector3d::on(sketch_plane, self)
    }
}

impl<C> Vector2d<Meters, C> {
    /// Builds a vector from components in meters.
    #[must_use]
    pub fn meters(x: f64, y: f64) -> Self {
        Self::from_components(x, y)
    }
}

impl<C> Vector2d<Unitless, C> {
    /// Builds a dimensionless value from raw components.
    #[must_use]
    pub fn unitless(x: f64, y: f64) -> Self {
        Self::from_components(x, y)
    }
}

impl<U, C> Add for Vector2d<U, C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_raw(self.components + rhs.components)
    }
}

impl<U, C> AddAssign for Vector2d<U, C> {
    fn add_assign(&mut self, rhs: Self) {
        self.components += rhs.components;
    }
}

impl<U, C> Sub for Vector2d<U, C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_raw(self.components - rhs.components)
    }
}

impl<U, C> SubAssign for Vector2d<U, C> {
    fn sub_assign(&mut self, rhs: Self) {
        self.components -= rhs.components;
    }
}

impl<U, C> Neg for Vector2d<U, C> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_raw(-self.components)
    }
}

impl<U, C> Mul<f64> for Vector2d<U, C> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::from_raw(self.components * rhs)
    }
}

impl<U, C> Div<f64> for Vector2d<U, C> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::from_raw(self.components / rhs)
    }
}

impl<U, C> Sum for Vector2d<U, C> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}
