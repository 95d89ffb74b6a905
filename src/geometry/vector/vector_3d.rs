use std::cmp::Ordering;
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::geometry::{
    Axis3d, Direction3d, Frame3d, Plane3d, Point3d, SketchPlane3d, Vector2d,
};
use crate::log;
use crate::macros::impl_value_traits;
use crate::math::norm::interpolate;
use crate::math::{compare_lexicographic, perpendicular_3d, stable_length, stable_normalize, Vector3};
use crate::transform::{householder_3d, rotation_matrix_3d};
use crate::units::{Angle, Meters, Product, Quantity, Squared, Unitless};

/// A 3D displacement with components in units `U`, expressed in
/// coordinates `C`.
pub struct Vector3d<U, C> {
    components: Vector3,
    units: PhantomData<fn() -> (U, C)>,
}

impl_value_traits! {
    Vector3d<U, C> { components }
}

impl<U, C> Vector3d<U, C> {
    pub(crate) fn from_raw(components: Vector3) -> Self {
        Self {
            components,
            units: PhantomData,
        }
    }

    pub(crate) fn raw(self) -> Vector3 {
        self.components
    }

    /// The zero vector. It has no direction.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_raw(Vector3::zeros())
    }

    /// Builds a vector from X, Y and Z quantities in units `U`.
    #[must_use]
    pub fn xyz(x: Quantity<U>, y: Quantity<U>, z: Quantity<U>) -> Self {
        Self::from_components(x.raw(), y.raw(), z.raw())
    }

    /// Builds a vector from raw components in units `U`.
    #[must_use]
    pub fn from_components(x: f64, y: f64, z: f64) -> Self {
        Self::from_raw(Vector3::new(x, y, z))
    }

    /// A vector from cylindrical components: `radius` and `angle` in the XY
    /// plane plus a Z component.
    #[must_use]
    pub fn cylindrical(radius: Quantity<U>, angle: Angle, z: Quantity<U>) -> Self {
        Self::from_components(
            radius.raw() * angle.cos(),
            radius.raw() * angle.sin(),
            z.raw(),
        )
    }

    /// The displacement from `start` to `end`, i.e. `end - start`.
    #[must_use]
    pub fn from_points(start: Point3d<U, C>, end: Point3d<U, C>) -> Self {
        Self::from_raw(end.raw() - start.raw())
    }

    /// A vector of signed length `length` along `direction`.
    #[must_use]
    pub fn with_length(length: Quantity<U>, direction: Direction3d<C>) -> Self {
        Self::from_raw(direction.raw() * length.raw())
    }

    /// Places a vector given in the 2D coordinates of `sketch_plane` into
    /// the 3D coordinates the sketch plane is expressed in.
    #[must_use]
    pub fn on<A, L>(sketch_plane: &SketchPlane3d<A, C, L>, vector: Vector2d<U, L>) -> Self {
        let local = vector.raw();
        Self::from_raw(
            sketch_plane.x_direction().raw() * local.x + sketch_plane.y_direction().raw() * local.y,
        )
    }

    /// Interpolates from `start` (`t = 0`) to `end` (`t = 1`), extrapolating
    /// from the nearer endpoint.
    #[must_use]
    pub fn interpolate_from(start: Self, end: Self, t: f64) -> Self {
        Self::from_raw(interpolate(&start.components, &end.components, t))
    }

    /// Returns the `(x, y, z)` components.
    #[must_use]
    pub fn components(self) -> (Quantity<U>, Quantity<U>, Quantity<U>) {
        (self.x_component(), self.y_component(), self.z_component())
    }

    /// Returns the X component.
    #[must_use]
    pub fn x_component(self) -> Quantity<U> {
        self.component_in(Direction3d::positive_x())
    }

    /// Returns the Y component.
    #[must_use]
    pub fn y_component(self) -> Quantity<U> {
        self.component_in(Direction3d::positive_y())
    }

    /// Returns the Z component.
    #[must_use]
    pub fn z_component(self) -> Quantity<U> {
        self.component_in(Direction3d::positive_z())
    }

    /// Signed component of this vector along `direction`.
    #[must_use]
    pub fn component_in(self, direction: Direction3d<C>) -> Quantity<U> {
        Quantity::from_raw(self.components.dot(&direction.raw()))
    }

    /// Length, computed without intermediate overflow or underflow.
    #[must_use]
    pub fn length(self) -> Quantity<U> {
        Quantity::from_raw(stable_length(self.components))
    }

    /// Returns the squared length, without a square root.
    #[must_use]
    pub fn squared_length(self) -> Quantity<Squared<U>> {
        Quantity::from_raw(self.components.norm_squared())
    }

    /// The direction of this vector, or `None` for the exact zero vector.
    #[must_use]
    pub fn direction(self) -> Option<Direction3d<C>> {
        self.length_and_direction().map(|(_, direction)| direction)
    }

    /// Returns the length and the direction together, or `None` for the zero vector.
    #[must_use]
    pub fn length_and_direction(self) -> Option<(Quantity<U>, Direction3d<C>)> {
        let result = stable_normalize(self.components)
            .map(|(length, unit)| (Quantity::from_raw(length), Direction3d::unchecked(unit)));
        if result.is_none() {
            log::trace!("zero 3D vector has no direction");
        }
        result
    }

    /// The unit vector in the same direction, or the zero vector if this is
    /// zero. Use [`Vector3d::direction`] to handle the zero case explicitly.
    #[must_use]
    pub fn normalize(self) -> Vector3d<Unitless, C> {
        stable_normalize(self.components).map_or_else(Vector3d::zero, |(_, unit)| {
            Vector3d::from_raw(unit)
        })
    }

    /// True if `length(self - other) <= tolerance`.
    #[must_use]
    pub fn equal_within(self, tolerance: Quantity<U>, other: Self) -> bool {
        (self - other).length() <= tolerance
    }

    /// Orders by X component, then Y, then Z.
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
    pub fn dot<V>(self, other: Vector3d<V, C>) -> Quantity<Product<U, V>> {
        Quantity::from_raw(self.components.dot(&other.components))
    }

    /// Returns the cross product `self x other`, in the product of both units.
    #[must_use]
    pub fn cross<V>(self, other: Vector3d<V, C>) -> Vector3d<Product<U, V>, C> {
        Vector3d::from_raw(self.components.cross(&other.components))
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
    pub fn times<V>(self, factor: Quantity<V>) -> Vector3d<Product<V, U>, C> {
        Vector3d::from_raw(self.components * factor.raw())
    }

    /// Rescales to the given length; the zero vector stays zero.
    #[must_use]
    pub fn scale_to<V>(self, length: Quantity<V>) -> Vector3d<V, C> {
        Vector3d::from_raw(self.normalize().components * length.raw())
    }

    /// A vector perpendicular to this one, zero only if this is zero.
    ///
    /// Which perpendicular is returned is fixed by the magnitudes of the
    /// components, see [`perpendicular_3d`].
    #[must_use]
    pub fn perpendicular_to(self) -> Self {
        Self::from_raw(perpendicular_3d(&self.components))
    }

    /// Rotates around the direction of `axis` by `angle` (right-hand rule).
    #[must_use]
    pub fn rotate_around<A>(self, axis: &Axis3d<A, C>, angle: Angle) -> Self {
        Self::from_raw(rotation_matrix_3d(axis.direction(), angle) * self.components)
    }

    /// Reflects through the plane's normal with `I - 2 n n^T`.
    #[must_use]
    pub fn mirror_across<A>(self, plane: &Plane3d<A, C>) -> Self {
        Self::from_raw(householder_3d(&plane.normal_direction().raw()) * self.components)
    }

    /// The component of this vector parallel to `direction`.
    #[must_use]
    pub fn projection_in(self, direction: Direction3d<C>) -> Self {
        Self::with_length(self.component_in(direction), direction)
    }

    /// The component of this vector lying in `plane`.
    #[must_use]
    pub fn project_onto<A>(self, plane: &Plane3d<A, C>) -> Self {
        self - self.projection_in(plane.normal_direction())
    }

    /// Expresses this vector in the local coordinates of `frame`.
    #[must_use]
    pub fn relative_to<A, L>(self, frame: &Frame3d<A, C, L>) -> Vector3d<U, L> {
        Vector3d::from_components(
            self.component_in(frame.x_direction()).raw(),
            self.component_in(frame.y_direction()).raw(),
            self.component_in(frame.z_direction()).raw(),
        )
    }

    /// Converts a vector given in the local coordinates of `frame` back to
    /// the coordinates `frame` is expressed in.
    #[must_use]
    pub fn place_in<A, G>(self, frame: &Frame3d<A, G, C>) -> Vector3d<U, G> {
        Vector3d::from_raw(
            frame.x_direction().raw() * self.components.x
                + frame.y_direction().raw() * self.components.y
                + frame.z_direction().raw() * self.components.z,
        )
    }

    /// Projects onto `sketch_plane` and expresses the result in its 2D
    /// coordinates.
    #[must_use]
    pub fn project_into<A, L>(self, sketch_plane: &SketchPlane3d<A, C, L>) -> Vector2d<U, L> {
        Vector2d::from_components(
            self.component_in(sketch_plane.x_direction()).raw(),
            self.component_in(sketch_plane.y_direction()).raw(),
        )
    }
}

impl<C> Vector3d<Meters, C> {
    /// Builds a vector from components in meters.
    #[must_use]
    pub fn meters(x: f64, y: f64, z: f64) -> Self {
        Self::from_components(x, y, z)
    }
}

impl<C> Vector3d<Unitless, C> {
    /// Builds a dimensionless value from raw components.
    #[must_use]
    pub fn unitless(x: f64, y: f64, z: f64) -> Self {
        Self::from_components(x, y, z)
    }
}

impl<U, C> Add for Vector3d<U, C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_raw(self.components + rhs.components)
    }
}

impl<U, C> AddAssign for Vector3d<U, C> {
    fn add_assign(&mut self, rhs: Self) {
        self.components += rhs.components;
    }
}

impl<U, C> Sub for Vector3d<U, C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_raw(self.components - rhs.components)
    }
}

impl<U, C> SubAssign for Vector3d<U, C> {
    fn sub_assign(&mut self, rhs: Self) {
        self.components -= rhs.components;
    }
}

impl<U, C> Neg for Vector3d<U, C> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_raw(-self.components)
    }
}

impl<U, C> Mul<f64> for Vector3d<U, C> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::from_raw(self.components * rhs)
    }
}

impl<U, C> Div<f64> for Vector3d<U, C> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::from_raw(self.components / rhs)
    }
}

impl<U, C> Sum for Vector3d<U, C> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}
