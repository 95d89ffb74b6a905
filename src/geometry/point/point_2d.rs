use std::cmp::Ordering;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::geometry::{Axis2d, Direction2d, Frame2d, Vector2d};
use crate::macros::impl_value_traits;
use crate::math::norm::interpolate;
use crate::math::Vector2;
use crate::units::{Angle, Meters, Quantity, Squared};

/// A position in 2D coordinates `C` with coordinates in units `U`.
///
/// Every transformation follows the same pattern: take the offset from the
/// transform's reference point, transform that vector, and add it back.
pub struct Point2d<U, C> {
    coordinates: Vector2,
    units: PhantomData<fn() -> (U, C)>,
}

impl_value_traits! {
    Point2d<U, C> { coordinates }
}

impl<U, C> Point2d<U, C> {
    pub(crate) fn from_raw(coordinates: Vector2) -> Self {
        Self {
            coordinates,
            units: PhantomData,
        }
    }

    pub(crate) fn raw(self) -> Vector2 {
        self.coordinates
    }

    /// Returns the origin of coordinates `C`.
    #[must_use]
    pub fn origin() -> Self {
        Self::from_raw(Vector2::zeros())
    }

    /// Builds a point from X and Y quantities in units `U`.
    #[must_use]
    pub fn xy(x: Quantity<U>, y: Quantity<U>) -> Self {
        Self::from_coordinates(x.raw(), y.raw())
    }

    /// Builds a point from raw coordinates in units `U`.
    #[must_use]
    pub fn from_coordinates(x: f64, y: f64) -> Self {
        Self::from_raw(Vector2::new(x, y))
    }

    /// The point at distance `radius` from the origin, at `angle`
    /// counterclockwise from the X axis.
    #[must_use]
    pub fn polar(radius: Quantity<U>, angle: Angle) -> Self {
        Self::origin() + Vector2d::polar(radius, angle)
    }

    /// Returns the point halfway between `first` and `second`.
    #[must_use]
    pub fn midpoint(first: Self, second: Self) -> Self {
        Self::interpolate_from(first, second, 0.5)
    }

    /// Interpolates from `start` (`t = 0`) to `end` (`t = 1`),
    /// extrapolating from the nearer endpoint.
    #[must_use]
    pub fn interpolate_from(start: Self, end: Self, t: f64) -> Self {
        Self::from_raw(interpolate(&start.coordinates, &end.coordinates, t))
    }

    /// Average of the given points, or `None` if there are none.
    ///
    /// Offsets are accumulated relative to the first point to limit
    /// roundoff for points far from the origin.
    #[must_use]
    pub fn centroid<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (count, offset) = points.fold((1.0_f64, Vector2d::<U, C>::zero()), |(n, sum), p| {
            (n + 1.0, sum + p.vector_from(first))
        });
        Some(first + offset / count)
    }

    /// Returns the `(x, y)` coordinates.
    #[must_use]
    pub fn coordinates(self) -> (Quantity<U>, Quantity<U>) {
        (self.x_coordinate(), self.y_coordinate())
    }

    /// Returns the X coordinate.
    #[must_use]
    pub fn x_coordinate(self) -> Quantity<U> {
        Quantity::from_raw(self.coordinates.x)
    }

    /// Returns the Y coordinate.
    #[must_use]
    pub fn y_coordinate(self) -> Quantity<U> {
        Quantity::from_raw(self.coordinates.y)
    }

    /// The vector from `other` to this point, `self - other`.
    #[must_use]
    pub fn vector_from(self, other: Self) -> Vector2d<U, C> {
        Vector2d::from_points(other, self)
    }

    /// The vector from this point to `other`; the exact negation of
    /// [`Point2d::vector_from`] with the same arguments.
    #[must_use]
    pub fn vector_to(self, other: Self) -> Vector2d<U, C> {
        Vector2d::from_points(self, other)
    }

    /// Returns the distance between the two points.
    #[must_use]
    pub fn distance_from(self, other: Self) -> Quantity<U> {
        self.vector_from(other).length()
    }

    /// Squared distance, avoiding the square root for threshold checks.
    #[must_use]
    pub fn squared_distance_from(self, other: Self) -> Quantity<Squared<U>> {
        self.vector_from(other).squared_length()
    }

    /// Returns true if the points are at most `tolerance` apart.
    #[must_use]
    pub fn equal_within(self, tolerance: Quantity<U>, other: Self) -> bool {
        self.distance_from(other) <= tolerance
    }

    /// Orders by X coordinate, then Y coordinate.
    #[must_use]
    pub fn compare_lexicographic(&self, other: &Self) -> Ordering {
        Vector2d::<U, C>::from_raw(self.coordinates)
            .compare_lexicographic(&Vector2d::from_raw(other.coordinates))
    }

    /// Signed distance of this point along `axis`, measured from its origin.
    #[must_use]
    pub fn signed_distance_along(self, axis: &Axis2d<U, C>) -> Quantity<U> {
        self.vector_from(axis.origin_point())
            .component_in(axis.direction())
    }

    /// Signed perpendicular distance from `axis`, positive to the left of
    /// the axis direction.
    #[must_use]
    pub fn signed_distance_from(self, axis: &Axis2d<U, C>) -> Quantity<U> {
        let offset = self.vector_from(axis.origin_point());
        Quantity::from_raw(axis.direction().raw().perp(&offset.raw()))
    }

    /// Unsigned perpendicular distance from `axis`.
    #[must_use]
    pub fn distance_from_axis(self, axis: &Axis2d<U, C>) -> Quantity<U> {
        self.signed_distance_from(axis).abs()
    }

    /// Translates by `displacement`.
    #[must_use]
    pub fn translate_by(self, displacement: Vector2d<U, C>) -> Self {
        self + displacement
    }

    /// Translates by the reverse of `displacement`.
    #[must_use]
    pub fn translate_by_negated(self, displacement: Vector2d<U, C>) -> Self {
        self - displacement
    }

    /// Moves this point by `distance` along `direction`.
    #[must_use]
    pub fn translate_in(self, direction: Direction2d<C>, distance: Quantity<U>) -> Self {
        self + Vector2d::with_length(distance, direction)
    }

    /// Moves this point by `distance` along the direction of `axis`; the
    /// axis origin does not matter.
    #[must_use]
    pub fn translate_along(self, axis: &Axis2d<U, C>, distance: Quantity<U>) -> Self {
        self + Vector2d::with_length(distance, axis.direction())
    }

    /// Scales about `center`: `center + scale * (self - center)`.
    ///
    /// Negative factors move the point to the other side of `center`; use
    /// [`Point2d::mirror_across`] or a rotation when that is the intent.
    #[must_use]
    pub fn scale_about(self, center: Self, scale: f64) -> Self {
        center + self.vector_from(center).scale_by(scale)
    }

    /// Rotates counterclockwise by `angle` about `center`.
    #[must_use]
    pub fn rotate_around(self, center: Self, angle: Angle) -> Self {
        center + self.vector_from(center).rotate_by(angle)
    }

    /// Mirrors across the line through `axis`.
    #[must_use]
    pub fn mirror_across(self, axis: &Axis2d<U, C>) -> Self {
        let origin = axis.origin_point();
        origin + self.vector_from(origin).mirror_across(axis)
    }

    /// The foot of the perpendicular from this point to `axis`.
    #[must_use]
    pub fn project_onto(self, axis: &Axis2d<U, C>) -> Self {
        let origin = axis.origin_point();
        origin + self.vector_from(origin).project_onto(axis)
    }

    /// Expresses this point in the local coordinates of `frame`.
    #[must_use]
    pub fn relative_to<L>(self, frame: &Frame2d<U, C, L>) -> Point2d<U, L> {
        Point2d::origin() + self.vector_from(frame.origin_point()).relative_to(frame)
    }

    /// Converts a point given in the local coordinates of `frame` back to
    /// the coordinates `frame` is expressed in.
    #[must_use]
    pub fn place_in<G>(self, frame: &Frame2d<U, G, C>) -> Point2d<U, G> {
        frame.origin_point() + self.vector_from(Self::origin()).place_in(frame)
    }
}

impl<C> Point2d<Meters, C> {
    /// Builds a point from coordinates in meters.
    #[must_use]
    pub fn meters(x: f64, y: f64) -> Self {
        Self::from_coordinates(x, y)
    }
}

impl<U, C> Add<Vector2d<U, C>> for Point2d<U, C> {
    type Output = Self;

    fn add(self, rhs: Vector2d<U, C>) -> Self {
        Self::from_raw(self.coordinates + rhs.raw())
    }
}

impl<U, C> AddAssign<Vector2d<U, C>> for Point2d<U, C> {
    fn add_assign(&mut self, rhs: Vector2d<U, C>) {
        self.coordinates += rhs.raw();
    }
}

impl<U, C> Sub<Vector2d<U, C>> for Point2d<U, C> {
    type Output = Self;

    fn sub(self, rhs: Vector2d<U, C>) -> Self {
        Self::from_raw(self.coordinates - rhs.raw())
    }
}

impl<U, C> SubAssign<Vector2d<U, C>> for Point2d<U, C> {
    fn sub_assign(&mut self, rhs: Vector2d<U, C>) {
        self.coordinates -= rhs.raw();
    }
}

/// `a - b` is the vector from `b` to `a`.
impl<U, C> Sub for Point2d<U, C> {
    type Output = Vector2d<U, C>;

    fn sub(self, rhs: Self) -> Vector2d<U, C> {
        self.vector_from(rhs)
    }
}
