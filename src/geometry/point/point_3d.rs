use std::cmp::Ordering;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::geometry::{
    Axis3d, Direction3d, Frame3d, Plane3d, Point2d, SketchPlane3d, Vector3d,
};
use crate::macros::impl_value_traits;
use crate::math::norm::interpolate;
use crate::math::Vector3;
use crate::units::{Angle, Meters, Quantity, Squared};

/// A position in 3D coordinates `C` with coordinates in units `U`.
///
/// Transformations take the offset from the transform's reference point
/// (axis origin, plane origin, frame origin), transform that offset as a
/// [`Vector3d`], and add it back.
pub struct Point3d<U, C> {
    coordinates: Vector3,
    units: PhantomData<fn() -> (U, C)>,
}

impl_value_traits! {
    Point3d<U, C> { coordinates }
}

impl<U, C> Point3d<U, C> {
    pub(crate) fn from_raw(coordinates: Vector3) -> Self {
        Self {
            coordinates,
            units: PhantomData,
        }
    }

    pub(crate) fn raw(self) -> Vector3 {
        self.coordinates
    }

    /// Returns the origin of coordinates `C`.
    #[must_use]
    pub fn origin() -> Self {
        Self::from_raw(Vector3::zeros())
    }

    /// Builds a point from X, Y and Z quantities in units `U`.
    #[must_use]
    pub fn xyz(x: Quantity<U>, y: Quantity<U>, z: Quantity<U>) -> Self {
        Self::from_coordinates(x.raw(), y.raw(), z.raw())
    }

    /// Builds a point from raw coordinates in units `U`.
    #[must_use]
    pub fn from_coordinates(x: f64, y: f64, z: f64) -> Self {
        Self::from_raw(Vector3::new(x, y, z))
    }

    /// Places a point given in the 2D coordinates of `sketch_plane` into 3D.
    #[must_use]
    pub fn on<L>(sketch_plane: &SketchPlane3d<U, C, L>, point: Point2d<U, L>) -> Self {
        sketch_plane.origin_point()
            + Vector3d::on(sketch_plane, point.vector_from(Point2d::origin()))
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
    #[must_use]
    pub fn centroid<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (count, offset) = points.fold((1.0_f64, Vector3d::<U, C>::zero()), |(n, sum), p| {
            (n + 1.0, sum + p.vector_from(first))
        });
        Some(first + offset / count)
    }

    /// Returns the `(x, y, z)` coordinates.
    #[must_use]
    pub fn coordinates(self) -> (Quantity<U>, Quantity<U>, Quantity<U>) {
        (self.x_coordinate(), self.y_coordinate(), self.z_coordinate())
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

    /// Returns the Z coordinate.
    #[must_use]
    pub fn z_coordinate(self) -> Quantity<U> {
        Quantity::from_raw(self.coordinates.z)
    }

    /// The vector from `other` to this point, `self - other`.
    #[must_use]
    pub fn vector_from(self, other: Self) -> Vector3d<U, C> {
        Vector3d::from_points(other, self)
    }

    /// The vector from this point to `other`; the exact negation of
    /// [`Point3d::vector_from`] with the same arguments.
    #[must_use]
    pub fn vector_to(self, other: Self) -> Vector3d<U, C> {
        Vector3d::from_points(self, other)
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

    /// Orders by X, then Y, then Z coordinate.
    #[must_use]
    pub fn compare_lexicographic(&self, other: &Self) -> Ordering {
        Vector3d::<U, C>::from_raw(self.coordinates)
            .compare_lexicographic(&Vector3d::from_raw(other.coordinates))
    }

    /// Signed distance of this point along `axis`, measured from its origin.
    #[must_use]
    pub fn signed_distance_along(self, axis: &Axis3d<U, C>) -> Quantity<U> {
        self.vector_from(axis.origin_point())
            .component_in(axis.direction())
    }

    /// Perpendicular distance from `axis`, the length of the cross product
    /// of the offset with the axis direction.
    #[must_use]
    pub fn distance_from_axis(self, axis: &Axis3d<U, C>) -> Quantity<U> {
        let offset = self.vector_from(axis.origin_point());
        Quantity::from_raw(offset.cross(axis.direction().to_vector()).length().raw())
    }

    /// Signed distance from `plane`, positive on the side its normal points to.
    #[must_use]
    pub fn signed_distance_from(self, plane: &Plane3d<U, C>) -> Quantity<U> {
        self.vector_from(plane.origin_point())
            .component_in(plane.normal_direction())
    }

    /// Translates by `displacement`.
    #[must_use]
    pub fn translate_by(self, displacement: Vector3d<U, C>) -> Self {
        self + displacement
    }

    /// Translates by the reverse of `displacement`.
    #[must_use]
    pub fn translate_by_negated(self, displacement: Vector3d<U, C>) -> Self {
        self - displacement
    }

    /// Moves this point by `distance` along `direction`.
    #[must_use]
    pub fn translate_in(self, direction: Direction3d<C>, distance: Quantity<U>) -> Self {
        self + Vector3d::with_length(distance, direction)
    }

    /// Moves this point by `distance` along the direction of `axis`; the
    /// axis origin does not matter.
    #[must_use]
    pub fn translate_along(self, axis: &Axis3d<U, C>, distance: Quantity<U>) -> Self {
        self + Vector3d::with_length(distance, axis.direction())
    }

    /// Scales about `center`: `center + scale * (self - center)`.
    ///
    /// Negative factors move the point through `center` to the other side;
    /// compose [`Point3d::mirror_across`] with a rotation for reflections.
    #[must_use]
    pub fn scale_about(self, center: Self, scale: f64) -> Self {
        center + self.vector_from(center).scale_by(scale)
    }

    /// Rotates by `angle` around `axis` (right-hand rule).
    #[must_use]
    pub fn rotate_around(self, axis: &Axis3d<U, C>, angle: Angle) -> Self {
        let origin = axis.origin_point();
        origin + self.vector_from(origin).rotate_around(axis, angle)
    }

    /// Mirrors across `plane`.
    #[must_use]
    pub fn mirror_across(self, plane: &Plane3d<U, C>) -> Self {
        let origin = plane.origin_point();
        origin + self.vector_from(origin).mirror_across(plane)
    }

    /// The foot of the perpendicular from this point to `plane`.
    #[must_use]
    pub fn project_onto(self, plane: &Plane3d<U, C>) -> Self {
        let origin = plane.origin_point();
        origin + self.vector_from(origin).project_onto(plane)
    }

    /// The foot of the perpendicular from this point to `axis`.
    #[must_use]
    pub fn project_onto_axis(self, axis: &Axis3d<U, C>) -> Self {
        let origin = axis.origin_point();
        origin + self.vector_from(origin).projection_in(axis.direction())
    }

    /// Expresses this point in the local coordinates of `frame`.
    #[must_use]
    pub fn relative_to<L>(self, frame: &Frame3d<U, C, L>) -> Point3d<U, L> {
        Point3d::origin() + self.vector_from(frame.origin_point()).relative_to(frame)
    }

    /// Converts a point given in the local coordinates of `frame` back to
    /// the coordinates `frame` is expressed in.
    #[must_use]
    pub fn place_in<G>(self, frame: &Frame3d<U, G, C>) -> Point3d<U, G> {
        frame.origin_point() + self.vector_from(Self::origin()).place_in(frame)
    }

    /// Projects onto `sketch_plane` and expresses the result in its 2D
    /// coordinates.
    #[must_use]
    pub fn project_into<L>(self, sketch_plane: &SketchPlane3d<U, C, L>) -> Point2d<U, L> {
        Point2d::origin()
            + self
                .vector_from(sketch_plane.origin_point())
                .project_into(sketch_plane)
    }
}

impl<C> Point3d<Meters, C> {
    /// Builds a point from coordinates in meters.
    #[must_use]
    pub fn meters(x: f64, y: f64, z: f64) -> Self {
        Self::from_coordinates(x, y, z)
    }
}

impl<U, C> Add<Vector3d<U, C>> for Point3d<U, C> {
    type Output = Self;

    fn add(self, rhs: Vector3d<U, C>) -> Self {
        Self::from_raw(self.coordinates + rhs.raw())
    }
}

impl<U, C> AddAssign<Vector3d<U, C>> for Point3d<U, C> {
    fn add_assign(&mut self, rhs: Vector3d<U, C>) {
        self.coordinates += rhs.raw();
    }
}

impl<U, C> Sub<Vector3d<U, C>> for Point3d<U, C> {
    type Output = Self;

    fn sub(self, rhs: Vector3d<U, C>) -> Self {
        Self::from_raw(self.coordinates - rhs.raw())
    }
}

impl<U, C> SubAssign<Vector3d<U, C>> for Point3d<U, C> {
    fn sub_assign(&mut self, rhs: Vector3d<U, C>) {
        self.coordinates -= rhs.raw();
    }
}

/// `a - b` is the vector from `b` to `a`.
impl<U, C> Sub for Point3d<U, C> {
    type Output = Vector3d<U, C>;

    fn sub(self, rhs: Self) -> Vector3d<U, C> {
        self.vector_from(rhs)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::units::Length;

    enum World {}
    enum Local {}
    enum Sketch {}

    type P = Point3d<Meters, World>;
    type V = Vector3d<Meters, World>;

    fn p(x: f64, y: f64, z: f64) -> P {
        P::meters(x, y, z)
    }

    #[test]
    fn translate_and_difference() {
        assert_eq!(p(3.0, 4.0, 0.0) + V::meters(1.0, 2.0, 0.0), p(4.0, 6.0, 0.0));
        assert_eq!(p(3.0, 4.0, 0.0).translate_by_negated(V::meters(1.0, 2.0, 0.0)), p(2.0, 2.0, 0.0));
        assert_eq!(p(3.0, 4.0, 1.0) - p(1.0, 1.0, 1.0), V::meters(2.0, 3.0, 0.0));
        assert_eq!(
            p(1.0, 2.0, 3.0).vector_to(p(0.0, 0.0, 0.0)),
            -p(1.0, 2.0, 3.0).vector_from(p(0.0, 0.0, 0.0))
        );
    }

    #[test]
    fn distances() {
        let a = p(1.0, 1.0, 1.0);
        let b = p(3.0, 2.0, 3.0);
        assert_eq!(a.distance_from(b), Length::meters(3.0));
        assert_eq!(a.squared_distance_from(b).raw(), 9.0);
    }

    #[test]
    fn distances_relative_to_axis_and_plane() {
        let axis = Axis3d::through(p(1.0, 0.0, 0.0), Direction3d::z());
        let point = p(4.0, 4.0, -2.0);
        assert_eq!(point.signed_distance_along(&axis), Length::meters(-2.0));
        assert_eq!(point.distance_from_axis(&axis), Length::meters(5.0));
        assert_eq!(point.project_onto_axis(&axis), p(1.0, 0.0, -2.0));

        let plane = Plane3d::through(p(0.0, 0.0, 1.0), Direction3d::z());
        assert_eq!(point.signed_distance_from(&plane), Length::meters(-3.0));
        assert_eq!(point.project_onto(&plane), p(4.0, 4.0, 1.0));
        assert_eq!(point.mirror_across(&plane), p(4.0, 4.0, 4.0));
    }

    #[test]
    fn rotate_around_offset_axis() {
        let axis = Axis3d::through(p(1.0, 1.0, 0.0), Direction3d::z());
        let rotated = p(2.0, 1.0, 5.0).rotate_around(&axis, Angle::degrees(180.0));
        assert!(rotated.equal_within(Length::meters(1e-12), p(0.0, 1.0, 5.0)));
    }

    #[test]
    fn scale_about_center() {
        let center = p(1.0, 1.0, 1.0);
        assert_eq!(p(2.0, 3.0, 4.0).scale_about(center, 3.0), p(4.0, 7.0, 10.0));
    }

    #[test]
    fn frame_round_trip() {
        let frame = Frame3d::<Meters, World, Local>::with_z_direction(
            p(10.0, -3.0, 2.5),
            Direction3d::from_components(-1.0, 2.0, 0.5).unwrap(),
        );
        for point in [p(0.0, 0.0, 0.0), p(1.0, 2.0, 3.0), p(-7.5, 4.0, 100.0)] {
            let local = point.relative_to(&frame);
            assert!(local.place_in(&frame).equal_within(Length::meters(1e-9), point));
        }
        let origin = frame.origin_point().relative_to(&frame);
        assert_relative_eq!(origin.x_coordinate().raw(), 0.0);
    }

    #[test]
    fn sketch_plane_round_trip() {
        let sketch_plane = SketchPlane3d::<Meters, World, Sketch>::xy().offset_by(Length::meters(2.0));
        let point = p(3.0, -1.0, 7.0);
        let projected = point.project_into(&sketch_plane);
        assert_eq!(projected, Point2d::meters(3.0, -1.0));
        assert_eq!(P::on(&sketch_plane, projected), p(3.0, -1.0, 2.0));
    }

    #[test]
    fn centroid_of_points() {
        let centroid = P::centroid([p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(1.0, 3.0, 6.0)]).unwrap();
        assert!(centroid.equal_within(Length::meters(1e-12), p(1.0, 1.0, 2.0)));
        assert_eq!(P::midpoint(p(0.0, 0.0, 0.0), p(2.0, 4.0, -6.0)), p(1.0, 2.0, -3.0));
    }

    #[test]
    fn translate_along_axis_ignores_axis_origin() {
        let axis = Axis3d::through(p(5.0, 5.0, 5.0), Direction3d::negative_z());
        assert_eq!(p(1.0, 2.0, 3.0).translate_along(&axis, Length::meters(2.0)), p(1.0, 2.0, 1.0));
        assert_eq!(
            p(1.0, 2.0, 3.0).translate_along(&axis, Length::meters(-1.0)),
            p(1.0, 2.0, 3.0).translate_in(Direction3d::z(), Length::meters(1.0))
        );
    }
}
