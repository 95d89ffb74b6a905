use crate::error::{GeometryError, Result};
use crate::geometry::{Axis3d, Direction3d, Frame3d, Point3d, Vector3d};
use crate::log;
use crate::macros::impl_value_traits;
use crate::units::Quantity;

/// An infinite plane in 3D: an origin point and a unit normal direction.
pub struct Plane3d<U, C> {
    origin: Point3d<U, C>,
    normal: Direction3d<C>,
}

impl_value_traits! {
    Plane3d<U, C> { origin, normal }
}

impl<U, C> Plane3d<U, C> {
    /// The plane through `origin` with the given normal direction.
    #[must_use]
    pub fn through(origin: Point3d<U, C>, normal: Direction3d<C>) -> Self {
        Self { origin, normal }
    }

    /// Creates a plane from an origin and a (not necessarily unit) normal
    /// vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal vector is zero.
    pub fn with_normal<V>(origin: Point3d<U, C>, normal: Vector3d<V, C>) -> Result<Self> {
        let Some(normal) = normal.direction() else {
            log::debug!("rejected plane with zero normal vector");
            return Err(GeometryError::ZeroVector.into());
        };
        Ok(Self::through(origin, normal))
    }

    /// The XY plane through the origin, with normal +Z.
    #[must_use]
    pub fn xy() -> Self {
        Self::through(Point3d::origin(), Direction3d::positive_z())
    }

    /// The YZ plane through the origin, with normal +X.
    #[must_use]
    pub fn yz() -> Self {
        Self::through(Point3d::origin(), Direction3d::positive_x())
    }

    /// The ZX plane through the origin, with normal +Y.
    #[must_use]
    pub fn zx() -> Self {
        Self::through(Point3d::origin(), Direction3d::positive_y())
    }

    /// Returns the point the plane passes through.
    #[must_use]
    pub fn origin_point(&self) -> Point3d<U, C> {
        self.origin
    }

    /// Returns the unit normal.
    #[must_use]
    pub fn normal_direction(&self) -> Direction3d<C> {
        self.normal
    }

    /// Returns the axis through the origin along the normal.
    #[must_use]
    pub fn normal_axis(&self) -> Axis3d<U, C> {
        Axis3d::through(self.origin, self.normal)
    }

    /// The parallel plane at signed `distance` along the normal.
    #[must_use]
    pub fn offset_by(&self, distance: Quantity<U>) -> Self {
        Self::through(self.origin.translate_in(self.normal, distance), self.normal)
    }

    /// Returns the same plane with its normal flipped.
    #[must_use]
    pub fn reverse_normal(&self) -> Self {
        Self::through(self.origin, self.normal.reverse())
    }

    /// Expresses this plane in the local coordinates of `frame`.
    #[must_use]
    pub fn relative_to<L>(&self, frame: &Frame3d<U, C, L>) -> Plane3d<U, L> {
        Plane3d::through(self.origin.relative_to(frame), self.normal.relative_to(frame))
    }

    /// Converts a plane given in the local coordinates of `frame` back to
    /// the coordinates `frame` is expressed in.
    #[must_use]
    pub fn place_in<G>(&self, frame: &Frame3d<U, G, C>) -> Plane3d<U, G> {
        Plane3d::through(self.origin.place_in(frame), self.normal.place_in(frame))
    }
}
