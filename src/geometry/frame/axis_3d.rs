use crate::geometry::{Direction3d, Frame3d, Point3d};
use crate::macros::impl_value_traits;

/// An infinite directed line in 3D: an origin point and a direction.
///
/// Rotations use the direction with the right-hand rule.
pub struct Axis3d<U, C> {
    origin: Point3d<U, C>,
    direction: Direction3d<C>,
}

impl_value_traits! {
    Axis3d<U, C> { origin, direction }
}

impl<U, C> Axis3d<U, C> {
    /// The axis through `origin` along `direction`.
    #[must_use]
    pub fn through(origin: Point3d<U, C>, direction: Direction3d<C>) -> Self {
        Self { origin, direction }
    }

    /// The global X axis.
    #[must_use]
    pub fn x() -> Self {
        Self::through(Point3d::origin(), Direction3d::positive_x())
    }

    /// The global Y axis.
    #[must_use]
    pub fn y() -> Self {
        Self::through(Point3d::origin(), Direction3d::positive_y())
    }

    /// The global Z axis.
    #[must_use]
    pub fn z() -> Self {
        Self::through(Point3d::origin(), Direction3d::positive_z())
    }

    /// Returns the point the axis passes through.
    #[must_use]
    pub fn origin_point(&self) -> Point3d<U, C> {
        self.origin
    }

    /// Returns the axis direction.
    #[must_use]
    pub fn direction(&self) -> Direction3d<C> {
        self.direction
    }

    /// Returns the axis with the same origin and opposite direction.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self::through(self.origin, self.direction.reverse())
    }

    /// Expresses this axis in the local coordinates of `frame`.
    #[must_use]
    pub fn relative_to<L>(&self, frame: &Frame3d<U, C, L>) -> Axis3d<U, L> {
        Axis3d::through(
            self.origin.relative_to(frame),
            self.direction.relative_to(frame),
        )
    }

    /// Converts an axis given in the local coordinates of `frame` back to
    /// the coordinates `frame` is expressed in.
    #[must_use]
    pub fn place_in<G>(&self, frame: &Frame3d<U, G, C>) -> Axis3d<U, G> {
        Axis3d::through(self.origin.place_in(frame), self.direction.place_in(frame))
    }
}
