use crate::geometry::{Direction2d, Frame2d, Point2d};
use crate::macros::impl_value_traits;

/// An infinite directed line in 2D: an origin point and a direction.
pub struct Axis2d<U, C> {
    origin: Point2d<U, C>,
    direction: Direction2d<C>,
}

impl_value_traits! {
    Axis2d<U, C> { origin, direction }
}

impl<U, C> Axis2d<U, C> {
    /// The axis through `origin` along `direction`.
    #[must_use]
    pub fn through(origin: Point2d<U, C>, direction: Direction2d<C>) -> Self {
        Self { origin, direction }
    }

    /// The global X axis.
    #[must_use]
    pub fn x() -> Self {
        Self::through(Point2d::origin(), Direction2d::positive_x())
    }

    /// The global Y axis.
    #[must_use]
    pub fn y() -> Self {
        Self::through(Point2d::origin(), Direction2d::positive_y())
    }

    /// Returns the point the axis passes through.
    #[must_use]
    pub fn origin_point(&self) -> Point2d<U, C> {
        self.origin
    }

    /// Returns the axis direction.
    #[must_use]
    pub fn direction(&self) -> Direction2d<C> {
        self.direction
    }

    /// Returns the axis with the same origin and opposite direction.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self::through(self.origin, self.direction.reverse())
    }

    /// Expresses this axis in the local coordinates of `frame`.
    #[must_use]
    pub fn relative_to<L>(&self, frame: &Frame2d<U, C, L>) -> Axis2d<U, L> {
        Axis2d::through(
            self.origin.relative_to(frame),
            self.direction.relative_to(frame),
        )
    }

    /// Converts an axis given in the local coordinates of `frame` back to
    /// the coordinates `frame` is expressed in.
    #[must_use]
    pub fn place_in<G>(&self, frame: &Frame2d<U, G, C>) -> Axis2d<U, G> {
        Axis2d::through(self.origin.place_in(frame), self.direction.place_in(frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Angle, Length, Meters};

    enum World {}
    enum Local {}

    #[test]
    fn principal_axes() {
        assert_eq!(Axis2d::<Meters, World>::x().direction(), Direction2d::x());
        assert_eq!(Axis2d::<Meters, World>::y().reverse().direction(), Direction2d::negative_y());
    }

    #[test]
    fn relative_to_rotated_frame() {
        let frame = Frame2d::<Meters, World, Local>::with_x_direction(
            Point2d::meters(1.0, 1.0),
            Direction2d::from_angle(Angle::degrees(90.0)),
        );
        let axis = Axis2d::<Meters, World>::through(Point2d::meters(1.0, 3.0), Direction2d::y());
        let local = axis.relative_to(&frame);
        assert!(local.origin_point().equal_within(Length::meters(1e-12), Point2d::meters(2.0, 0.0)));
        assert!(local.direction().equal_within(Angle::radians(1e-12), Direction2d::x()));
        let back = local.place_in(&frame);
        assert!(back.origin_point().equal_within(Length::meters(1e-12), axis.origin_point()));
    }
}
