use std::marker::PhantomData;

use crate::error::Result;
use crate::geometry::{Axis2d, Direction2d, Point2d};
use crate::macros::impl_value_traits;

use super::ensure_perpendicular;

/// A 2D coordinate frame expressed in coordinates `C` that defines local
/// coordinates `L`.
///
/// The basis directions are orthonormal; the frame may be left-handed
/// when built through [`Frame2d::with_directions`].
pub struct Frame2d<U, C, L> {
    origin: Point2d<U, C>,
    x_direction: Direction2d<C>,
    y_direction: Direction2d<C>,
    defines: PhantomData<fn() -> L>,
}

impl_value_traits! {
    Frame2d<U, C, L> { origin, x_direction, y_direction }
}

impl<U, C, L> Frame2d<U, C, L> {
    fn unchecked(
        origin: Point2d<U, C>,
        x_direction: Direction2d<C>,
        y_direction: Direction2d<C>,
    ) -> Self {
        Self {
            origin,
            x_direction,
            y_direction,
            defines: PhantomData,
        }
    }

    /// The frame coinciding with the global coordinate system.
    #[must_use]
    pub fn at_origin() -> Self {
        Self::at_point(Point2d::origin())
    }

    /// A frame with global axis directions, moved to `origin`.
    #[must_use]
    pub fn at_point(origin: Point2d<U, C>) -> Self {
        Self::with_x_direction(origin, Direction2d::positive_x())
    }

    /// A right-handed frame whose Y direction is `x_direction` rotated 90
    /// degrees counterclockwise.
    #[must_use]
    pub fn with_x_direction(origin: Point2d<U, C>, x_direction: Direction2d<C>) -> Self {
        Self::unchecked(origin, x_direction, x_direction.perpendicular_to())
    }

    /// A frame with the given basis directions.
    ///
    /// # Errors
    ///
    /// Returns an error if the directions are not perpendicular.
    pub fn with_directions(
        origin: Point2d<U, C>,
        x_direction: Direction2d<C>,
        y_direction: Direction2d<C>,
    ) -> Result<Self> {
        ensure_perpendicular("x", "y", x_direction.component_in(y_direction))?;
        Ok(Self::unchecked(origin, x_direction, y_direction))
    }

    /// Returns the origin of the frame.
    #[must_use]
    pub fn origin_point(&self) -> Point2d<U, C> {
        self.origin
    }

    /// Returns the X basis direction.
    #[must_use]
    pub fn x_direction(&self) -> Direction2d<C> {
        self.x_direction
    }

    /// Returns the Y basis direction.
    #[must_use]
    pub fn y_direction(&self) -> Direction2d<C> {
        self.y_direction
    }

    /// Returns the axis through the origin along the X direction.
    #[must_use]
    pub fn x_axis(&self) -> Axis2d<U, C> {
        Axis2d::through(self.origin, self.x_direction)
    }

    /// Returns the axis through the origin along the Y direction.
    #[must_use]
    pub fn y_axis(&self) -> Axis2d<U, C> {
        Axis2d::through(self.origin, self.y_direction)
    }

    /// True if the Y direction is counterclockwise from the X direction.
    #[must_use]
    pub fn is_right_handed(&self) -> bool {
        self.x_direction.raw().perp(&self.y_direction.raw()) > 0.0
    }

    /// The same frame with its X direction reversed (and handedness flipped).
    #[must_use]
    pub fn reverse_x(&self) -> Self {
        Self::unchecked(self.origin, self.x_direction.reverse(), self.y_direction)
    }

    /// The same frame with its Y direction reversed.
    #[must_use]
    pub fn reverse_y(&self) -> Self {
        Self::unchecked(self.origin, self.x_direction, self.y_direction.reverse())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{GeometryError, GeoprimError};
    use crate::units::{Angle, Meters};

    enum World {}
    enum Local {}

    type F = Frame2d<Meters, World, Local>;

    #[test]
    fn default_frames_are_right_handed() {
        assert!(F::at_origin().is_right_handed());
        assert!(!F::at_origin().reverse_y().is_right_handed());
        assert_eq!(F::at_origin().y_direction(), Direction2d::y());
    }

    #[test]
    fn with_directions_validates_orthogonality() {
        let origin = Point2d::meters(1.0, 2.0);
        let frame = F::with_directions(origin, Direction2d::y(), Direction2d::x()).unwrap();
        assert!(!frame.is_right_handed());

        let skewed = F::with_directions(
            origin,
            Direction2d::x(),
            Direction2d::from_angle(Angle::degrees(80.0)),
        );
        assert!(matches!(
            skewed,
            Err(GeoprimError::Geometry(GeometryError::NotOrthonormal { .. }))
        ));
    }

    #[test]
    fn axes_share_the_origin() {
        let frame = F::at_point(Point2d::meters(3.0, -1.0));
        assert_eq!(frame.x_axis().origin_point(), Point2d::meters(3.0, -1.0));
        assert_eq!(frame.y_axis().direction(), Direction2d::y());
    }
}
