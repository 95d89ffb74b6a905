//! Unit- and frame-typed 2D/3D geometry primitives.
//!
//! Points, vectors and directions carry two zero-sized marker types: the
//! units of their components (see [`units`]) and the coordinate system they
//! are expressed in. Values from different coordinate systems can only be
//! combined after an explicit `relative_to`/`place_in` conversion through a
//! [`Frame2d`]/[`Frame3d`].

pub mod error;
pub mod geometry;
mod log;
mod macros;
pub mod math;
pub mod transform;
pub mod units;

pub use error::{GeometryError, GeoprimError, Result};
pub use geometry::{
    Axis2d, Axis3d, Direction2d, Direction3d, Frame2d, Frame3d, Plane3d, Point2d, Point3d,
    SketchPlane3d, Vector2d, Vector3d,
};
pub use transform::{Mirror2d, Mirror3d, Rotation2d, Rotation3d};
pub use units::{Angle, Area, Length, Meters, Pixels, Product, Quantity, Radians, Squared, Unitless};
