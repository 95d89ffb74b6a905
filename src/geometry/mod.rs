pub mod direction;
pub mod frame;
pub mod point;
pub mod vector;

pub use direction::{Direction2d, Direction3d};
pub use frame::{Axis2d, Axis3d, Frame2d, Frame3d, Plane3d, SketchPlane3d};
pub use point::{Point2d, Point3d};
pub use vector::{Vector2d, Vector3d};
