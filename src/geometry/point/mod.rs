mod point_2d;
mod point_3d;

pub use point_2d::Point2d;
pub use point_3d::Point3d;
