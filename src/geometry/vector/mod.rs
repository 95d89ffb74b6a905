mod vector_2d;
mod vector_3d;

pub use vector_2d::Vector2d;
pub use vector_3d::Vector3d;
