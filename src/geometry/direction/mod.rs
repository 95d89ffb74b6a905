mod direction_2d;
mod direction_3d;

pub use direction_2d::Direction2d;
pub use direction_3d::Direction3d;
