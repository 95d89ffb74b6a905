use thiserror::Error;

/// Top-level error type for the geometry primitives.
#[derive(Debug, Error)]
pub enum GeoprimError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised when building frames, planes and other descriptors.
///
/// The arithmetic core never fails: degenerate vectors surface as `None`
/// from [`Vector3d::direction`](crate::Vector3d::direction) and friends.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("{first} and {second} directions are not perpendicular (dot product {dot})")]
    NotOrthonormal {
        first: &'static str,
        second: &'static str,
        dot: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Convenience type alias for results using [`GeoprimError`].
pub type Result<T> = std::result::Result<T, GeoprimError>;
