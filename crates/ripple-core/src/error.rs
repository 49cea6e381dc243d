use thiserror::Error;

/// Reasons a screen position cannot be mapped onto the surface plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("pointer ray is parallel to the surface plane")]
    ParallelRay,
    #[error("projected surface point is not finite")]
    NonFinite,
}
