use crate::spatial::math::vector::Vec3Ix;

/// Linear offset of a cell inside a backing store
pub type MemIx = u64;

/// error types during creation of the grid, the stores or the bounding boxes
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VoxtraceError {
    #[error("grid dimension must be positive on every axis with a cell count fitting i64, got {0:?}")]
    InvalidDimension(Vec3Ix),
    #[error("bounding box minimum exceeds its maximum on axis {axis}")]
    InvalidBounds { axis: usize },
    #[error("position ({x}, {y}, {z}) is outside of the grid")]
    InvalidPosition { x: i64, y: i64, z: i64 },
    #[error("memory offset {0} is outside of the grid")]
    InvalidOffset(MemIx),
}
