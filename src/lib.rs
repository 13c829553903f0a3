pub mod grid;
pub mod raycasting;
pub mod spatial;
pub mod types;

pub use crate::grid::{CellStore, DenseArray3, FixedGrid3, GridIndexer, SparseArray3};
pub use crate::raycasting::{
    bresenham_trace, bresenham_trace_count, planar::bresenham_trace_2d, BresenhamLine3,
};
pub use crate::spatial::{
    math::vector::{V2c, V3c, Vec2Ix, Vec3Ix},
    raytracing::Ray3,
    Aabb,
};
pub use crate::types::{MemIx, VoxtraceError};
