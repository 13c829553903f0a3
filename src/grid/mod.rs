pub mod dense;
pub mod sparse;

pub use crate::types::MemIx;
pub use dense::DenseArray3;
pub use sparse::SparseArray3;

use crate::spatial::math::{flat_projection, unflat_projection, vector::Vec3Ix};
use crate::types::VoxtraceError;

/// Maps grid positions to linear offsets inside a backing store
pub trait GridIndexer {
    /// Offset of the cell at the given position. The mapping must be injective over the
    /// positions for which `is_inside_grid` holds; other positions are the caller's responsibility.
    fn grid_to_mem(&self, x: i64, y: i64, z: i64) -> MemIx;

    /// True if the given position can be mapped by `grid_to_mem`
    fn is_inside_grid(&self, _x: i64, _y: i64, _z: i64) -> bool {
        true
    }
}

impl<F> GridIndexer for F
where
    F: Fn(i64, i64, i64) -> MemIx,
{
    fn grid_to_mem(&self, x: i64, y: i64, z: i64) -> MemIx {
        self(x, y, z)
    }
}

/// Storage of per-cell values addressed by linear offsets
pub trait CellStore {
    type Cell;

    /// Mutable access to the cell at the given offset
    fn cell_mut(&mut self, ix: MemIx) -> &mut Self::Cell;
}

impl<T> CellStore for [T] {
    type Cell = T;

    #[inline]
    fn cell_mut(&mut self, ix: MemIx) -> &mut T {
        &mut self[ix as usize]
    }
}

impl<T> CellStore for Vec<T> {
    type Cell = T;

    #[inline]
    fn cell_mut(&mut self, ix: MemIx) -> &mut T {
        &mut self[ix as usize]
    }
}

/// Number of cells in a grid of the given size
/// Fails if the size is not positive on every axis, or if the count overflows i64
pub(crate) fn cell_count(dimension: &Vec3Ix) -> Result<i64, VoxtraceError> {
    if dimension.x <= 0 || dimension.y <= 0 || dimension.z <= 0 {
        return Err(VoxtraceError::InvalidDimension(*dimension));
    }
    dimension
        .x
        .checked_mul(dimension.y)
        .and_then(|xy| xy.checked_mul(dimension.z))
        .ok_or(VoxtraceError::InvalidDimension(*dimension))
}

/// A bounded 3D grid of `dimension` cells starting at `min_index`,
/// mapped to memory in row-major order with z being the fastest changing axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct FixedGrid3 {
    min_index: Vec3Ix,
    dimension: Vec3Ix,
    strides: Vec3Ix,
}

impl FixedGrid3 {
    /// creates a grid with the given first cell and size, which must be positive on every axis
    pub fn new(min_index: Vec3Ix, dimension: Vec3Ix) -> Result<Self, VoxtraceError> {
        cell_count(&dimension)?;
        let grid = Self {
            min_index,
            dimension,
            strides: Vec3Ix::new(dimension.y * dimension.z, dimension.z, 1),
        };
        log::debug!(
            "Created grid of {:?} cells from {:?}, {} cells total",
            dimension,
            min_index,
            grid.num_cells()
        );
        Ok(grid)
    }

    /// creates a grid with the given size starting at the origin
    pub fn with_dimension(dimension: Vec3Ix) -> Result<Self, VoxtraceError> {
        Self::new(Vec3Ix::default(), dimension)
    }

    pub fn dimension(&self) -> Vec3Ix {
        self.dimension
    }

    pub fn strides(&self) -> Vec3Ix {
        self.strides
    }

    /// Fits into i64, the constructor checks it
    pub fn num_cells(&self) -> u64 {
        (self.dimension.x * self.dimension.y * self.dimension.z) as u64
    }

    /// Position of the first cell, inclusive
    pub fn first(&self) -> Vec3Ix {
        self.min_index
    }

    /// Position of the last cell, inclusive
    pub fn last(&self) -> Vec3Ix {
        self.min_index + self.dimension - Vec3Ix::unit(1)
    }

    /// Offset of the given position, or an error if it is outside of the grid
    pub fn try_grid_to_mem(&self, position: &Vec3Ix) -> Result<MemIx, VoxtraceError> {
        if !self.is_inside_grid(position.x, position.y, position.z) {
            return Err(VoxtraceError::InvalidPosition {
                x: position.x,
                y: position.y,
                z: position.z,
            });
        }
        Ok(self.grid_to_mem(position.x, position.y, position.z))
    }

    /// Position of the cell stored at the given offset
    pub fn mem_to_grid(&self, mem_ix: MemIx) -> Result<Vec3Ix, VoxtraceError> {
        if mem_ix >= self.num_cells() {
            return Err(VoxtraceError::InvalidOffset(mem_ix));
        }
        Ok(unflat_projection(mem_ix as i64, &self.strides) + self.min_index)
    }
}

impl GridIndexer for FixedGrid3 {
    #[inline]
    fn grid_to_mem(&self, x: i64, y: i64, z: i64) -> MemIx {
        debug_assert!(self.is_inside_grid(x, y, z));
        flat_projection(&(Vec3Ix::new(x, y, z) - self.min_index), &self.strides) as MemIx
    }

    #[inline]
    fn is_inside_grid(&self, x: i64, y: i64, z: i64) -> bool {
        let position = Vec3Ix::new(x, y, z);
        self.first().all_le(&position) && position.all_le(&self.last())
    }
}
