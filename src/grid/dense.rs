use crate::grid::{cell_count, CellStore, FixedGrid3, GridIndexer};
use crate::spatial::math::vector::Vec3Ix;
use crate::types::{MemIx, VoxtraceError};
use std::ops::{Index, IndexMut};

/// Contiguous storage holding one value for every cell of a grid
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct DenseArray3<T> {
    dimension: Vec3Ix,
    data: Vec<T>,
}

impl<T: Default + Clone> DenseArray3<T> {
    /// creates an array of default values with the given size, which must be positive on every axis
    pub fn new(dimension: Vec3Ix) -> Result<Self, VoxtraceError> {
        let len = usize::try_from(cell_count(&dimension)?)
            .map_err(|_| VoxtraceError::InvalidDimension(dimension))?;
        log::debug!("Allocating dense array of {:?} cells", dimension);
        Ok(Self {
            dimension,
            data: vec![T::default(); len],
        })
    }

    /// creates an array covering every cell of the given grid
    pub fn for_grid(grid: &FixedGrid3) -> Self {
        let dimension = grid.dimension();
        log::debug!("Allocating dense array of {:?} cells", dimension);
        Self {
            dimension,
            data: vec![T::default(); grid.num_cells() as usize],
        }
    }

    /// Sets every cell to the given value
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

impl<T> DenseArray3<T> {
    pub fn dimension(&self) -> Vec3Ix {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, ix: MemIx) -> Option<&T> {
        self.data.get(ix as usize)
    }

    /// Value of the cell at the given grid position, mapped through `grid`
    pub fn at<G: GridIndexer + ?Sized>(&self, grid: &G, position: &Vec3Ix) -> Option<&T> {
        if !grid.is_inside_grid(position.x, position.y, position.z) {
            return None;
        }
        self.get(grid.grid_to_mem(position.x, position.y, position.z))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> Index<MemIx> for DenseArray3<T> {
    type Output = T;

    fn index(&self, ix: MemIx) -> &T {
        &self.data[ix as usize]
    }
}

impl<T> IndexMut<MemIx> for DenseArray3<T> {
    fn index_mut(&mut self, ix: MemIx) -> &mut T {
        &mut self.data[ix as usize]
    }
}

impl<T> CellStore for DenseArray3<T> {
    type Cell = T;

    #[inline]
    fn cell_mut(&mut self, ix: MemIx) -> &mut T {
        &mut self.data[ix as usize]
    }
}
