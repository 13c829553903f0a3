use crate::grid::CellStore;
use crate::types::MemIx;
use std::collections::HashMap;
use std::hash::{BuildHasherDefault, Hasher};

/// Fibonacci hashing of memory offsets
/// Offsets are unique keys already, but the table takes its control tags from the
/// top bits of the hash, so the key is multiplied by an odd constant to spread it there.
/// The multiplication is a bijection on u64, distinct offsets never collide.
#[derive(Default, Clone, Copy, Debug)]
pub struct OffsetHasher(u64);

const FIBONACCI_MULTIPLIER: u64 = 0x9E37_79B9_7F4A_7C15;

impl Hasher for OffsetHasher {
    fn finish(&self) -> u64 {
        self.0.wrapping_mul(FIBONACCI_MULTIPLIER)
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.0 = self.0.rotate_left(8) ^ *byte as u64;
        }
    }

    fn write_u64(&mut self, key: u64) {
        self.0 = key;
    }
}

type CellMap<T> = HashMap<MemIx, T, BuildHasherDefault<OffsetHasher>>;

/// Storage holding values only for the cells which were touched
/// Reading a missing cell mutably inserts the default value for it
#[derive(Debug, Clone, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct SparseArray3<T> {
    cells: CellMap<T>,
}

impl<T> SparseArray3<T> {
    pub fn new() -> Self {
        Self {
            cells: CellMap::default(),
        }
    }

    pub fn with_capacity(expected_size: usize) -> Self {
        Self {
            cells: CellMap::with_capacity_and_hasher(expected_size, Default::default()),
        }
    }

    /// Makes room for at least the given number of additional cells
    pub fn reserve(&mut self, additional: usize) {
        self.cells.reserve(additional);
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Removes every cell, keeping the allocated memory for reuse
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn get(&self, ix: MemIx) -> Option<&T> {
        self.cells.get(&ix)
    }

    pub fn remove(&mut self, ix: MemIx) -> Option<T> {
        self.cells.remove(&ix)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MemIx, &T)> {
        self.cells.iter().map(|(ix, cell)| (*ix, cell))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (MemIx, &mut T)> {
        self.cells.iter_mut().map(|(ix, cell)| (*ix, cell))
    }
}

impl<T: Default> CellStore for SparseArray3<T> {
    type Cell = T;

    #[inline]
    fn cell_mut(&mut self, ix: MemIx) -> &mut T {
        self.cells.entry(ix).or_default()
    }
}
