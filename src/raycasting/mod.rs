pub mod planar;

use crate::grid::{CellStore, GridIndexer};
use crate::spatial::math::vector::Vec3Ix;
use num_traits::One;
use std::iter::FusedIterator;
use std::ops::AddAssign;

/// Selects the axis with the largest delta, which is stepped once on every iteration
/// Ties are resolved in the order x, y, z: x wins over anything it equals, y wins over z.
/// * `dx`, `dy`, `dz` - absolute deltas on each axis
#[inline]
pub fn driving_axis(dx: i64, dy: i64, dz: i64) -> usize {
    if dy <= dx && dz <= dx {
        0
    } else if dx <= dy && dz <= dy {
        1
    } else {
        2
    }
}

/// Iterator over the cells between two grid positions, both ends included,
/// using integer only 3D Bresenham stepping.
/// The driving axis moves by exactly one cell per step, the other two axes
/// move by at most one cell per step, based on their error terms.
/// Reference: graphics gems article
#[derive(Debug, Clone)]
pub struct BresenhamLine3 {
    position: [i64; 3],
    step: [i64; 3],
    /// Twice the absolute delta on each axis
    twice_delta: [i64; 3],
    driving: usize,
    /// The two axes which are not driving, in ascending order
    secondary: [usize; 2],
    /// Error term for each secondary axis, scaled by 2
    decision: [i64; 2],
    end_on_driving: i64,
    finished: bool,
}

impl BresenhamLine3 {
    pub fn new(start: &Vec3Ix, end: &Vec3Ix) -> Self {
        let delta = *end - *start;
        let step = delta.signum().to_array();
        let abs_delta = delta.abs().to_array();
        let driving = driving_axis(abs_delta[0], abs_delta[1], abs_delta[2]);
        let secondary = match driving {
            0 => [1, 2],
            1 => [0, 2],
            _ => [0, 1],
        };
        let twice_delta = abs_delta.map(|d| 2 * d);
        Self {
            position: start.to_array(),
            step,
            twice_delta,
            driving,
            secondary,
            decision: secondary.map(|axis| twice_delta[axis] - abs_delta[driving]),
            end_on_driving: end.axis(driving),
            finished: false,
        }
    }

    /// The axis stepped once every iteration: 0 => x, 1 => y, 2 => z
    pub fn driving_axis(&self) -> usize {
        self.driving
    }
}

impl Iterator for BresenhamLine3 {
    type Item = Vec3Ix;

    #[inline]
    fn next(&mut self) -> Option<Vec3Ix> {
        if self.finished {
            return None;
        }
        let cell = Vec3Ix::from(self.position);
        let driving = self.driving;

        // Termination is decided on the driving axis only, so it is exact regardless of error terms
        if self.position[driving] == self.end_on_driving {
            self.finished = true;
            return Some(cell);
        }

        for (decision, &axis) in self.decision.iter_mut().zip(self.secondary.iter()) {
            if *decision >= 0 {
                *decision -= self.twice_delta[driving];
                self.position[axis] += self.step[axis];
            }
            *decision += self.twice_delta[axis];
        }
        self.position[driving] += self.step[driving];
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.finished {
            0
        } else {
            (self.end_on_driving - self.position[self.driving]).unsigned_abs() as usize + 1
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BresenhamLine3 {}
impl FusedIterator for BresenhamLine3 {}

/// Trace a straight line from `start` to `end`, both included.
/// At each cell `visit(x, y, z)` is called; returning false stops the traversal.
/// The number of visited cells is the largest per-axis distance plus one.
///
/// NOTE start and end are expected to be inside the grid; nothing is checked here
pub fn bresenham_trace<F>(start: &Vec3Ix, end: &Vec3Ix, mut visit: F)
where
    F: FnMut(i64, i64, i64) -> bool,
{
    for cell in BresenhamLine3::new(start, end) {
        if !visit(cell.x, cell.y, cell.z) {
            log::trace!("Trace {:?} -> {:?} stopped by visitor at {:?}", start, end, cell);
            break;
        }
    }
}

/// Increments the counter of every cell on the line from `start` to `end` by one.
/// The cells are mapped into `store` through `grid`; the whole line is always walked.
///
/// Both ends must be inside `grid`: out of range positions are not checked in release builds,
/// and the offsets they map to are up to the grid implementation.
pub fn bresenham_trace_count<G, S>(start: &Vec3Ix, end: &Vec3Ix, grid: &G, store: &mut S)
where
    G: GridIndexer + ?Sized,
    S: CellStore + ?Sized,
    S::Cell: AddAssign + One,
{
    debug_assert!(grid.is_inside_grid(start.x, start.y, start.z));
    debug_assert!(grid.is_inside_grid(end.x, end.y, end.z));
    for cell in BresenhamLine3::new(start, end) {
        *store.cell_mut(grid.grid_to_mem(cell.x, cell.y, cell.z)) += <S::Cell as One>::one();
    }
}
