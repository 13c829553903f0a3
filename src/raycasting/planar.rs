use crate::spatial::math::vector::Vec2Ix;
use std::iter::FusedIterator;

/// Iterator over the cells between two positions of a 2D grid, both ends included
/// x is the driving axis unless the delta on y is strictly larger.
#[derive(Debug, Clone)]
pub struct BresenhamLine2 {
    position: [i64; 2],
    step: [i64; 2],
    twice_delta: [i64; 2],
    driving: usize,
    decision: i64,
    end_on_driving: i64,
    finished: bool,
}

impl BresenhamLine2 {
    pub fn new(start: &Vec2Ix, end: &Vec2Ix) -> Self {
        let delta = *end - *start;
        let abs_delta = delta.abs().to_array();
        let driving = if abs_delta[1] <= abs_delta[0] { 0 } else { 1 };
        let other = 1 - driving;
        Self {
            position: start.to_array(),
            step: delta.signum().to_array(),
            twice_delta: abs_delta.map(|d| 2 * d),
            driving,
            decision: 2 * abs_delta[other] - abs_delta[driving],
            end_on_driving: end.to_array()[driving],
            finished: false,
        }
    }

    pub fn driving_axis(&self) -> usize {
        self.driving
    }
}

impl Iterator for BresenhamLine2 {
    type Item = Vec2Ix;

    #[inline]
    fn next(&mut self) -> Option<Vec2Ix> {
        if self.finished {
            return None;
        }
        let cell = Vec2Ix::from(self.position);
        let driving = self.driving;
        let other = 1 - driving;
        if self.position[driving] == self.end_on_driving {
            self.finished = true;
            return Some(cell);
        }
        if self.decision >= 0 {
            self.decision -= self.twice_delta[driving];
            self.position[other] += self.step[other];
        }
        self.decision += self.twice_delta[other];
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

impl ExactSizeIterator for BresenhamLine2 {}
impl FusedIterator for BresenhamLine2 {}

/// Trace a straight line on a 2D grid from `start` to `end`, both included.
/// At each cell `visit(x, y, is_end)` is called; returning false stops the traversal.
///
/// `is_end` is always false, the last cell included. Visitors needing to know about
/// the last cell compare the coordinates they receive against `end`.
pub fn bresenham_trace_2d<F>(start: &Vec2Ix, end: &Vec2Ix, mut visit: F)
where
    F: FnMut(i64, i64, bool) -> bool,
{
    for cell in BresenhamLine2::new(start, end) {
        let end_cell = false;
        if !visit(cell.x, cell.y, end_cell) {
            log::trace!("Trace {:?} -> {:?} stopped by visitor at {:?}", start, end, cell);
            break;
        }
    }
}
