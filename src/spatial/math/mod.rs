pub mod vector;

use crate::spatial::math::vector::Vec3Ix;

/// Maps 3 dimensional index space to 1 dimension
/// The coordinates are expected to be relative to the first cell of the mapped region,
/// with each component inside `0..dimension` on its axis
/// * `offset` - position relative to the first cell
/// * `strides` - number of cells skipped by one step on each axis
#[inline]
pub(crate) fn flat_projection(offset: &Vec3Ix, strides: &Vec3Ix) -> i64 {
    offset.x * strides.x + offset.y * strides.y + offset.z * strides.z
}

/// Inverse of [`flat_projection`] for row-major strides where `strides.z == 1`
pub(crate) fn unflat_projection(flat: i64, strides: &Vec3Ix) -> Vec3Ix {
    debug_assert_eq!(strides.z, 1);
    let x = flat / strides.x;
    let rem = flat % strides.x;
    Vec3Ix::new(x, rem / strides.y, rem % strides.y)
}
