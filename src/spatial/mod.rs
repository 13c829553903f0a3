pub mod math;
pub mod raytracing;

use crate::spatial::math::vector::V3c;
use crate::types::VoxtraceError;
use num_traits::Float;

/// Axis aligned bounding box in continuous coordinates
/// Expected to hold `min <= max` on every axis
#[derive(Default, Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Aabb<T> {
    pub min: V3c<T>,
    pub max: V3c<T>,
}

impl<T: Float> Aabb<T> {
    /// Creates a box from its two corners. The ordering of the corners is only checked in debug builds
    pub fn new(min: V3c<T>, max: V3c<T>) -> Self {
        debug_assert!(min.all_le(&max), "Aabb corners are out of order");
        Self { min, max }
    }

    /// Creates a box from its two corners, rejecting corners which are out of order
    pub fn try_new(min: V3c<T>, max: V3c<T>) -> Result<Self, VoxtraceError> {
        for axis in 0..3 {
            // NaN bounds are rejected as well
            if !(min.axis(axis) <= max.axis(axis)) {
                return Err(VoxtraceError::InvalidBounds { axis });
            }
        }
        Ok(Self { min, max })
    }

    /// Provides the selected corner: 0 => min, 1 => max
    #[inline]
    pub fn bound(&self, corner: usize) -> &V3c<T> {
        debug_assert!(corner < 2);
        if 0 == corner {
            &self.min
        } else {
            &self.max
        }
    }

    pub fn center(&self) -> V3c<T> {
        (self.min + self.max) / (T::one() + T::one())
    }

    /// Size of the box on each axis
    pub fn extent(&self) -> V3c<T> {
        self.max - self.min
    }

    /// True if the given point is inside the box, edges included
    pub fn contains_point(&self, point: &V3c<T>) -> bool {
        self.min.all_le(point) && point.all_le(&self.max)
    }
}
