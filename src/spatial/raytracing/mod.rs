use crate::spatial::{math::vector::V3c, Aabb};
use num_traits::Float;

mod tests;

/// A ray with its reciprocal direction and direction signs precomputed,
/// so it can be tested against any number of boxes without divisions
/// The interval `[tmin, tmax]` bounds the valid distances along the ray,
/// and it is tightened by every successful intersection test
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Ray3<T> {
    pub origin: V3c<T>,
    pub direction: V3c<T>,
    /// 1 / direction per component, may be infinite
    pub invdir: V3c<T>,
    /// 1 on an axis where the direction points towards negative, 0 otherwise
    pub sign: [usize; 3],
    pub tmin: T,
    pub tmax: T,
}

impl<T: Float> Ray3<T> {
    /// Ray valid from its origin to the largest representable distance
    pub fn new(origin: V3c<T>, direction: V3c<T>) -> Self {
        Self::with_range(origin, direction, T::zero(), T::max_value())
    }

    pub fn with_range(origin: V3c<T>, direction: V3c<T>, tmin: T, tmax: T) -> Self {
        let invdir = direction.recip();
        // Sign is taken from the reciprocal so -0.0 counts as negative
        let sign = [
            (invdir.x < T::zero()) as usize,
            (invdir.y < T::zero()) as usize,
            (invdir.z < T::zero()) as usize,
        ];
        Self {
            origin,
            direction,
            invdir,
            sign,
            tmin,
            tmax,
        }
    }

    /// Ray covering the segment between the given points:
    /// `point_at(0)` is `start` and `point_at(1)` is `end`
    pub fn from_segment(start: V3c<T>, end: V3c<T>) -> Self {
        Self::with_range(start, end - start, T::zero(), T::one())
    }

    pub fn point_at(&self, t: T) -> V3c<T> {
        self.origin + self.direction * t
    }
}

impl<T: Float> Aabb<T> {
    /// Slab test of the ray against the box
    /// Returns false if the ray misses the box inside its valid interval, leaving the ray untouched,
    /// otherwise the interval of the ray is narrowed to the overlap and true is returned.
    /// Reference: An Efficient and Robust Ray-Box Intersection Algorithm, Williams et al. 2004
    pub fn intersect_ray(&self, ray: &mut Ray3<T>) -> bool {
        // Axis parallel rays produce infinite values here, which lose every comparison
        // against finite bounds in the right direction. An origin exactly on a slab plane
        // gives 0 * inf = NaN instead; `max` and `min` skip it, so other axes still clip.
        let mut tmin = (self.bound(ray.sign[0]).x - ray.origin.x) * ray.invdir.x;
        let mut tmax = (self.bound(1 - ray.sign[0]).x - ray.origin.x) * ray.invdir.x;

        let tymin = (self.bound(ray.sign[1]).y - ray.origin.y) * ray.invdir.y;
        let tymax = (self.bound(1 - ray.sign[1]).y - ray.origin.y) * ray.invdir.y;

        if tmin > tymax || tymin > tmax {
            return false;
        }
        tmin = tmin.max(tymin);
        tmax = tmax.min(tymax);

        let tzmin = (self.bound(ray.sign[2]).z - ray.origin.z) * ray.invdir.z;
        let tzmax = (self.bound(1 - ray.sign[2]).z - ray.origin.z) * ray.invdir.z;

        if tmin > tzmax || tzmin > tmax {
            return false;
        }
        tmin = tmin.max(tzmin);
        tmax = tmax.min(tzmax);

        // Slabs overlap, but maybe outside of the interval the ray is valid in
        if tmin > ray.tmax || tmax < ray.tmin {
            return false;
        }

        ray.tmin = ray.tmin.max(tmin);
        ray.tmax = ray.tmax.min(tmax);
        true
    }

    /// Clips the segment between the given points to the box
    /// Returns the clipped endpoints, or None if the segment is entirely outside
    pub fn clip_segment(&self, start: V3c<T>, end: V3c<T>) -> Option<(V3c<T>, V3c<T>)> {
        let mut ray = Ray3::from_segment(start, end);
        if !self.intersect_ray(&mut ray) {
            return None;
        }
        Some((ray.point_at(ray.tmin), ray.point_at(ray.tmax)))
    }
}
