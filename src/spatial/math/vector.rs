use num_traits::{Float, Signed, Zero};
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

#[derive(Default, Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
#[repr(C)]
pub struct V3c<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

#[derive(Default, Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
#[repr(C)]
pub struct V2c<T> {
    pub x: T,
    pub y: T,
}

/// Index of a cell inside a 3 dimensional voxel grid
pub type Vec3Ix = V3c<i64>;

/// Index of a cell inside a 2 dimensional grid
pub type Vec2Ix = V2c<i64>;

impl<T: Copy> V3c<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn unit(scale: T) -> Self {
        Self {
            x: scale,
            y: scale,
            z: scale,
        }
    }

    /// Component on the given axis: 0 => x, 1 => y, anything else => z
    #[inline]
    pub fn axis(&self, axis: usize) -> T {
        match axis {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }
}

impl<T: Copy> V2c<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn unit(scale: T) -> Self {
        Self { x: scale, y: scale }
    }

    pub fn to_array(self) -> [T; 2] {
        [self.x, self.y]
    }
}

impl<T> V3c<T>
where
    T: Signed + Copy,
{
    pub fn abs(&self) -> Self {
        V3c::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Per component sign: -1, 0 or 1
    pub fn signum(&self) -> Self {
        V3c::new(self.x.signum(), self.y.signum(), self.z.signum())
    }
}

impl<T> V2c<T>
where
    T: Signed + Copy,
{
    pub fn abs(&self) -> Self {
        V2c::new(self.x.abs(), self.y.abs())
    }

    pub fn signum(&self) -> Self {
        V2c::new(self.x.signum(), self.y.signum())
    }
}

impl<T: Float> V3c<T> {
    /// Component-wise reciprocal; zero components become +/- infinity
    pub fn recip(&self) -> V3c<T> {
        V3c::new(self.x.recip(), self.y.recip(), self.z.recip())
    }
}

impl V3c<i64> {
    /// Largest absolute per-axis difference to the other index
    pub fn chebyshev_distance(&self, other: &V3c<i64>) -> i64 {
        let d = (*other - *self).abs();
        d.x.max(d.y).max(d.z)
    }
}

impl V2c<i64> {
    pub fn chebyshev_distance(&self, other: &V2c<i64>) -> i64 {
        let d = (*other - *self).abs();
        d.x.max(d.y)
    }
}

impl<T: Copy + PartialOrd> V3c<T> {
    /// True if every component is less than or equal to the matching one in `other`
    pub fn all_le(&self, other: &V3c<T>) -> bool {
        self.x <= other.x && self.y <= other.y && self.z <= other.z
    }
}

impl<T> SubAssign for V3c<T>
where
    T: Copy + Sub<Output = T>,
{
    fn sub_assign(&mut self, other: V3c<T>) {
        *self = *self - other;
    }
}

impl<T> AddAssign for V3c<T>
where
    T: Copy + Add<Output = T>,
{
    fn add_assign(&mut self, other: V3c<T>) {
        *self = *self + other;
    }
}

impl<T: Add<Output = T>> Add for V3c<T> {
    type Output = V3c<T>;

    fn add(self, other: V3c<T>) -> V3c<T> {
        V3c {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl<T: Add<Output = T>> Add for V2c<T> {
    type Output = V2c<T>;

    fn add(self, other: V2c<T>) -> V2c<T> {
        V2c {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T> Sub for V3c<T>
where
    T: Copy + Sub<Output = T>,
{
    type Output = V3c<T>;

    fn sub(self, other: V3c<T>) -> V3c<T> {
        V3c {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl<T> Sub for V2c<T>
where
    T: Copy + Sub<Output = T>,
{
    type Output = V2c<T>;

    fn sub(self, other: V2c<T>) -> V2c<T> {
        V2c {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T: Mul<Output = T> + Copy> Mul<T> for V3c<T> {
    type Output = V3c<T>;

    fn mul(self, scalar: T) -> V3c<T> {
        V3c {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl<T: Div<Output = T> + Copy> Div<T> for V3c<T> {
    type Output = V3c<T>;

    fn div(self, scalar: T) -> V3c<T> {
        V3c {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

impl<T: Zero + Copy> From<V2c<T>> for V3c<T> {
    fn from(vec: V2c<T>) -> V3c<T> {
        V3c::new(vec.x, vec.y, T::zero())
    }
}

impl<T: Copy> From<[T; 3]> for V3c<T> {
    fn from(vec: [T; 3]) -> V3c<T> {
        V3c::new(vec[0], vec[1], vec[2])
    }
}

impl<T: Copy> From<[T; 2]> for V2c<T> {
    fn from(vec: [T; 2]) -> V2c<T> {
        V2c::new(vec[0], vec[1])
    }
}
