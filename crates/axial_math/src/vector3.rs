//! 3D Vector type

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use bytemuck::Zeroable;
use serde::{Deserialize, Serialize};

use crate::backend::{Active, Backend, Lanes};
use crate::CompactVector3;

/// 3D vector padded to a 16-byte lane
///
/// Memory layout: `[x, y, z, 0.0]`. The fourth lane is held at zero and never
/// takes part in a dot product, cross product or normalization. Not `Pod`: a
/// byte cast could write the padding lane. Use [`CompactVector3`] for buffers.
#[repr(C, align(16))]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Serialize, Deserialize)]
#[serde(from = "CompactVector3", into = "CompactVector3")]
pub struct Vector3 {
    pub(crate) lanes: Lanes,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Create a new Vector3
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { lanes: [x, y, z, 0.0] }
    }

    /// Broadcast `v` to every component
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Re-zero the padding lane after a 4-wide backend operation
    #[inline]
    pub(crate) fn from_lanes(l: Lanes) -> Self {
        Self::new(l[0], l[1], l[2])
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.lanes[0]
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.lanes[1]
    }

    #[inline]
    pub fn z(&self) -> f32 {
        self.lanes[2]
    }

    /// Squared L2 norm over x, y, z
    #[inline]
    pub fn length_squared(&self) -> f32 {
        Active::dot3(self.lanes, self.lanes)
    }

    /// L2 norm
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Normalize in place. A vector of length exactly zero is left unchanged.
    ///
    /// The squared length is not rescaled: components beyond about `1.8e19`
    /// overflow it to infinity and the result collapses to zero.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        if len != 0.0 {
            *self = Self::from_lanes(Active::scale(self.lanes, 1.0 / len));
        }
        self
    }

    /// Normalized copy; see [`Vector3::normalize`]
    #[inline]
    pub fn normalized(self) -> Self {
        let mut v = self;
        v.normalize();
        v
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        Active::dot3(self.lanes, other.lanes)
    }

    /// Right-handed cross product
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::from_lanes(Active::cross(self.lanes, other.lanes))
    }

    /// Raw view: `[x, y, z, 0.0]`
    #[inline]
    pub fn as_array(&self) -> &[f32; 4] {
        &self.lanes
    }

    /// Pointer to `x`; `y` and `z` follow contiguously
    #[inline]
    pub fn as_ptr(&self) -> *const f32 {
        self.lanes.as_ptr()
    }

    /// Packed copy without the padding lane
    #[inline]
    pub fn compact(self) -> CompactVector3 {
        CompactVector3 { x: self.x(), y: self.y(), z: self.z() }
    }
}

impl fmt::Debug for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector3")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("z", &self.z())
            .finish()
    }
}

impl From<CompactVector3> for Vector3 {
    #[inline]
    fn from(v: CompactVector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for CompactVector3 {
    #[inline]
    fn from(v: Vector3) -> Self {
        v.compact()
    }
}

impl Index<usize> for Vector3 {
    type Output = f32;
    #[inline]
    fn index(&self, i: usize) -> &f32 {
        assert!(i < 3, "Vector3 index out of range: {}", i);
        &self.lanes[i]
    }
}

impl IndexMut<usize> for Vector3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        assert!(i < 3, "Vector3 index out of range: {}", i);
        &mut self.lanes[i]
    }
}

// Operator overloads

impl Add for Vector3 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::from_lanes(Active::add(self.lanes, other.lanes))
    }
}

impl AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Vector3 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::from_lanes(Active::sub(self.lanes, other.lanes))
    }
}

impl SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::from_lanes(Active::scale(self.lanes, scalar))
    }
}

impl MulAssign<f32> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        *self = *self * scalar;
    }
}

impl Neg for Vector3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_lanes(Active::neg(self.lanes))
    }
}
