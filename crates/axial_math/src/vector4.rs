//! 4D Vector type

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::backend::{Active, Backend, Lanes};
use crate::{CompactVector4, Vector3};

/// 4D vector with x, y, z, w components
///
/// Also the storage lane for [`crate::Quaternion`] and the columns of
/// [`crate::Matrix4`]. Memory layout: `[x, y, z, w]`, 16-byte aligned.
#[repr(C, align(16))]
#[derive(Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
#[serde(from = "CompactVector4", into = "CompactVector4")]
pub struct Vector4 {
    pub(crate) lanes: Lanes,
}

impl Vector4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Create a new Vector4
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { lanes: [x, y, z, w] }
    }

    /// Broadcast `v` to all four components
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    #[inline]
    pub(crate) const fn from_lanes(lanes: Lanes) -> Self {
        Self { lanes }
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

    #[inline]
    pub fn w(&self) -> f32 {
        self.lanes[3]
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        Active::dot4(self.lanes, other.lanes)
    }

    /// Length squared, all four components
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Normalize to unit length in place; a zero-length vector is unchanged
    ///
    /// Components beyond about `1.8e19` overflow the squared length and
    /// normalize to zero.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        if len != 0.0 {
            self.lanes = Active::scale(self.lanes, 1.0 / len);
        }
        self
    }

    /// Normalized copy
    #[inline]
    pub fn normalized(self) -> Self {
        let mut v = self;
        v.normalize();
        v
    }

    /// Drop the w component
    #[inline]
    pub fn xyz(self) -> Vector3 {
        Vector3::from_lanes(self.lanes)
    }

    /// Raw view: `[x, y, z, w]`
    #[inline]
    pub fn as_array(&self) -> &[f32; 4] {
        &self.lanes
    }

    #[inline]
    pub fn as_ptr(&self) -> *const f32 {
        self.lanes.as_ptr()
    }

    #[inline]
    pub fn compact(self) -> CompactVector4 {
        CompactVector4 { x: self.x(), y: self.y(), z: self.z(), w: self.w() }
    }
}

impl fmt::Debug for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector4")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("z", &self.z())
            .field("w", &self.w())
            .finish()
    }
}

impl From<CompactVector4> for Vector4 {
    #[inline]
    fn from(v: CompactVector4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Vector4> for CompactVector4 {
    #[inline]
    fn from(v: Vector4) -> Self {
        v.compact()
    }
}

impl Index<usize> for Vector4 {
    type Output = f32;
    #[inline]
    fn index(&self, i: usize) -> &f32 {
        assert!(i < 4, "Vector4 index out of range: {}", i);
        &self.lanes[i]
    }
}

impl IndexMut<usize> for Vector4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        assert!(i < 4, "Vector4 index out of range: {}", i);
        &mut self.lanes[i]
    }
}

// Operator overloads

impl Add for Vector4 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::from_lanes(Active::add(self.lanes, other.lanes))
    }
}

impl AddAssign for Vector4 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.lanes = Active::add(self.lanes, other.lanes);
    }
}

impl Sub for Vector4 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::from_lanes(Active::sub(self.lanes, other.lanes))
    }
}

impl SubAssign for Vector4 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.lanes = Active::sub(self.lanes, other.lanes);
    }
}

impl Mul<f32> for Vector4 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::from_lanes(Active::scale(self.lanes, scalar))
    }
}

impl MulAssign<f32> for Vector4 {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        self.lanes = Active::scale(self.lanes, scalar);
    }
}

impl Neg for Vector4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_lanes(Active::neg(self.lanes))
    }
}
