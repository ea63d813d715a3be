//! 2D Vector type

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use bytemuck::Zeroable;
use serde::{Deserialize, Serialize};

use crate::backend::{Active, Backend, Lanes};
use crate::CompactVector2;

/// 2D vector padded to a 16-byte lane
///
/// Memory layout: `[x, y, 0.0, 0.0]`. Like [`crate::Vector3`] it is not `Pod`,
/// so the padding lanes stay zero.
#[repr(C, align(16))]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Serialize, Deserialize)]
#[serde(from = "CompactVector2", into = "CompactVector2")]
pub struct Vector2 {
    lanes: Lanes,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { lanes: [x, y, 0.0, 0.0] }
    }

    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    #[inline]
    fn from_lanes(l: Lanes) -> Self {
        Self::new(l[0], l[1])
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
    pub fn length_squared(&self) -> f32 {
        Active::dot2(self.lanes, self.lanes)
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Normalize in place, no-op at length zero
    ///
    /// Components beyond about `1.8e19` overflow the squared length and
    /// normalize to zero.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        if len != 0.0 {
            *self = Self::from_lanes(Active::scale(self.lanes, 1.0 / len));
        }
        self
    }

    #[inline]
    pub fn normalized(self) -> Self {
        let mut v = self;
        v.normalize();
        v
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        Active::dot2(self.lanes, other.lanes)
    }

    /// Raw view: `[x, y, 0.0, 0.0]`
    #[inline]
    pub fn as_array(&self) -> &[f32; 4] {
        &self.lanes
    }

    #[inline]
    pub fn as_ptr(&self) -> *const f32 {
        self.lanes.as_ptr()
    }

    #[inline]
    pub fn compact(self) -> CompactVector2 {
        CompactVector2 { x: self.x(), y: self.y() }
    }
}

impl fmt::Debug for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector2")
            .field("x", &self.x())
            .field("y", &self.y())
            .finish()
    }
}

impl From<CompactVector2> for Vector2 {
    #[inline]
    fn from(v: CompactVector2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for CompactVector2 {
    #[inline]
    fn from(v: Vector2) -> Self {
        v.compact()
    }
}

impl Index<usize> for Vector2 {
    type Output = f32;
    #[inline]
    fn index(&self, i: usize) -> &f32 {
        assert!(i < 2, "Vector2 index out of range: {}", i);
        &self.lanes[i]
    }
}

impl IndexMut<usize> for Vector2 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        assert!(i < 2, "Vector2 index out of range: {}", i);
        &mut self.lanes[i]
    }
}

impl Add for Vector2 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::from_lanes(Active::add(self.lanes, other.lanes))
    }
}

impl AddAssign for Vector2 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Vector2 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::from_lanes(Active::sub(self.lanes, other.lanes))
    }
}

impl SubAssign for Vector2 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::from_lanes(Active::scale(self.lanes, scalar))
    }
}

impl MulAssign<f32> for Vector2 {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        *self = *self * scalar;
    }
}

impl Neg for Vector2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_lanes(Active::neg(self.lanes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let v = Vector2::new(3.0, 4.0);
        assert_eq!(v.x(), 3.0);
        assert_eq!(v.y(), 4.0);
        assert_eq!(v.as_array(), &[3.0, 4.0, 0.0, 0.0]);
    }

    #[test]
    fn test_length_and_normalize() {
        let mut v = Vector2::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        v.normalize();
        assert!((v.x() - 0.6).abs() < 0.0001);
        assert!((v.y() - 0.8).abs() < 0.0001);

        let mut zero = Vector2::ZERO;
        zero.normalize();
        assert_eq!(zero, Vector2::ZERO);
    }

    #[test]
    fn test_dot() {
        assert_eq!(Vector2::new(1.0, 2.0).dot(Vector2::new(3.0, 4.0)), 11.0);
        assert_eq!(Vector2::X.dot(Vector2::Y), 0.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::splat(3.0);
        assert_eq!(a + b, Vector2::new(4.0, 5.0));
        assert_eq!(a - b, Vector2::new(-2.0, -1.0));
        assert_eq!(a * 3.0, Vector2::new(3.0, 6.0));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));

        let mut c = a;
        c += b;
        c *= 2.0;
        c -= Vector2::new(8.0, 8.0);
        assert_eq!(c, Vector2::new(0.0, 2.0));
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range() {
        let v = Vector2::new(1.0, 2.0);
        let _ = v[2];
    }

    #[test]
    fn test_padding_stays_zero() {
        let mut v = Vector2::new(1.0, 1.0) * f32::INFINITY;
        v[1] = 4.0;
        assert_eq!(v.as_array(), &[f32::INFINITY, 4.0, 0.0, 0.0]);
        assert_eq!(v, Vector2::new(f32::INFINITY, 4.0));
        let z: Vector2 = bytemuck::Zeroable::zeroed();
        assert_eq!(z, Vector2::ZERO);
    }

    #[test]
    fn test_compact_round_trip() {
        let v = Vector2::new(1.5, -2.5);
        assert_eq!(Vector2::from(CompactVector2::from(v)), v);
    }
}
