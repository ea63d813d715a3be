//! Quaternion for 3D rotations
//!
//! A quaternion `a + bi + cj + dk` is stored in one [`Vector4`] lane as
//! `[a, b, c, d]`: the real part first, then the imaginary part.
//!
//! Rotation constructors ([`Quaternion::rotate_axis`],
//! [`Quaternion::euler_angle`]) produce unit quaternions. The raw constructor
//! [`Quaternion::new`] does not normalize; callers that build quaternions by
//! hand must normalize before handing them to [`crate::Matrix4::rotate_transform`].

use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::backend::{Active, Backend};
use crate::{Vector3, Vector4};

/// Quaternion stored as `[a, b, c, d]`
#[repr(C, align(16))]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
#[serde(from = "QuaternionParts", into = "QuaternionParts")]
pub struct Quaternion {
    v: Vector4,
}

/// Serialized form, `{ a, b, c, d }`
#[derive(Clone, Copy, Serialize, Deserialize)]
struct QuaternionParts {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
}

impl From<QuaternionParts> for Quaternion {
    fn from(p: QuaternionParts) -> Self {
        Self::new(p.a, p.b, p.c, p.d)
    }
}

impl From<Quaternion> for QuaternionParts {
    fn from(q: Quaternion) -> Self {
        Self { a: q.a(), b: q.b(), c: q.c(), d: q.d() }
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Raw quaternion `a + bi + cj + dk`, not normalized
    #[inline]
    pub const fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self { v: Vector4::new(a, b, c, d) }
    }

    /// Pure imaginary quaternion `0 + xi + yj + zk`
    #[inline]
    pub fn from_imaginary(imag: Vector3) -> Self {
        Self::new(0.0, imag.x(), imag.y(), imag.z())
    }

    /// Rotation by `angle` radians about `axis`
    ///
    /// The axis is normalized internally; a zero axis yields `[cos(θ/2), 0, 0, 0]`.
    pub fn rotate_axis(angle: f32, axis: Vector3) -> Self {
        let mut q = Self::IDENTITY;
        q.set_by_rotate_axis(angle, axis);
        q
    }

    /// Overwrite with a rotation by `angle` radians about `axis`
    pub fn set_by_rotate_axis(&mut self, angle: f32, axis: Vector3) -> &mut Self {
        let axis = axis.normalized();
        let half = angle * 0.5;
        let (si, co) = (half.sin(), half.cos());

        *self = Self::new(co, si * axis.x(), si * axis.y(), si * axis.z());
        self
    }

    /// Rotation from Euler angles in radians
    ///
    /// `pitch` turns about X, `yaw` about Y, `roll` about Z. The rotations are
    /// applied roll first, then pitch, then yaw (Z, X, Y).
    pub fn euler_angle(pitch: f32, yaw: f32, roll: f32) -> Self {
        let mut q = Self::IDENTITY;
        q.set_by_euler_angle(pitch, yaw, roll);
        q
    }

    /// Overwrite with a rotation from Euler angles; see [`Quaternion::euler_angle`]
    pub fn set_by_euler_angle(&mut self, pitch: f32, yaw: f32, roll: f32) -> &mut Self {
        let (sx, cx) = (0.5 * pitch).sin_cos();
        let (sy, cy) = (0.5 * yaw).sin_cos();
        let (sz, cz) = (0.5 * roll).sin_cos();

        *self = Self::new(
            cx * cy * cz + sx * sy * sz,
            sx * cy * cz + cx * sy * sz,
            cx * sy * cz - sx * cy * sz,
            cx * cy * sz - sx * sy * cz,
        );
        self
    }

    /// Real part
    #[inline]
    pub fn a(&self) -> f32 {
        self.v.x()
    }

    /// Coefficient of `i`
    #[inline]
    pub fn b(&self) -> f32 {
        self.v.y()
    }

    /// Coefficient of `j`
    #[inline]
    pub fn c(&self) -> f32 {
        self.v.z()
    }

    /// Coefficient of `k`
    #[inline]
    pub fn d(&self) -> f32 {
        self.v.w()
    }

    /// Imaginary part `(b, c, d)`
    #[inline]
    pub fn imaginary(&self) -> Vector3 {
        Vector3::new(self.b(), self.c(), self.d())
    }

    /// The underlying `[a, b, c, d]` lane
    #[inline]
    pub fn as_vector4(&self) -> Vector4 {
        self.v
    }

    /// Raw view: `[a, b, c, d]`
    #[inline]
    pub fn as_array(&self) -> &[f32; 4] {
        self.v.as_array()
    }

    /// Squared norm `a² + b² + c² + d²`
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.v.length_squared()
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.v.length()
    }

    /// Scale to unit norm; a zero quaternion is left unchanged
    ///
    /// Like [`Vector4::normalize`], components past about `1.8e19` overflow
    /// the squared norm and collapse to zero.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        self.v.normalize();
        self
    }

    #[inline]
    pub fn normalized(self) -> Self {
        Self { v: self.v.normalized() }
    }

    /// Negate the imaginary part in place
    #[inline]
    pub fn conjugate(&mut self) -> &mut Self {
        *self = self.conjugated();
        self
    }

    /// Conjugate `a − bi − cj − dk`
    #[inline]
    pub fn conjugated(self) -> Self {
        Self::new(self.a(), -self.b(), -self.c(), -self.d())
    }

    /// Invert in place: `q⁻¹ = q* / ‖q‖²`
    ///
    /// A zero quaternion produces Inf/NaN components.
    #[inline]
    pub fn inverse(&mut self) -> &mut Self {
        *self = self.inverted();
        self
    }

    /// Inverse `q* / ‖q‖²`; see [`Quaternion::inverse`]
    #[inline]
    pub fn inverted(self) -> Self {
        let len_sq = self.length_squared();
        self.conjugated() * (1.0 / len_sq)
    }
}

impl From<Vector3> for Quaternion {
    #[inline]
    fn from(imag: Vector3) -> Self {
        Self::from_imaginary(imag)
    }
}

impl Index<usize> for Quaternion {
    type Output = f32;
    #[inline]
    fn index(&self, i: usize) -> &f32 {
        assert!(i < 4, "Quaternion index out of range: {}", i);
        &self.v[i]
    }
}

impl IndexMut<usize> for Quaternion {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        assert!(i < 4, "Quaternion index out of range: {}", i);
        &mut self.v[i]
    }
}

impl Add for Quaternion {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self { v: self.v + other.v }
    }
}

impl AddAssign for Quaternion {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.v += other.v;
    }
}

impl Sub for Quaternion {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self { v: self.v - other.v }
    }
}

impl SubAssign for Quaternion {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.v -= other.v;
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self { v: self.v * scalar }
    }
}

impl MulAssign<f32> for Quaternion {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        self.v *= scalar;
    }
}

/// Grassmann product `self · other`, not commutative
impl Mul for Quaternion {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        Self { v: Vector4::from_lanes(Active::quat_mul(self.v.lanes, other.v.lanes)) }
    }
}

/// `self = self · other`
impl MulAssign for Quaternion {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}
