//! Lane backends
//!
//! Every kernel type stores its data as one or more 16-byte lanes of four
//! `f32`. The arithmetic on those lanes goes through a [`Backend`]:
//!
//! - [`Scalar`] - portable per-component arithmetic
//! - [`Sse`] - SSE registers (x86_64 only)
//!
//! [`Active`] is the backend the kernel types use. It is fixed at build time by
//! the `simd` cargo feature and the target architecture; there is no runtime
//! dispatch. Both backends evaluate every sum in the same association order,
//! so they return identical results for identical inputs.

mod scalar;
#[cfg(target_arch = "x86_64")]
mod sse;

pub use scalar::Scalar;
#[cfg(target_arch = "x86_64")]
pub use sse::Sse;

/// Four `f32` lanes
pub type Lanes = [f32; 4];

/// Four lanes per column, column-major
pub type MatLanes = [Lanes; 4];

/// Backend used by the kernel types
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub type Active = Sse;

/// Backend used by the kernel types
#[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
pub type Active = Scalar;

/// Primitive 4-lane operations
pub trait Backend {
    /// Human-readable backend name
    const NAME: &'static str;

    /// Lane-wise `a + b`
    fn add(a: Lanes, b: Lanes) -> Lanes;

    /// Lane-wise `a - b`
    fn sub(a: Lanes, b: Lanes) -> Lanes;

    /// Lane-wise negation (sign flip, `-0.0` for `0.0`)
    fn neg(a: Lanes) -> Lanes;

    /// Multiply every lane by `s`
    fn scale(a: Lanes, s: f32) -> Lanes;

    /// Inner product of lanes 0..2
    fn dot2(a: Lanes, b: Lanes) -> f32;

    /// Inner product of lanes 0..3
    fn dot3(a: Lanes, b: Lanes) -> f32;

    /// Inner product of all four lanes
    fn dot4(a: Lanes, b: Lanes) -> f32;

    /// Right-handed cross product of lanes 0..3, lane 3 of the result is zero
    /// when lane 3 of both inputs is zero
    fn cross(a: Lanes, b: Lanes) -> Lanes;

    /// Matrix product `a · b` of two column-major matrices
    fn mat_mul(a: &MatLanes, b: &MatLanes) -> MatLanes;

    /// Matrix-vector product `m · v`
    fn mat_vec(m: &MatLanes, v: Lanes) -> Lanes;

    /// Transpose
    fn transpose(m: &MatLanes) -> MatLanes;

    /// Grassmann product of two quaternions stored as `[a, b, c, d]`
    ///
    /// `[a1, v1] · [a2, v2] = [a1·a2 − v1·v2, a1·v2 + a2·v1 + v1 × v2]`
    fn quat_mul(p: Lanes, q: Lanes) -> Lanes {
        let v1 = [p[1], p[2], p[3], 0.0];
        let v2 = [q[1], q[2], q[3], 0.0];

        let real = p[0] * q[0] - Self::dot3(v1, v2);
        let imag = Self::add(
            Self::add(Self::scale(v1, q[0]), Self::scale(v2, p[0])),
            Self::cross(v1, v2),
        );

        [real, imag[0], imag[1], imag[2]]
    }
}
