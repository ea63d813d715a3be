//! 3D Mathematics Kernel
//!
//! Vector, quaternion and 4x4 matrix types for real-time rendering, with
//! projection and view helpers for the usual graphics APIs.
//!
//! ## Core Types
//!
//! - [`Vector2`], [`Vector3`], [`Vector4`] - vectors padded to one 16-byte lane
//! - [`Quaternion`] - rotation quaternion stored as `[a, b, c, d]`
//! - [`Matrix4`] - column-major 4x4 matrix with transform and projection builders
//!
//! ## Interop Types
//!
//! - [`CompactVector2`], [`CompactVector3`], [`CompactVector4`] - packed forms
//! - [`RectF`], [`RectI32`] - axis-aligned rectangles
//!
//! ## Backends
//!
//! Arithmetic runs on the backend selected at build time (see [`backend`]).
//! With the default `simd` feature on x86_64 that is SSE, otherwise portable
//! scalar code. [`BACKEND`] names the one compiled in.

pub mod backend;
mod compact;
mod matrix4;
mod quaternion;
mod rect;
mod vector2;
mod vector3;
mod vector4;

pub use compact::{CompactVector2, CompactVector3, CompactVector4};
pub use matrix4::Matrix4;
pub use quaternion::Quaternion;
pub use rect::{RectF, RectI32};
pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;

/// Name of the compiled-in backend, `"sse"` or `"scalar"`
pub const BACKEND: &str = <backend::Active as backend::Backend>::NAME;
