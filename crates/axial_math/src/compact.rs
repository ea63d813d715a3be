//! Tightly packed vector forms
//!
//! The kernel vectors always occupy 16 bytes. These structs hold only the
//! logical components, for vertex buffers and other interop that expects
//! `float[2]` / `float[3]` / `float[4]`.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Packed 2D vector, 8 bytes
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct CompactVector2 {
    pub x: f32,
    pub y: f32,
}

/// Packed 3D vector, 12 bytes
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct CompactVector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Packed 4D vector, 16 bytes with 4-byte alignment
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct CompactVector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}
