//! Axis-aligned rectangles
//!
//! No ordering between the bounds is enforced: flipped or degenerate
//! rectangles are valid values, which is how a projection with an inverted
//! Y axis is described.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Float rectangle
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct RectF {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl RectF {
    #[inline]
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }
}

/// Integer rectangle, e.g. a viewport in pixels
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct RectI32 {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl RectI32 {
    #[inline]
    pub const fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self { left, right, top, bottom }
    }
}

/// Per-field cast; values beyond 2^24 lose precision
impl From<RectI32> for RectF {
    #[inline]
    fn from(rc: RectI32) -> Self {
        Self::new(rc.left as f32, rc.right as f32, rc.top as f32, rc.bottom as f32)
    }
}
