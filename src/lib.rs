//! Axial - 3D math kernel with a projection demo
//!
//! The kernel lives in [`axial_math`] and is re-exported here as [`math`].
//! [`config`] loads the demo settings and [`scene`] builds the matrices the
//! demo binary prints.

pub mod config;
pub mod scene;

pub use axial_math as math;
