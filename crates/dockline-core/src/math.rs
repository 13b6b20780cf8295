/// Fast mathematical operations using SIMD-accelerated `glam` types.
///
/// This module re-exports all types and functions from the [`glam`] crate.
/// Pointer positions and drag offsets are [`Vec2`] values; the x component
/// carries the west-east axis and y the north-south axis, in layout units.
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

pub use fast::*;
