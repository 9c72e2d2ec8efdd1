//! Rasterization of [`VectorPicture`](crate::VectorPicture)s.
//!
//! [`placement`] holds the pure scale/centering math, [`rasterizer`] draws one size, and
//! [`multi`] drives the rasterizer over an ordered size list.

/// Premultiplied RGBA8 pixel buffers.
pub mod image;
/// Multi-size rendering with all-or-nothing failure semantics.
pub mod multi;
/// Uniform scale and centering of picture bounds into a target size.
pub mod placement;
/// Single-size rasterization.
pub mod rasterizer;
