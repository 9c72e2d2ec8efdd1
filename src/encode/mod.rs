//! Frame compression and container packing.
//!
//! Frames are compressed one at a time by [`frame`]; [`container`] lays the compressed
//! frames out behind an ICO directory table.

/// ICO container encoding and directory parsing.
pub mod container;
/// Lossless PNG compression of single frames.
pub mod frame;
