use crate::foundation::error::{IcopackError, IcopackResult};

pub use kurbo::{Affine, Rect, Vec2};

/// Output pixel dimensions of one rendered frame.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TargetSize {
    /// Width in pixels, must be non-zero.
    pub width: u32,
    /// Height in pixels, must be non-zero.
    pub height: u32,
}

impl TargetSize {
    /// Create a validated size with both sides `> 0`.
    pub fn new(width: u32, height: u32) -> IcopackResult<Self> {
        if width == 0 || height == 0 {
            return Err(IcopackError::config(format!(
                "target size must be non-zero, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Square size `side x side`. `side` must be non-zero.
    pub const fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// Number of pixels covered by this size.
    pub fn pixel_count(self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }
}

impl std::fmt::Display for TargetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Convert a `kurbo` affine into the `tiny_skia` transform `resvg` draws with.
pub(crate) fn to_skia_transform(affine: Affine) -> resvg::tiny_skia::Transform {
    let [a, b, c, d, e, f] = affine.as_coeffs();
    resvg::tiny_skia::Transform::from_row(
        a as f32, b as f32, c as f32, d as f32, e as f32, f as f32,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
