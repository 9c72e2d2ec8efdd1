use crate::foundation::core::{Affine, Rect, TargetSize, Vec2};

/// Natural size used when a picture's bounds have no positive area.
pub const FALLBACK_NATURAL_SIZE: TargetSize = TargetSize::square(256);

/// Where picture content lands inside a target canvas.
///
/// Content is scaled uniformly to fit, then centered, so opposing margins are equal and
/// nothing spills past the canvas edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Bounds that were fitted, after the degenerate-box substitution.
    pub bounds: Rect,
    /// Uniform scale applied on both axes.
    pub scale: f64,
    /// Width of the content after scaling, in pixels.
    pub scaled_width: f64,
    /// Height of the content after scaling, in pixels.
    pub scaled_height: f64,
    /// Left margin in pixels.
    pub offset_x: f64,
    /// Top margin in pixels.
    pub offset_y: f64,
}

impl Placement {
    /// Fit `bounds` into `target`.
    ///
    /// Bounds with a non-positive or non-finite side are replaced by the unit box at the
    /// origin, which keeps the division well-defined.
    pub fn fit(bounds: Rect, target: TargetSize) -> Self {
        let bounds = if has_positive_area(bounds) {
            bounds
        } else {
            Rect::new(0.0, 0.0, 1.0, 1.0)
        };

        let tw = f64::from(target.width);
        let th = f64::from(target.height);
        let scale = (tw / bounds.width()).min(th / bounds.height());
        let scaled_width = bounds.width() * scale;
        let scaled_height = bounds.height() * scale;

        Self {
            bounds,
            scale,
            scaled_width,
            scaled_height,
            offset_x: (tw - scaled_width) / 2.0,
            offset_y: (th - scaled_height) / 2.0,
        }
    }

    /// Picture-to-canvas transform: move the bounds to the origin, scale, then center.
    pub fn transform(&self) -> Affine {
        Affine::translate(Vec2::new(self.offset_x, self.offset_y))
            * Affine::scale(self.scale)
            * Affine::translate(Vec2::new(-self.bounds.x0, -self.bounds.y0))
    }
}

/// Pixel size a picture renders at when no explicit target is requested.
///
/// Each side is `ceil` of the bounds, at least 1. Bounds with a non-positive side fall back
/// to [`FALLBACK_NATURAL_SIZE`].
pub fn natural_size(bounds: Rect) -> TargetSize {
    if !has_positive_area(bounds) {
        return FALLBACK_NATURAL_SIZE;
    }

    fn to_px(v: f64) -> u32 {
        // `as` saturates; oversized results are rejected by the rasterizer.
        (v.ceil() as u32).max(1)
    }

    TargetSize {
        width: to_px(bounds.width()),
        height: to_px(bounds.height()),
    }
}

fn has_positive_area(bounds: Rect) -> bool {
    let (w, h) = (bounds.width(), bounds.height());
    w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0
}

#[cfg(test)]
#[path = "../../tests/unit/raster/placement.rs"]
mod tests;
