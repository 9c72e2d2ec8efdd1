use crate::foundation::core::TargetSize;
use crate::foundation::error::{IcopackError, IcopackResult};
use crate::picture::VectorPicture;
use crate::raster::image::RasterImage;
use crate::raster::placement::{Placement, natural_size};

/// Largest canvas side the rasterizer will allocate.
pub const MAX_DIMENSION: u32 = 16_384;

/// Render `picture` into a transparent canvas of exactly `target` pixels.
///
/// Content is scaled uniformly and centered (see [`Placement`]). Fails with
/// [`IcopackError::Render`] when the canvas cannot be allocated, the fit is not finite, or
/// the picture itself fails to draw.
pub fn rasterize(picture: &dyn VectorPicture, target: TargetSize) -> IcopackResult<RasterImage> {
    if target.width == 0 || target.height == 0 {
        return Err(IcopackError::render(format!(
            "target size {target} has a zero side"
        )));
    }
    // Avoid pathological allocations.
    if target.width > MAX_DIMENSION || target.height > MAX_DIMENSION {
        return Err(IcopackError::render(format!(
            "target size {target} too large (max {MAX_DIMENSION}x{MAX_DIMENSION})"
        )));
    }

    let placement = Placement::fit(picture.bounding_box(), target);
    if !placement.scale.is_finite() || placement.scale <= 0.0 {
        return Err(IcopackError::render(format!(
            "cannot fit picture into {target}: scale {}",
            placement.scale
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(target.width, target.height)
        .ok_or_else(|| IcopackError::render(format!("failed to allocate {target} canvas")))?;
    picture
        .render(&mut pixmap.as_mut(), placement.transform())
        .map_err(|e| match e {
            IcopackError::Render(msg) => IcopackError::render(format!("{target}: {msg}")),
            other => other,
        })?;

    tracing::trace!(%target, scale = placement.scale, "rasterized");
    RasterImage::from_premul_rgba8(target.width, target.height, pixmap.take())
}

/// Render `picture` at its natural size (see [`natural_size`]).
pub fn rasterize_natural(picture: &dyn VectorPicture) -> IcopackResult<RasterImage> {
    let size = natural_size(picture.bounding_box());
    rasterize(picture, size)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/rasterizer.rs"]
mod tests;
