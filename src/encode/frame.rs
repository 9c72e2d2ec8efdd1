use image::ImageEncoder as _;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};

use crate::foundation::core::TargetSize;
use crate::foundation::error::{IcopackError, IcopackResult};
use crate::foundation::math::premultiply_rgba8_in_place;
use crate::raster::image::RasterImage;

/// One losslessly compressed frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedFrame {
    /// Pixel dimensions of the source image.
    pub size: TargetSize,
    /// Bits per pixel of the source image (channels x bits per channel).
    pub bit_count: u16,
    /// PNG bytes.
    pub bytes: Vec<u8>,
}

/// Compress `raster` to PNG with the strongest compression setting.
///
/// The image is consumed; its premultiplied buffer is released before compression starts.
pub fn encode_frame(raster: RasterImage) -> IcopackResult<EncodedFrame> {
    let size = raster.size();
    let straight = raster.to_straight_rgba8();
    drop(raster);

    let mut bytes = Vec::new();
    PngEncoder::new_with_quality(&mut bytes, CompressionType::Best, FilterType::Adaptive)
        .write_image(
            &straight,
            size.width,
            size.height,
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|e| IcopackError::encode(format!("png encode {size}: {e}")))?;

    tracing::trace!(%size, bytes = bytes.len(), "encoded frame");
    Ok(EncodedFrame {
        size,
        bit_count: RasterImage::BITS_PER_PIXEL,
        bytes,
    })
}

/// Decode a frame produced by [`encode_frame`] back into premultiplied pixels.
pub fn decode_frame(frame: &EncodedFrame) -> IcopackResult<RasterImage> {
    let dyn_img = image::load_from_memory_with_format(&frame.bytes, image::ImageFormat::Png)
        .map_err(|e| IcopackError::encode(format!("png decode {}: {e}", frame.size)))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut data = rgba.into_raw();
    premultiply_rgba8_in_place(&mut data);
    RasterImage::from_premul_rgba8(width, height, data)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/frame.rs"]
mod tests;
