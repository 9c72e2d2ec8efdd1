use crate::foundation::core::TargetSize;
use crate::foundation::error::{IcopackError, IcopackResult};
use crate::foundation::math::unpremultiply_rgba8_in_place;

/// A rendered frame as RGBA8 pixels.
///
/// Pixels are **premultiplied alpha**, tightly packed and row-major. A fresh image is fully
/// transparent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterImage {
    /// Color channels per pixel.
    pub const CHANNELS: u16 = 4;
    /// Bits per channel.
    pub const BITS_PER_CHANNEL: u16 = 8;
    /// Bits per pixel, as recorded in container directory entries.
    pub const BITS_PER_PIXEL: u16 = Self::CHANNELS * Self::BITS_PER_CHANNEL;

    /// A fully transparent image of `size`.
    pub fn transparent(size: TargetSize) -> Self {
        Self {
            width: size.width,
            height: size.height,
            data: vec![0u8; size.pixel_count() * Self::CHANNELS as usize],
        }
    }

    /// Wrap an existing premultiplied RGBA8 buffer.
    pub fn from_premul_rgba8(width: u32, height: u32, data: Vec<u8>) -> IcopackResult<Self> {
        let expected = (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(Self::CHANNELS as usize);
        if width == 0 || height == 0 || data.len() != expected {
            return Err(IcopackError::render(format!(
                "pixel buffer of {} bytes does not match {width}x{height} RGBA8",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel dimensions.
    pub fn size(&self) -> TargetSize {
        TargetSize {
            width: self.width,
            height: self.height,
        }
    }

    /// Premultiplied RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Give up the pixel buffer.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Premultiplied RGBA of the pixel at `(x, y)`, if inside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Straight-alpha copy of the pixels, the layout PNG stores.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        unpremultiply_rgba8_in_place(&mut out);
        out
    }

    /// `true` when every pixel has zero alpha.
    pub fn is_fully_transparent(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == 0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/image.rs"]
mod tests;
