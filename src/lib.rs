//! icopack rasterizes vector pictures into PNG images and multi-resolution ICO containers.
//!
//! The pipeline is:
//!
//! - Load an [`SvgPicture`] (or any other [`VectorPicture`])
//! - Rasterize it at its natural size ([`rasterize_natural`]) or at every size in
//!   [`ICON_SIZES`] ([`render_all`])
//! - Compress frames with [`encode_frame`] and pack them with [`encode_container`]
//!
//! [`convert_file`] wires all of this together for the command line.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Conversion pipeline and output format selection.
pub mod convert;
/// PNG frame encoding and the ICO container format.
pub mod encode;
/// Destination file writing.
pub mod output;
/// The vector picture abstraction and its SVG binding.
pub mod picture;
/// Rasterization onto fixed-size transparent canvases.
pub mod raster;

pub use crate::foundation::core::{Affine, Rect, TargetSize, Vec2};
pub use crate::foundation::error::{IcopackError, IcopackResult};

pub use crate::convert::{
    ConvertOpts, ConvertReport, OutputFormat, convert_file, convert_picture, render_icon_frames,
    render_png,
};
pub use crate::encode::container::{
    ContainerDirectory, ContainerEntry, ICON_DIR_ENTRY_LEN, ICON_DIR_HEADER_LEN, dimension_byte,
    encode_container, write_container,
};
pub use crate::encode::frame::{EncodedFrame, decode_frame, encode_frame};
pub use crate::picture::VectorPicture;
pub use crate::picture::svg::SvgPicture;
pub use crate::raster::image::RasterImage;
pub use crate::raster::multi::{ICON_SIZES, RenderThreading, render_all};
pub use crate::raster::placement::{Placement, natural_size};
pub use crate::raster::rasterizer::{MAX_DIMENSION, rasterize, rasterize_natural};
