use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::encode::container::write_container;
use crate::encode::frame::{EncodedFrame, encode_frame};
use crate::foundation::core::TargetSize;
use crate::foundation::error::{IcopackError, IcopackResult};
use crate::picture::VectorPicture;
use crate::picture::svg::SvgPicture;
use crate::raster::multi::{ICON_SIZES, RenderThreading, render_all};
use crate::raster::rasterizer::rasterize_natural;

/// Output kinds a conversion can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One PNG image at the picture's natural size.
    Png,
    /// One ICO container holding a frame for every size in [`ICON_SIZES`].
    Ico,
}

impl OutputFormat {
    /// Pick the format from `path`'s extension (`.png` or `.ico`, any case).
    pub fn from_path(path: &Path) -> IcopackResult<Self> {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                IcopackError::unsupported_format(format!(
                    "cannot infer output format from '{}'",
                    path.display()
                ))
            })?;
        ext.parse()
    }

    /// Conventional file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Ico => "ico",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = IcopackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" | "single-image" => Ok(Self::Png),
            "ico" | "container" | "multi-resolution" => Ok(Self::Ico),
            other => Err(IcopackError::unsupported_format(format!(
                "'{other}' (expected png or ico)"
            ))),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Options for [`convert_file`].
#[derive(Clone, Debug, Default)]
pub struct ConvertOpts {
    /// Output format; inferred from the destination extension when `None`.
    pub format: Option<OutputFormat>,
    /// Threading used for multi-size rendering.
    pub threading: RenderThreading,
}

/// Summary of a successful conversion.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ConvertReport {
    /// Format that was written.
    pub format: OutputFormat,
    /// Destination path.
    pub output: PathBuf,
    /// Frame sizes in file order.
    pub frames: Vec<TargetSize>,
    /// Bytes written to `output`.
    pub bytes_written: u64,
}

/// Load the SVG at `input` and write it to `output`.
///
/// Stages run load, render, encode, write; the first failure stops the pipeline and is
/// returned with the input path attached. For ICO output, `output` is not touched unless
/// every frame rendered and encoded.
#[tracing::instrument(skip(opts))]
pub fn convert_file(
    input: &Path,
    output: &Path,
    opts: &ConvertOpts,
) -> IcopackResult<ConvertReport> {
    let format = match opts.format {
        Some(f) => f,
        None => OutputFormat::from_path(output)?,
    };

    let picture = SvgPicture::load(input)?;
    convert_picture(&picture, output, format, &opts.threading)
        .map_err(|e| attach_input(input, e))
}

/// Render an already-loaded `picture` to `output` in `format`.
pub fn convert_picture(
    picture: &dyn VectorPicture,
    output: &Path,
    format: OutputFormat,
    threading: &RenderThreading,
) -> IcopackResult<ConvertReport> {
    let (frames, bytes_written) = match format {
        OutputFormat::Png => {
            let frame = render_png(picture)?;
            crate::output::write_file(output, &frame.bytes)?;
            (vec![frame.size], frame.bytes.len() as u64)
        }
        OutputFormat::Ico => {
            let frames = render_icon_frames(picture, &ICON_SIZES, threading)?;
            let written = write_container(&frames, output)?;
            (frames.iter().map(|f| f.size).collect(), written)
        }
    };

    tracing::info!(%format, path = %output.display(), bytes_written, "converted");
    Ok(ConvertReport {
        format,
        output: output.to_path_buf(),
        frames,
        bytes_written,
    })
}

/// Rasterize `picture` at its natural size and PNG-encode it.
pub fn render_png(picture: &dyn VectorPicture) -> IcopackResult<EncodedFrame> {
    encode_frame(rasterize_natural(picture)?)
}

/// Render and encode one frame per size, in `sizes` order.
///
/// Every raster image is released as soon as it is encoded, or when an error stops the run.
pub fn render_icon_frames(
    picture: &dyn VectorPicture,
    sizes: &[TargetSize],
    threading: &RenderThreading,
) -> IcopackResult<Vec<EncodedFrame>> {
    let images = render_all(picture, sizes, threading)?;
    images
        .into_iter()
        .map(encode_frame)
        .collect::<IcopackResult<Vec<_>>>()
}

fn attach_input(input: &Path, e: IcopackError) -> IcopackError {
    match e {
        IcopackError::Render(msg) => IcopackError::render(format!("'{}': {msg}", input.display())),
        IcopackError::Encode(msg) => IcopackError::encode(format!("'{}': {msg}", input.display())),
        other => other,
    }
}

#[cfg(test)]
#[path = "../tests/unit/convert.rs"]
mod tests;
