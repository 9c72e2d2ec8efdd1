use rayon::prelude::*;

use crate::foundation::core::TargetSize;
use crate::foundation::error::{IcopackError, IcopackResult};
use crate::picture::VectorPicture;
use crate::raster::image::RasterImage;
use crate::raster::rasterizer::rasterize;

/// Frame sizes packed into an ICO container, in directory order.
pub const ICON_SIZES: [TargetSize; 7] = [
    TargetSize::square(16),
    TargetSize::square(24),
    TargetSize::square(32),
    TargetSize::square(48),
    TargetSize::square(64),
    TargetSize::square(128),
    TargetSize::square(256),
];

#[derive(Clone, Debug, Default)]
/// Threading controls for multi-size rendering.
pub struct RenderThreading {
    /// Render sizes on a rayon pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

/// Render `picture` at every size in `sizes`, preserving order.
///
/// All-or-nothing: the first failure in list order is returned and every image rendered
/// so far is dropped. In parallel mode later sizes may already have been rendered when an
/// earlier one fails; they are dropped the same way.
#[tracing::instrument(skip(picture, sizes), fields(sizes = sizes.len()))]
pub fn render_all(
    picture: &dyn VectorPicture,
    sizes: &[TargetSize],
    threading: &RenderThreading,
) -> IcopackResult<Vec<RasterImage>> {
    if sizes.is_empty() {
        return Err(IcopackError::config("size list must be non-empty"));
    }

    if !threading.parallel {
        let mut out = Vec::with_capacity(sizes.len());
        for &size in sizes {
            out.push(rasterize(picture, size)?);
        }
        return Ok(out);
    }

    let pool = build_thread_pool(threading.threads)?;
    let rendered = pool.install(|| {
        sizes
            .par_iter()
            .map(|&size| rasterize(picture, size))
            .collect::<Vec<_>>()
    });

    let mut out = Vec::with_capacity(rendered.len());
    for item in rendered {
        out.push(item?);
    }
    Ok(out)
}

fn build_thread_pool(threads: Option<usize>) -> IcopackResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(IcopackError::config(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| IcopackError::config(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/raster/multi.rs"]
mod tests;
