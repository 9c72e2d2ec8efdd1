use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::foundation::core::{Affine, Rect, to_skia_transform};
use crate::foundation::error::{IcopackError, IcopackResult};
use crate::picture::{PictureCanvas, VectorPicture};

/// A parsed SVG document.
///
/// The bounding box is the document viewport `(0, 0, width, height)` that `usvg` laid the
/// content out into, so the picture keeps the padding its author drew around the artwork.
#[derive(Clone, Debug)]
pub struct SvgPicture {
    tree: Arc<usvg::Tree>,
}

impl SvgPicture {
    /// Parse SVG bytes. Relative references (images, fonts) resolve against
    /// `resources_dir` when given.
    ///
    /// Fails with [`IcopackError::Load`] when the bytes are not a valid SVG document or the
    /// document has nothing to draw.
    pub fn from_data(bytes: &[u8], resources_dir: Option<PathBuf>) -> IcopackResult<Self> {
        let fontdb = build_svg_fontdb(resources_dir.as_deref());
        let opts = usvg::Options {
            resources_dir,
            fontdb,
            ..Default::default()
        };

        let tree = usvg::Tree::from_data(bytes, &opts)
            .map_err(|e| IcopackError::load(format!("parse svg: {e}")))?;
        if tree.root().children().is_empty() {
            return Err(IcopackError::load("svg has no drawable content"));
        }

        Ok(Self {
            tree: Arc::new(tree),
        })
    }

    /// Read and parse the SVG file at `path`.
    #[tracing::instrument]
    pub fn load(path: &Path) -> IcopackResult<Self> {
        let bytes = std::fs::read(path)
            .map_err(|e| IcopackError::load(format!("read '{}': {e}", path.display())))?;
        let resources_dir = std::fs::canonicalize(path)
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf));

        let picture = Self::from_data(&bytes, resources_dir).map_err(|e| match e {
            IcopackError::Load(msg) => IcopackError::load(format!("'{}': {msg}", path.display())),
            other => other,
        })?;
        tracing::debug!(
            width = picture.tree.size().width(),
            height = picture.tree.size().height(),
            "loaded svg"
        );
        Ok(picture)
    }

    /// Borrow the underlying `usvg` tree.
    pub fn tree(&self) -> &usvg::Tree {
        &self.tree
    }
}

impl VectorPicture for SvgPicture {
    fn bounding_box(&self) -> Rect {
        let size = self.tree.size();
        Rect::new(0.0, 0.0, f64::from(size.width()), f64::from(size.height()))
    }

    fn render(&self, canvas: &mut PictureCanvas<'_>, transform: Affine) -> IcopackResult<()> {
        resvg::render(&self.tree, to_skia_transform(transform), canvas);
        Ok(())
    }
}

fn build_svg_fontdb(resources_dir: Option<&Path>) -> Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();

    if let Some(dir) = resources_dir {
        load_fonts_from_dir(&mut db, dir);
        load_fonts_from_dir(&mut db, &dir.join("fonts"));
    }

    Arc::new(db)
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" && ext != "ttc" {
            continue;
        }
        let _ = db.load_font_file(&path);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/picture/svg.rs"]
mod tests;
