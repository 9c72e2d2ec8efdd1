use crate::foundation::core::{Affine, Rect};
use crate::foundation::error::IcopackResult;

/// `usvg`/`resvg` backed [`VectorPicture`].
pub mod svg;

/// Canvas a [`VectorPicture`] draws into: premultiplied RGBA8 pixels.
pub type PictureCanvas<'a> = resvg::tiny_skia::PixmapMut<'a>;

/// An immutable, already-parsed vector scene.
///
/// The rasterizer only relies on these two operations. Loading and validating the
/// underlying document is the implementor's concern and must happen before a picture
/// reaches the rasterizer.
pub trait VectorPicture: Send + Sync {
    /// Rectangle enclosing the picture's content, in picture units.
    ///
    /// This may be the tight bounds of the drawn content or a declared canvas such as an
    /// SVG viewport; [`SvgPicture`](crate::picture::svg::SvgPicture) returns the viewport.
    /// The rasterizer accepts any origin and substitutes the unit box when either side is
    /// non-positive or non-finite.
    fn bounding_box(&self) -> Rect;

    /// Draw the picture into `canvas`, mapping picture units through `transform`.
    fn render(&self, canvas: &mut PictureCanvas<'_>, transform: Affine) -> IcopackResult<()>;
}
