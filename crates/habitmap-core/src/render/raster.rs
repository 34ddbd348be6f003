//! Scene rasterization via resvg.

use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::error::RenderError;
use crate::fonts::FontStore;
use crate::layout::CanvasSize;

/// Rasterize an SVG scene onto a fresh pixmap of `size`.
pub(crate) fn rasterize(svg: &str, size: CanvasSize, fonts: &FontStore) -> Result<Pixmap, RenderError> {
    let mut options = Options::default();
    options.font_family = fonts.family().to_string();
    options.fontdb = fonts.database();

    let tree = Tree::from_str(svg, &options).map_err(|e| RenderError::Scene(e.to_string()))?;

    let mut pixmap = Pixmap::new(size.width, size.height).ok_or(RenderError::CanvasAllocation {
        width: size.width,
        height: size.height,
    })?;
    resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

    Ok(pixmap)
}
