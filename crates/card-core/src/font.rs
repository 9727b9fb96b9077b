//! Font loading

use crate::{CanvasError, Result};
use ab_glyph::FontArc;
use std::path::Path;

/// Load a TrueType/OpenType font for text rendering
///
/// The returned handle is cheaply cloneable; one load is shared by every
/// canvas of a single generation call.
///
/// # Arguments
/// * `path` - Path to a .ttf/.otf file covering the glyphs to render
pub fn load_font<P: AsRef<Path>>(path: P) -> Result<FontArc> {
    let path = path.as_ref();
    let data = std::fs::read(path)
        .map_err(|e| CanvasError::FontError(format!("{}: {}", path.display(), e)))?;

    FontArc::try_from_vec(data)
        .map_err(|e| CanvasError::FontError(format!("{}: {}", path.display(), e)))
}
