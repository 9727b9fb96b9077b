//! Raster canvas for card templates

use crate::{CanvasError, Result};
use ab_glyph::{FontArc, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use std::path::Path;

/// RGB color (values 0-255)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a new RGB color
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    /// White color
    pub fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// Red color
    pub fn red() -> Self {
        Self::rgb(255, 0, 0)
    }

    fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 255])
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Text rendering capability consumed by the document composer
///
/// [`CardCanvas`] is the production implementation. Tests inject recording
/// fakes to observe draw calls without touching templates or fonts.
pub trait TextSurface {
    /// Render `text` with its top-left corner at `(x, y)` in pixels
    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color);
}

/// A template image being rendered into
///
/// Opened fresh for each generation call, mutated in place by successive
/// text draws, saved once, then dropped. Never shared across records.
pub struct CardCanvas {
    image: RgbaImage,
    font: FontArc,
}

impl CardCanvas {
    /// Open a template image and bind the font used for all draws
    ///
    /// Any format the `image` crate decodes is accepted; pixel data is
    /// normalized to RGBA8.
    pub fn open<P: AsRef<Path>>(template: P, font: FontArc) -> Result<Self> {
        let template = template.as_ref();
        let image = image::open(template)
            .map_err(|e| CanvasError::OpenError(format!("{}: {}", template.display(), e)))?
            .to_rgba8();

        Ok(Self { image, font })
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Save the canvas; the format follows the file extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.image
            .save(path)
            .map_err(|e| CanvasError::SaveError(format!("{}: {}", path.display(), e)))
    }
}

impl TextSurface for CardCanvas {
    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        // Layout tables carry sub-pixel positions; rounding happens only here.
        draw_text_mut(
            &mut self.image,
            color.to_rgba(),
            x.round() as i32,
            y.round() as i32,
            PxScale::from(font_size),
            &self.font,
            text,
        );
    }
}
