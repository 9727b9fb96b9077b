//! Card Core - Low-level card image rendering
//!
//! This crate provides functionality for:
//! - Opening template raster images and saving rendered cards
//! - Loading a CJK-capable TrueType font
//! - Drawing text at pixel positions
//! - Merging rendered pages into a single PDF
//!
//! # Example
//!
//! ```ignore
//! use card_core::{load_font, CardCanvas, Color, TextSurface};
//!
//! let font = load_font("fonts/NotoSansJP-Regular.ttf")?;
//! let mut canvas = CardCanvas::open("templates/driver_license_template.png", font)?;
//! canvas.draw_text("山　田　　太　郎", 100.0, 26.0, 20.0, Color::black());
//! canvas.save("output/card.png")?;
//! ```

mod canvas;
mod font;
pub mod pdf;

pub use canvas::{CardCanvas, Color, TextSurface};
pub use font::load_font;

// Re-export the font handle type so callers do not need a direct ab_glyph
// dependency to pass fonts around.
pub use ab_glyph::FontArc;

use thiserror::Error;

/// Errors that can occur while rendering cards
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("Failed to open template image: {0}")]
    OpenError(String),

    #[error("Failed to save image: {0}")]
    SaveError(String),

    #[error("Failed to load font: {0}")]
    FontError(String),

    #[error("Failed to merge pages: {0}")]
    MergeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("PDF error: {0}")]
    PdfError(#[from] lopdf::Error),
}

/// Result type for card rendering operations
pub type Result<T> = std::result::Result<T, CanvasError>;
