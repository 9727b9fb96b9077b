//! Generator - layout configuration and document composition
//!
//! This crate provides:
//! - Static per-document-type layout tables (field → position/font size)
//! - CSV row structs and display-ready formatted records
//! - The document composer (render fields, save PNGs, merge the multi-page
//!   certificate into one PDF)
//!
//! # Example
//!
//! ```ignore
//! use generator::{AssetConfig, DocumentGenerator, DocumentKind, PersonRow};
//!
//! let generator = DocumentGenerator::new(AssetConfig::default(), "output")?;
//! generator.ensure_assets(DocumentKind::DriverLicense)?;
//! let path = generator.generate_driver_license(&row)?;
//! ```

mod compose;
mod layout;
mod record;

pub use compose::{merge_and_cleanup, render_fields, AssetConfig, DocumentGenerator};
pub use layout::{layout_for, DocumentLayout, FieldId, FieldLayout, Position};
pub use record::{CompanyRow, FormattedRecord, PersonRow};

use std::path::PathBuf;
use thiserror::Error;

/// Supported document types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    DriverLicense,
    IndividualNumber,
    Certificate,
}

impl DocumentKind {
    /// Japanese document label, used in output filenames
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::DriverLicense => "運転免許証",
            DocumentKind::IndividualNumber => "マイナンバーカード",
            DocumentKind::Certificate => "登記簿謄本",
        }
    }
}

/// Errors that can occur during document generation
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Font file not found: {0}")]
    MissingFont(PathBuf),

    #[error("Template image not found: {0}")]
    MissingTemplate(PathBuf),

    #[error("Record is missing required field: {0}")]
    MissingField(FieldId),

    #[error("Canvas error: {0}")]
    Canvas(#[from] card_core::CanvasError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for generation operations
pub type Result<T> = std::result::Result<T, GeneratorError>;
