//! Document composition
//!
//! Maps formatted records onto layout tables and drives the render
//! collaborator: open template, draw every configured field, save. The
//! certificate additionally merges its three rendered pages into one PDF and
//! removes the per-page files.

use crate::layout::{layout_for, FieldLayout};
use crate::record::{CompanyRow, FormattedRecord, PersonRow};
use crate::{DocumentKind, GeneratorError, Result};
use card_core::{load_font, CardCanvas, Color, TextSurface};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Template and font locations
#[derive(Debug, Clone)]
pub struct AssetConfig {
    pub font: PathBuf,
    pub driver_license_template: PathBuf,
    pub individual_number_template: PathBuf,
    pub certificate_page_templates: [PathBuf; 3],
}

impl AssetConfig {
    /// Conventional template filenames under a templates directory
    pub fn from_dirs<P: AsRef<Path>, Q: AsRef<Path>>(templates_dir: P, font: Q) -> Self {
        let dir = templates_dir.as_ref();
        Self {
            font: font.as_ref().to_path_buf(),
            driver_license_template: dir.join("driver_license_template.png"),
            individual_number_template: dir.join("individual_number_card_template.png"),
            certificate_page_templates: [
                dir.join("certificate_template_page1.png"),
                dir.join("certificate_template_page2.png"),
                dir.join("certificate_template_page3.png"),
            ],
        }
    }

    /// Templates a document type renders onto, in page order
    pub fn templates_for(&self, kind: DocumentKind) -> Vec<&Path> {
        match kind {
            DocumentKind::DriverLicense => vec![self.driver_license_template.as_path()],
            DocumentKind::IndividualNumber => vec![self.individual_number_template.as_path()],
            DocumentKind::Certificate => self
                .certificate_page_templates
                .iter()
                .map(PathBuf::as_path)
                .collect(),
        }
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self::from_dirs("templates", "fonts/NotoSansJP-Regular.ttf")
    }
}

/// Render every layout field of one page onto a surface
///
/// Issues exactly one draw call per field, at the field's configured
/// position and font size. A field missing from the record fails with
/// [`GeneratorError::MissingField`] naming it; an empty value is still
/// rendered.
pub fn render_fields(
    surface: &mut impl TextSurface,
    fields: &[FieldLayout],
    record: &FormattedRecord,
    color: Color,
) -> Result<()> {
    for layout in fields {
        let text = record
            .get(layout.field)
            .ok_or(GeneratorError::MissingField(layout.field))?;
        surface.draw_text(
            text,
            layout.position.x,
            layout.position.y,
            layout.font_size,
            color,
        );
    }
    Ok(())
}

/// Merge rendered certificate pages into one PDF and remove the page files
///
/// The merge is durably written before any page file is touched. A deletion
/// failure is logged as a warning and never fails the call.
pub fn merge_and_cleanup(pages: &[PathBuf], output: &Path) -> Result<()> {
    card_core::pdf::merge_pages(pages, output)?;

    for path in pages {
        if let Err(err) = fs::remove_file(path) {
            warn!(page = %path.display(), error = %err, "failed to remove intermediate page");
        }
    }

    Ok(())
}

/// Batch document generator
///
/// Owns validated asset paths and the output directory. One generator serves
/// a whole batch, but template and font resources are opened fresh for every
/// generation call and released before it returns.
pub struct DocumentGenerator {
    assets: AssetConfig,
    output_dir: PathBuf,
    text_color: Color,
}

impl DocumentGenerator {
    /// Create a generator writing into `output_dir`, created if absent
    pub fn new(assets: AssetConfig, output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;

        Ok(Self {
            assets,
            output_dir,
            text_color: Color::black(),
        })
    }

    /// Override the default black text color
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Check that the font and every template of `kind` exist
    ///
    /// Called before row processing so a misconfiguration aborts the run
    /// before any record is touched.
    pub fn ensure_assets(&self, kind: DocumentKind) -> Result<()> {
        if !self.assets.font.is_file() {
            return Err(GeneratorError::MissingFont(self.assets.font.clone()));
        }
        for template in self.assets.templates_for(kind) {
            if !template.is_file() {
                return Err(GeneratorError::MissingTemplate(template.to_path_buf()));
            }
        }
        Ok(())
    }

    /// Generate a driver's license PNG, returning its path
    pub fn generate_driver_license(&self, row: &PersonRow) -> Result<PathBuf> {
        let record = FormattedRecord::for_driver_license(row);
        self.generate_card(
            DocumentKind::DriverLicense,
            &self.assets.driver_license_template,
            &record,
            &row.name,
        )
    }

    /// Generate an individual number card PNG, returning its path
    pub fn generate_individual_number(&self, row: &PersonRow) -> Result<PathBuf> {
        let record = FormattedRecord::for_individual_number(row);
        self.generate_card(
            DocumentKind::IndividualNumber,
            &self.assets.individual_number_template,
            &record,
            &row.name,
        )
    }

    fn generate_card(
        &self,
        kind: DocumentKind,
        template: &Path,
        record: &FormattedRecord,
        name: &str,
    ) -> Result<PathBuf> {
        let fields = layout_for(kind).pages()[0];
        let font = load_font(&self.assets.font)?;

        let mut canvas = CardCanvas::open(template, font)?;
        render_fields(&mut canvas, fields, record, self.text_color)?;

        let path = self
            .output_dir
            .join(jp_text::output_filename(name, kind.label()));
        canvas.save(&path)?;
        Ok(path)
    }

    /// Generate a certificate: three rendered pages merged into one PDF
    ///
    /// Pages are rendered and saved as `<prefix>_N.png` in page order, the
    /// merged `<prefix>.pdf` is written, then the page files are removed
    /// (removal failure is a warning, not an error).
    pub fn generate_certificate(&self, row: &CompanyRow) -> Result<PathBuf> {
        let kind = DocumentKind::Certificate;
        let layout = layout_for(kind);
        let record = FormattedRecord::for_certificate(row);
        let prefix = jp_text::output_prefix(&row.company_name, kind.label());
        let font = load_font(&self.assets.font)?;

        let mut page_paths = Vec::with_capacity(layout.page_count());
        for (index, fields) in layout.pages().iter().enumerate() {
            let template = &self.assets.certificate_page_templates[index];
            let mut canvas = CardCanvas::open(template, font.clone())?;
            render_fields(&mut canvas, fields, &record, self.text_color)?;

            let path = self.output_dir.join(format!("{prefix}_{}.png", index + 1));
            canvas.save(&path)?;
            page_paths.push(path);
        }

        let output = self.output_dir.join(format!("{prefix}.pdf"));
        merge_and_cleanup(&page_paths, &output)?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldId;

    /// Records draw calls instead of touching pixels
    #[derive(Debug, Default)]
    struct RecordingSurface {
        calls: Vec<(String, f32, f32, f32, Color)>,
    }

    impl TextSurface for RecordingSurface {
        fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
            self.calls.push((text.to_string(), x, y, font_size, color));
        }
    }

    fn person_row() -> PersonRow {
        PersonRow {
            name: "山田　太郎".to_string(),
            address: "東京都渋谷区渋谷１－１－１".to_string(),
            birth_year: "昭和51".to_string(),
            birth_month: "12".to_string(),
            birth_day: "3".to_string(),
            sex: "男".to_string(),
            expired_year: "令和10".to_string(),
            expired_month: "5".to_string(),
            expired_day: "15".to_string(),
        }
    }

    #[test]
    fn test_one_draw_call_per_license_field() {
        let record = FormattedRecord::for_driver_license(&person_row());
        let fields = layout_for(DocumentKind::DriverLicense).pages()[0];

        let mut surface = RecordingSurface::default();
        render_fields(&mut surface, fields, &record, Color::black()).unwrap();

        assert_eq!(surface.calls.len(), 9);
    }

    #[test]
    fn test_draw_calls_use_configured_placement() {
        let record = FormattedRecord::for_driver_license(&person_row());
        let fields = layout_for(DocumentKind::DriverLicense).pages()[0];

        let mut surface = RecordingSurface::default();
        render_fields(&mut surface, fields, &record, Color::black()).unwrap();

        let (text, x, y, size, color) = surface.calls[0].clone();
        assert_eq!(text, "山　田　　太　郎");
        assert_eq!((x, y), (100.0, 26.0));
        assert_eq!(size, 20.0);
        assert_eq!(color, Color::black());

        let western = surface
            .calls
            .iter()
            .find(|(text, ..)| text == "2028")
            .unwrap();
        assert_eq!((western.1, western.2), (35.0, 150.0));
        assert_eq!(western.3, 25.0);
    }

    #[test]
    fn test_missing_field_names_the_field() {
        let mut record = FormattedRecord::new();
        record.insert(FieldId::Name, "山田");
        let fields = layout_for(DocumentKind::DriverLicense).pages()[0];

        let mut surface = RecordingSurface::default();
        let err = render_fields(&mut surface, fields, &record, Color::black()).unwrap_err();

        match err {
            GeneratorError::MissingField(field) => assert_eq!(field, FieldId::Address),
            other => panic!("expected MissingField, got {other}"),
        }
    }

    #[test]
    fn test_empty_value_is_still_rendered() {
        let mut row = person_row();
        row.address = String::new();
        let record = FormattedRecord::for_driver_license(&row);
        let fields = layout_for(DocumentKind::DriverLicense).pages()[0];

        let mut surface = RecordingSurface::default();
        render_fields(&mut surface, fields, &record, Color::black()).unwrap();

        assert_eq!(surface.calls.len(), 9);
        assert!(surface.calls.iter().any(|(text, ..)| text.is_empty()));
    }

    #[test]
    fn test_certificate_pages_cover_all_seven_fields() {
        let record = FormattedRecord::for_certificate(&CompanyRow {
            company_name: "株式会社　山田商事".to_string(),
            company_address: "東京都千代田区丸の内２－２－２".to_string(),
            corporate_number: "1234567890123".to_string(),
            representative_name: "山田 太郎".to_string(),
            issue_year: "令和7".to_string(),
            issue_month: "8".to_string(),
            issue_day: "5".to_string(),
        });

        let mut total = 0;
        for fields in layout_for(DocumentKind::Certificate).pages() {
            let mut surface = RecordingSurface::default();
            render_fields(&mut surface, fields, &record, Color::black()).unwrap();
            total += surface.calls.len();
        }
        assert_eq!(total, 7);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let record = FormattedRecord::for_individual_number(&person_row());
        let fields = layout_for(DocumentKind::IndividualNumber).pages()[0];

        let mut first = RecordingSurface::default();
        let mut second = RecordingSurface::default();
        render_fields(&mut first, fields, &record, Color::black()).unwrap();
        render_fields(&mut second, fields, &record, Color::black()).unwrap();

        assert_eq!(first.calls, second.calls);
    }

    #[test]
    fn test_asset_config_conventional_paths() {
        let assets = AssetConfig::from_dirs("templates", "fonts/NotoSansJP-Regular.ttf");

        assert_eq!(
            assets.driver_license_template,
            PathBuf::from("templates/driver_license_template.png")
        );
        assert_eq!(assets.templates_for(DocumentKind::Certificate).len(), 3);
    }
}
