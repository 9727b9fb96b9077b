//! mockid - batch mock identity document generator
//!
//! Reads CSV rows and renders one document per row onto the selected
//! document type's template images. Rows are processed strictly in order;
//! the first failing row aborts the batch with its row number.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use generator::{AssetConfig, CompanyRow, DocumentGenerator, DocumentKind, PersonRow};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Columns every person row must carry
const PERSON_COLUMNS: [&str; 9] = [
    "name",
    "address",
    "birth_year",
    "birth_month",
    "birth_day",
    "sex",
    "expired_year",
    "expired_month",
    "expired_day",
];

/// Columns every company row must carry
const COMPANY_COLUMNS: [&str; 7] = [
    "company_name",
    "company_address",
    "corporate_number",
    "representative_name",
    "issue_year",
    "issue_month",
    "issue_day",
];

#[derive(Parser)]
#[command(name = "mockid")]
#[command(about = "Generate mock identity document images from CSV rows")]
struct Cli {
    /// CSV file with one record per row
    input: PathBuf,

    /// Document type to generate
    #[arg(long, value_enum)]
    kind: Kind,

    /// Directory the rendered documents are written to
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,

    /// Directory holding the template images
    #[arg(long, default_value = "templates")]
    templates_dir: PathBuf,

    /// CJK-capable font used for all text
    #[arg(long, default_value = "fonts/NotoSansJP-Regular.ttf")]
    font: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    #[value(name = "driver_license")]
    DriverLicense,
    #[value(name = "individual_number")]
    IndividualNumber,
    #[value(name = "certificate")]
    Certificate,
}

impl From<Kind> for DocumentKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::DriverLicense => DocumentKind::DriverLicense,
            Kind::IndividualNumber => DocumentKind::IndividualNumber,
            Kind::Certificate => DocumentKind::Certificate,
        }
    }
}

/// Reject the batch before any row if required columns are absent
fn validate_headers(headers: &csv::StringRecord, required: &[&str]) -> Result<()> {
    let missing: Vec<&str> = required
        .iter()
        .filter(|column| !headers.iter().any(|header| header == **column))
        .copied()
        .collect();

    if !missing.is_empty() {
        bail!("input is missing required columns: {}", missing.join(", "));
    }
    Ok(())
}

fn process_cards(
    generator: &DocumentGenerator,
    kind: DocumentKind,
    reader: &mut csv::Reader<std::fs::File>,
) -> Result<()> {
    for (index, row) in reader.deserialize::<PersonRow>().enumerate() {
        let row_number = index + 1;
        let row = row.with_context(|| format!("failed to read row {row_number}"))?;

        let path = match kind {
            DocumentKind::DriverLicense => generator.generate_driver_license(&row),
            _ => generator.generate_individual_number(&row),
        }
        .with_context(|| format!("failed to generate document for row {row_number}"))?;

        info!(row = row_number, path = %path.display(), "generated card");
    }
    Ok(())
}

fn process_certificates(
    generator: &DocumentGenerator,
    reader: &mut csv::Reader<std::fs::File>,
) -> Result<()> {
    for (index, row) in reader.deserialize::<CompanyRow>().enumerate() {
        let row_number = index + 1;
        let row = row.with_context(|| format!("failed to read row {row_number}"))?;

        let path = generator
            .generate_certificate(&row)
            .with_context(|| format!("failed to generate document for row {row_number}"))?;

        info!(row = row_number, path = %path.display(), "generated certificate");
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let kind = DocumentKind::from(cli.kind);

    let assets = AssetConfig::from_dirs(&cli.templates_dir, &cli.font);
    let generator = DocumentGenerator::new(assets, &cli.output_dir).with_context(|| {
        format!(
            "failed to prepare output directory {}",
            cli.output_dir.display()
        )
    })?;
    generator.ensure_assets(kind)?;

    let mut reader = csv::Reader::from_path(&cli.input)
        .with_context(|| format!("failed to open {}", cli.input.display()))?;
    let headers = reader.headers()?.clone();

    match kind {
        DocumentKind::Certificate => {
            validate_headers(&headers, &COMPANY_COLUMNS)?;
            process_certificates(&generator, &mut reader)?;
        }
        DocumentKind::DriverLicense | DocumentKind::IndividualNumber => {
            validate_headers(&headers, &PERSON_COLUMNS)?;
            process_cards(&generator, kind, &mut reader)?;
        }
    }

    Ok(())
}
