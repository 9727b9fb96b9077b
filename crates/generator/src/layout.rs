//! Per-document-type layout tables
//!
//! Every semantic field a template can carry is indexed by [`FieldId`], and
//! each document type exposes a [`DocumentLayout`]: ordered pages of
//! `(field, position, font size)` entries, fixed at compile time. Adding a
//! document type means adding a table here and a record constructor, never
//! touching composer control flow.

use crate::DocumentKind;
use std::fmt;

/// Semantic field identifiers across all document types
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Name,
    Address,
    BirthYear,
    BirthMonth,
    BirthDay,
    Sex,
    ExpiredYear,
    ExpiredYearWestern,
    ExpiredMonth,
    ExpiredDay,
    CompanyName,
    CompanyAddress,
    CorporateNumber,
    RepresentativeName,
    IssueYear,
    IssueMonth,
    IssueDay,
}

impl FieldId {
    /// Stable snake_case name, matching the input column vocabulary
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Address => "address",
            FieldId::BirthYear => "birth_year",
            FieldId::BirthMonth => "birth_month",
            FieldId::BirthDay => "birth_day",
            FieldId::Sex => "sex",
            FieldId::ExpiredYear => "expired_year",
            FieldId::ExpiredYearWestern => "expired_year_western",
            FieldId::ExpiredMonth => "expired_month",
            FieldId::ExpiredDay => "expired_day",
            FieldId::CompanyName => "company_name",
            FieldId::CompanyAddress => "company_address",
            FieldId::CorporateNumber => "corporate_number",
            FieldId::RepresentativeName => "representative_name",
            FieldId::IssueYear => "issue_year",
            FieldId::IssueMonth => "issue_month",
            FieldId::IssueDay => "issue_day",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pixel position on a template, top-left origin
///
/// Positions are sub-pixel (the individual number card uses x = 238.5) and
/// rounded only at the draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// Placement of one semantic field on a template
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldLayout {
    pub field: FieldId,
    pub position: Position,
    pub font_size: f32,
}

const fn field(id: FieldId, x: f32, y: f32, font_size: f32) -> FieldLayout {
    FieldLayout {
        field: id,
        position: Position { x, y },
        font_size,
    }
}

/// Field placements for one document type, in page order
#[derive(Debug, Clone, Copy)]
pub struct DocumentLayout {
    pages: &'static [&'static [FieldLayout]],
}

impl DocumentLayout {
    /// Pages in render order; card types have exactly one
    pub fn pages(&self) -> &'static [&'static [FieldLayout]] {
        self.pages
    }

    /// Number of template pages
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Total number of fields across all pages
    pub fn field_count(&self) -> usize {
        self.pages.iter().map(|page| page.len()).sum()
    }

    /// All field placements across all pages
    pub fn fields(&self) -> impl Iterator<Item = &'static FieldLayout> {
        self.pages.iter().flat_map(|page| page.iter())
    }
}

const DRIVER_LICENSE_FIELDS: &[FieldLayout] = &[
    field(FieldId::Name, 100.0, 26.0, 20.0),
    field(FieldId::Address, 90.0, 90.0, 20.0),
    field(FieldId::BirthYear, 440.0, 26.0, 20.0),
    field(FieldId::BirthMonth, 530.0, 26.0, 20.0),
    field(FieldId::BirthDay, 590.0, 26.0, 20.0),
    field(FieldId::ExpiredYear, 122.0, 150.0, 25.0),
    field(FieldId::ExpiredYearWestern, 35.0, 150.0, 25.0),
    field(FieldId::ExpiredMonth, 235.0, 150.0, 25.0),
    field(FieldId::ExpiredDay, 287.0, 150.0, 25.0),
];

const INDIVIDUAL_NUMBER_FIELDS: &[FieldLayout] = &[
    field(FieldId::Name, 50.0, 22.0, 16.0),
    field(FieldId::Address, 50.0, 53.0, 16.0),
    field(FieldId::BirthYear, 182.0, 104.0, 13.0),
    field(FieldId::BirthMonth, 238.5, 104.0, 13.0),
    field(FieldId::BirthDay, 265.0, 104.0, 13.0),
    field(FieldId::Sex, 470.0, 75.0, 13.0),
    field(FieldId::ExpiredYear, 314.0, 103.0, 13.0),
    field(FieldId::ExpiredMonth, 370.0, 103.0, 13.0),
    field(FieldId::ExpiredDay, 400.0, 103.0, 13.0),
];

const CERTIFICATE_PAGE_1: &[FieldLayout] = &[
    field(FieldId::CompanyName, 160.0, 120.0, 28.0),
    field(FieldId::CompanyAddress, 160.0, 184.0, 22.0),
    field(FieldId::CorporateNumber, 160.0, 248.0, 22.0),
];

const CERTIFICATE_PAGE_2: &[FieldLayout] = &[
    field(FieldId::RepresentativeName, 200.0, 150.0, 26.0),
];

const CERTIFICATE_PAGE_3: &[FieldLayout] = &[
    field(FieldId::IssueYear, 150.0, 300.0, 22.0),
    field(FieldId::IssueMonth, 232.0, 300.0, 22.0),
    field(FieldId::IssueDay, 290.0, 300.0, 22.0),
];

/// Layout table for a document type
pub fn layout_for(kind: DocumentKind) -> DocumentLayout {
    match kind {
        DocumentKind::DriverLicense => DocumentLayout {
            pages: &[DRIVER_LICENSE_FIELDS],
        },
        DocumentKind::IndividualNumber => DocumentLayout {
            pages: &[INDIVIDUAL_NUMBER_FIELDS],
        },
        DocumentKind::Certificate => DocumentLayout {
            pages: &[CERTIFICATE_PAGE_1, CERTIFICATE_PAGE_2, CERTIFICATE_PAGE_3],
        },
    }
}
