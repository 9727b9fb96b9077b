//! Input rows and formatted records

use crate::FieldId;
use jp_text::{
    format_name_for_id_card, format_name_for_license, format_representative_name, pad_month_day,
    to_western_year,
};
use serde::Deserialize;
use std::collections::BTreeMap;

/// One person row of the input CSV (driver license / individual number card)
#[derive(Debug, Clone, Deserialize)]
pub struct PersonRow {
    pub name: String,
    pub address: String,
    pub birth_year: String,
    pub birth_month: String,
    pub birth_day: String,
    pub sex: String,
    pub expired_year: String,
    pub expired_month: String,
    pub expired_day: String,
}

/// One company row of the input CSV (certificate)
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyRow {
    pub company_name: String,
    pub company_address: String,
    pub corporate_number: String,
    pub representative_name: String,
    pub issue_year: String,
    pub issue_month: String,
    pub issue_day: String,
}

/// Display-ready field values for one record and one document type
///
/// Built once per record per document type; the composer only reads it.
/// Values may be empty strings, but a field demanded by the layout must be
/// present or composition fails naming the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedRecord {
    values: BTreeMap<FieldId, String>,
}

impl FormattedRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a display-ready value
    pub fn insert(&mut self, field: FieldId, value: impl Into<String>) -> &mut Self {
        self.values.insert(field, value.into());
        self
    }

    /// Look up a field value
    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Number of populated fields
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no field is populated
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Format a person row for the driver's license template
    ///
    /// The name is spread license-style, the western expiry year is derived
    /// from the era-dated expiry year, and month/day values are padded to a
    /// fixed two-character cell.
    pub fn for_driver_license(row: &PersonRow) -> Self {
        let mut record = Self::new();
        record
            .insert(FieldId::Name, format_name_for_license(&row.name))
            .insert(FieldId::Address, row.address.clone())
            .insert(FieldId::BirthYear, row.birth_year.clone())
            .insert(FieldId::BirthMonth, pad_month_day(&row.birth_month))
            .insert(FieldId::BirthDay, pad_month_day(&row.birth_day))
            .insert(FieldId::ExpiredYear, row.expired_year.clone())
            .insert(
                FieldId::ExpiredYearWestern,
                to_western_year(&row.expired_year),
            )
            .insert(FieldId::ExpiredMonth, pad_month_day(&row.expired_month))
            .insert(FieldId::ExpiredDay, pad_month_day(&row.expired_day));
        record
    }

    /// Format a person row for the individual number card template
    pub fn for_individual_number(row: &PersonRow) -> Self {
        let mut record = Self::new();
        record
            .insert(FieldId::Name, format_name_for_id_card(&row.name))
            .insert(FieldId::Address, row.address.clone())
            .insert(FieldId::BirthYear, row.birth_year.clone())
            .insert(FieldId::BirthMonth, pad_month_day(&row.birth_month))
            .insert(FieldId::BirthDay, pad_month_day(&row.birth_day))
            .insert(FieldId::Sex, row.sex.clone())
            .insert(FieldId::ExpiredYear, row.expired_year.clone())
            .insert(FieldId::ExpiredMonth, pad_month_day(&row.expired_month))
            .insert(FieldId::ExpiredDay, pad_month_day(&row.expired_day));
        record
    }

    /// Format a company row for the certificate templates
    pub fn for_certificate(row: &CompanyRow) -> Self {
        let mut record = Self::new();
        record
            .insert(FieldId::CompanyName, row.company_name.clone())
            .insert(FieldId::CompanyAddress, row.company_address.clone())
            .insert(FieldId::CorporateNumber, row.corporate_number.clone())
            .insert(
                FieldId::RepresentativeName,
                format_representative_name(&row.representative_name),
            )
            .insert(FieldId::IssueYear, row.issue_year.clone())
            .insert(FieldId::IssueMonth, pad_month_day(&row.issue_month))
            .insert(FieldId::IssueDay, pad_month_day(&row.issue_day));
        record
    }
}
