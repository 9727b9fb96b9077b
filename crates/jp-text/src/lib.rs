//! JP Text - Japanese text formatting for mock identity documents
//!
//! This crate provides:
//! - Era year conversion (令和, 平成, 昭和, 大正, 明治 → Gregorian)
//! - Name spacing rules (driver's license, individual number card,
//!   company representative)
//! - Month/day space padding for fixed-width date cells
//! - Output filename derivation
//!
//! # Example
//!
//! ```
//! use jp_text::{format_name_for_license, pad_month_day, to_western_year};
//!
//! let name = format_name_for_license("山田　太郎"); // "山　田　　太　郎"
//! let year = to_western_year("令和10");             // "2028"
//! let day = pad_month_day("5");                     // " 5"
//! # assert_eq!(name, "山　田　　太　郎");
//! # assert_eq!(year, "2028");
//! # assert_eq!(day, " 5");
//! ```
//!
//! All functions are pure and never fail: text that does not match a rule's
//! expected shape passes through unchanged.

mod era;
mod field;
mod name;

pub use era::to_western_year;
pub use field::{output_filename, output_prefix, pad_month_day};
pub use name::{format_name_for_id_card, format_name_for_license, format_representative_name};
