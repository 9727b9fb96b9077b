//! Month/day padding and output filename derivation

/// Pad a single-digit month or day to a fixed two-character cell
///
/// A value of exactly one character is prefixed with one half-width space so
/// that single- and double-digit values occupy the same width on the
/// template. Anything else is returned unchanged.
///
/// # Examples
/// ```
/// use jp_text::pad_month_day;
/// assert_eq!(pad_month_day("5"), " 5");
/// assert_eq!(pad_month_day("12"), "12");
/// ```
pub fn pad_month_day(value: &str) -> String {
    if value.chars().count() == 1 {
        format!(" {value}")
    } else {
        value.to_string()
    }
}

/// Derive the output stem for a document, without extension
///
/// Full-width spaces are stripped from the name and the document type label
/// is appended. The certificate composer uses this for its `_N.png` page
/// files and the merged `.pdf`.
pub fn output_prefix(name: &str, label: &str) -> String {
    let name: String = name.chars().filter(|c| *c != '　').collect();
    format!("{name}_{label}")
}

/// Derive the PNG output filename for a document
///
/// No collision detection is performed; uniqueness across a batch is the
/// caller's responsibility.
///
/// # Examples
/// ```
/// use jp_text::output_filename;
/// assert_eq!(output_filename("山田　太郎", "運転免許証"), "山田太郎_運転免許証.png");
/// ```
pub fn output_filename(name: &str, label: &str) -> String {
    format!("{}.png", output_prefix(name, label))
}
