//! Name spacing rules
//!
//! Japanese identity documents print personal names with document-specific
//! spacing. All rules operate on full-width-space (U+3000) delimited
//! surname/given-name tokens and never inspect the characters themselves.

/// Full-width space delimiting surname and given name
const FULL_WIDTH_SPACE: char = '　';

/// Insert one full-width space between every pair of adjacent characters
fn space_out(part: &str) -> String {
    part.chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join("　")
}

/// Format a name the way a driver's license prints it
///
/// Each name part is spread with a full-width space between every character,
/// and the parts are joined with two full-width spaces. Any number of parts
/// is accepted.
///
/// # Examples
/// ```
/// use jp_text::format_name_for_license;
/// assert_eq!(format_name_for_license("山田　太郎"), "山　田　　太　郎");
/// ```
pub fn format_name_for_license(name: &str) -> String {
    name.split(FULL_WIDTH_SPACE)
        .map(space_out)
        .collect::<Vec<_>>()
        .join("　　")
}

/// Format a name the way an individual number card prints it
///
/// Parts are rejoined with a single full-width space. Characters inside a
/// part are left untouched.
///
/// # Examples
/// ```
/// use jp_text::format_name_for_id_card;
/// assert_eq!(format_name_for_id_card("山田　太郎"), "山田　太郎");
/// ```
pub fn format_name_for_id_card(name: &str) -> String {
    name.split(FULL_WIDTH_SPACE)
        .collect::<Vec<_>>()
        .join("　")
}

/// Format a company representative name
///
/// All half-width and full-width spaces are removed first, then every pair of
/// adjacent remaining characters is separated by one full-width space.
///
/// # Examples
/// ```
/// use jp_text::format_representative_name;
/// assert_eq!(format_representative_name("山田 太郎"), "山　田　太　郎");
/// ```
pub fn format_representative_name(name: &str) -> String {
    let stripped: String = name
        .chars()
        .filter(|c| *c != ' ' && *c != FULL_WIDTH_SPACE)
        .collect();
    space_out(&stripped)
}
