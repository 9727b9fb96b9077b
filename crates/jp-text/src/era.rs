//! Japanese era year conversion

/// Era name to Gregorian offset.
///
/// Adding the offset to the era year number gives the Gregorian year
/// (令和1 = 2019, 平成1 = 1989, 昭和1 = 1926, 大正1 = 1912, 明治1 = 1868).
const ERA_OFFSETS: [(&str, i32); 5] = [
    ("令和", 2018),
    ("平成", 1988),
    ("昭和", 1925),
    ("大正", 1911),
    ("明治", 1867),
];

/// Convert an era-prefixed year to a Gregorian year string
///
/// The input must start with one of the five era names immediately followed
/// by one or more decimal digits. Anything after the digit run (such as a
/// trailing 年) is ignored. Input that does not match is returned unchanged.
///
/// # Examples
/// ```
/// use jp_text::to_western_year;
/// assert_eq!(to_western_year("令和10"), "2028");
/// assert_eq!(to_western_year("平成5"), "1993");
/// assert_eq!(to_western_year("2020"), "2020");
/// ```
pub fn to_western_year(year: &str) -> String {
    for (era, offset) in ERA_OFFSETS {
        if let Some(rest) = year.strip_prefix(era) {
            let end = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            if let Ok(n) = rest[..end].parse::<i32>() {
                return (n + offset).to_string();
            }
        }
    }
    year.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reiwa() {
        assert_eq!(to_western_year("令和10"), "2028");
        assert_eq!(to_western_year("令和1"), "2019");
    }

    #[test]
    fn test_heisei() {
        assert_eq!(to_western_year("平成5"), "1993");
        assert_eq!(to_western_year("平成31"), "2019");
    }

    #[test]
    fn test_showa() {
        assert_eq!(to_western_year("昭和51"), "1976");
    }

    #[test]
    fn test_taisho() {
        assert_eq!(to_western_year("大正15"), "1926");
    }

    #[test]
    fn test_meiji() {
        assert_eq!(to_western_year("明治45"), "1912");
    }

    #[test]
    fn test_trailing_text_after_digits() {
        assert_eq!(to_western_year("令和10年"), "2028");
        assert_eq!(to_western_year("昭和51年12月"), "1976");
    }

    #[test]
    fn test_gregorian_passthrough() {
        assert_eq!(to_western_year("2020"), "2020");
    }

    #[test]
    fn test_unknown_era_passthrough() {
        assert_eq!(to_western_year("慶応3"), "慶応3");
    }

    #[test]
    fn test_era_without_digits_passthrough() {
        assert_eq!(to_western_year("令和"), "令和");
        assert_eq!(to_western_year("令和元年"), "令和元年");
    }

    #[test]
    fn test_empty_passthrough() {
        assert_eq!(to_western_year(""), "");
    }
}
