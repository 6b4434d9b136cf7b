//! Whitespace as browsers define it for form input.
//!
//! `str::trim` and regex `\s` follow Unicode `White_Space`, which counts
//! U+0085 (NEL) and not U+FEFF (BOM). Form values are trimmed and matched the
//! other way round, so the field rules use this set instead.

/// Regex class body (without brackets) matching one form whitespace character.
macro_rules! form_whitespace_class {
    () => {
        r"\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}"
    };
}

pub(crate) use form_whitespace_class;

/// Whether `c` counts as whitespace in a form value.
pub fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Strip leading and trailing form whitespace.
pub fn trim_form(value: &str) -> &str {
    value.trim_matches(is_form_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_form_ascii() {
        assert_eq!(trim_form("  Jo \t\n"), "Jo");
        assert_eq!(trim_form(""), "");
    }

    #[test]
    fn test_bom_is_whitespace_nel_is_not() {
        assert_eq!(trim_form("\u{FEFF}Jo\u{FEFF}"), "Jo");
        assert_eq!(trim_form("\u{85}"), "\u{85}");
        assert!(is_form_whitespace('\u{3000}'));
        assert!(!is_form_whitespace('\u{85}'));
        assert!(!is_form_whitespace('\u{180E}'));
    }
}
