//! Rune classes used by the scanners.
//!
//! Punctuation means Unicode general category P (connector, dash, open,
//! close, initial, final and other punctuation). Symbols such as `=`, `+`,
//! `<` and `>` are category S and therefore count as name runes; the scanners
//! look for their delimiters before consulting these predicates.

use unicode_general_category::{GeneralCategory, get_general_category};

/// Whether `c` is in one of the Unicode punctuation categories.
#[must_use]
pub fn is_punctuation(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}

/// Whether `c` may appear in a tag or attribute name.
///
/// `_ - : .` are allowed explicitly; otherwise any rune that is not a
/// control character, whitespace or punctuation.
#[must_use]
pub fn is_name_rune(c: char) -> bool {
    matches!(c, '_' | '-' | ':' | '.') || !(c.is_control() || c.is_whitespace() || is_punctuation(c))
}

/// Whether `c` may appear inside a quoted attribute value.
#[must_use]
pub fn is_value_rune(c: char) -> bool {
    c == ' ' || is_name_rune(c) || is_punctuation(c)
}

/// Whether `c` counts as real content when trimming raw text.
#[must_use]
pub fn is_content_rune(c: char) -> bool {
    is_name_rune(c) || is_punctuation(c)
}
