use crate::error::{ParseError, ParseErrorKind};

/// Strip leading and trailing Unicode whitespace.
///
/// # Errors
///
/// Returns [`ParseErrorKind::EmptyInput`] when nothing but whitespace (or
/// nothing at all) is left.
pub fn trim(input: &[char]) -> Result<&[char], ParseError> {
    let first = input.iter().position(|c| !c.is_whitespace());
    let last = input.iter().rposition(|c| !c.is_whitespace());
    match (first, last) {
        (Some(first), Some(last)) => Ok(&input[first..=last]),
        _ => Err(ParseError::new(
            ParseErrorKind::EmptyInput,
            0,
            input.len(),
            "input is empty",
        )),
    }
}
