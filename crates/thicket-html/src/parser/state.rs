use strum_macros::{Display, EnumIter};

/// The parser's finite-state machine.
///
/// Discriminants are stable and reported in [`ParseError`](super::ParseError)
/// alongside the state name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[repr(u8)]
pub enum ParserState {
    /// Collecting text between tags. The initial state.
    Uninitialised = 0,
    /// Just consumed `<`.
    ExpectingTag = 1,
    /// Just consumed `<!`; the next character picks doctype or comment.
    ExpectingBangQualifier = 2,
    /// Inside `<!DOCTYPE ...>`.
    WithinDoctype = 3,
    /// Inside `<? ... ?>`. Unsupported: entering it fails the parse.
    WithinXmlInstruction = 4,
    /// Inside `<![CDATA[ ... ]]>`. Unsupported: entering it fails the parse.
    WithinCdata = 5,
    /// Inside `<!-- ... -->`.
    WithinComment = 6,
    /// Reading a start tag name.
    ExpectingElementName = 7,
    /// Between attributes of a start tag, or reading an attribute name.
    ExpectingAttributeName = 8,
    /// After `=`, reading a quoted or unquoted attribute value.
    ExpectingAttributeValue = 9,
    /// Reading an end tag name, or the `>` of a self-closing tag.
    ExpectingElementClose = 10,
}

impl ParserState {
    /// Numeric code of the state.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// True while the machine is between markup constructs.
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Uninitialised)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_codes_are_dense_and_unique() {
        let codes: HashSet<u8> = ParserState::iter().map(ParserState::code).collect();
        assert_eq!(codes.len(), 11);
        assert_eq!(codes.iter().max(), Some(&10));
        assert_eq!(ParserState::Uninitialised.code(), 0);
        assert_eq!(ParserState::ExpectingElementClose.code(), 10);
    }

    #[test]
    fn test_display_uses_variant_name() {
        assert_eq!(ParserState::WithinXmlInstruction.to_string(), "WithinXmlInstruction");
        assert_eq!(ParserState::ExpectingTag.to_string(), "ExpectingTag");
    }
}
