//! Per-state transition handlers.
//!
//! Each handler receives the character just consumed. Handlers either
//! return `Ok(())` having buffered, emitted or switched state, or the one
//! fatal [`ParseError`].

use thicket_dom::AttributeValue;

use super::{ParseError, Parser, ParserState};
use crate::tags::closes_open_element;

pub(super) const XML_INSTRUCTION_UNSUPPORTED: &str =
    "XML processing instructions are not supported";
pub(super) const CDATA_UNSUPPORTED: &str = "CDATA sections are not supported";

const fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

const fn is_attribute_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

const fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\'')
}

impl Parser {
    pub(super) fn handle_uninitialised(&mut self, c: char) -> Result<(), ParseError> {
        if c == '<' {
            self.switch_to(ParserState::ExpectingTag);
        } else {
            self.buffer(c);
        }
        Ok(())
    }

    pub(super) fn handle_expecting_tag(&mut self, c: char) -> Result<(), ParseError> {
        match c {
            '!' => self.switch_to(ParserState::ExpectingBangQualifier),
            '?' => {
                self.switch_to(ParserState::WithinXmlInstruction);
                return Err(self.unexpected(c, Some(XML_INSTRUCTION_UNSUPPORTED)));
            }
            '/' => {
                self.flush_buffer();
                self.switch_to(ParserState::ExpectingElementClose);
            }
            c if is_name_char(c) => {
                self.flush_buffer();
                self.buffer(c);
                self.switch_to(ParserState::ExpectingElementName);
            }
            // "a < b": the '<' was never markup.
            c if c.is_whitespace() => {
                self.buffer(self.prev_char.unwrap_or('<'));
                self.buffer(c);
                self.record_issue("unescaped '<' kept as text".to_string());
                self.switch_to(ParserState::Uninitialised);
            }
            _ => return Err(self.unexpected(c, None)),
        }
        Ok(())
    }

    pub(super) fn handle_bang_qualifier(&mut self, c: char) -> Result<(), ParseError> {
        match c {
            'D' | 'd' => {
                self.flush_buffer();
                self.buffer(c);
                self.switch_to(ParserState::WithinDoctype);
            }
            '-' => {
                self.flush_buffer();
                // The '-' of "<!-" counts towards both the opener and a
                // possible immediate "-->".
                self.pending_dashes = 1;
                self.comment_opening = true;
                self.switch_to(ParserState::WithinComment);
            }
            '[' => {
                self.switch_to(ParserState::WithinCdata);
                return Err(self.unexpected(c, Some(CDATA_UNSUPPORTED)));
            }
            _ => return Err(self.unexpected(c, None)),
        }
        Ok(())
    }

    pub(super) fn handle_doctype(&mut self, c: char) -> Result<(), ParseError> {
        if c == '>' {
            self.doctype = Some(self.take_buffer());
            self.switch_to(ParserState::Uninitialised);
        } else {
            self.buffer(c);
        }
        Ok(())
    }

    /// Dashes are held back until the next character shows whether they
    /// close the comment. Two or more followed by `>` end it; anything else
    /// releases them into the text. The dashes of `<!--` are never text.
    pub(super) fn handle_comment(&mut self, c: char) -> Result<(), ParseError> {
        match c {
            '-' => self.pending_dashes += 1,
            '>' if self.pending_dashes >= 2 => {
                let kept = if self.comment_opening {
                    0
                } else {
                    self.pending_dashes - 2
                };
                self.flush_pending_dashes(kept);
                self.comment_opening = false;
                self.emit_comment();
                self.switch_to(ParserState::Uninitialised);
            }
            _ => {
                let kept = if self.comment_opening {
                    self.pending_dashes.saturating_sub(2)
                } else {
                    self.pending_dashes
                };
                self.flush_pending_dashes(kept);
                self.comment_opening = false;
                self.buffer(c);
            }
        }
        Ok(())
    }

    pub(super) fn handle_element_name(&mut self, c: char) -> Result<(), ParseError> {
        if is_name_char(c) {
            self.buffer(c);
            return Ok(());
        }

        let element_name = self.take_buffer();
        let closes_current = self
            .tree
            .tag_name(self.current_node)
            .is_some_and(|open| closes_open_element(&element_name, open));
        if closes_current {
            let _ = self.close_node(None);
        }
        let _ = self.open_element(element_name);

        match c {
            '>' => {
                self.close_if_void();
                self.switch_to(ParserState::Uninitialised);
            }
            '/' => self.switch_to(ParserState::ExpectingElementClose),
            c if c.is_whitespace() => self.switch_to(ParserState::ExpectingAttributeName),
            _ => return Err(self.unexpected(c, None)),
        }
        Ok(())
    }

    pub(super) fn handle_attribute_name(&mut self, c: char) -> Result<(), ParseError> {
        match c {
            '/' => {
                self.commit_boolean_attribute();
                self.switch_to(ParserState::ExpectingElementClose);
            }
            c if is_attribute_name_char(c) => {
                // `<input disabled value=...>`: a name followed by whitespace
                // and then another name was a boolean attribute.
                let after_whitespace = self.prev_char.is_some_and(char::is_whitespace);
                if after_whitespace && self.prev_state == ParserState::ExpectingAttributeName {
                    self.commit_boolean_attribute();
                }
                self.buffer(c);
            }
            c if c.is_whitespace() => {}
            '=' => {
                self.current_attribute = self.take_buffer();
                self.switch_to(ParserState::ExpectingAttributeValue);
            }
            c if is_quote(c) => {
                if self.token_buffer.is_empty() {
                    self.record_issue(format!("stray {c} in tag ignored"));
                } else {
                    // `name"value"`: the '=' is missing.
                    self.current_attribute = self.take_buffer();
                    self.current_delimiter = Some(c);
                    self.record_issue(format!("missing '=' before {c} after attribute name"));
                    self.switch_to(ParserState::ExpectingAttributeValue);
                }
            }
            '>' => {
                self.commit_boolean_attribute();
                self.close_if_void();
                self.switch_to(ParserState::Uninitialised);
            }
            _ => self.record_issue(format!("{c:?} ignored in attribute name")),
        }
        Ok(())
    }

    pub(super) fn handle_attribute_value(&mut self, c: char) -> Result<(), ParseError> {
        if let Some(delimiter) = self.current_delimiter {
            if c == delimiter {
                self.current_delimiter = None;
                if self.token_buffer.is_empty() {
                    self.current_attribute.clear();
                } else {
                    let value = self.take_buffer();
                    self.commit_attribute_value(AttributeValue::Text(value));
                }
                self.switch_to(ParserState::ExpectingAttributeName);
            } else {
                self.buffer(c);
            }
            return Ok(());
        }

        match c {
            '/' | '>' => {
                let value = if self.token_buffer.is_empty() {
                    AttributeValue::Present
                } else {
                    AttributeValue::Text(self.take_buffer())
                };
                self.commit_attribute_value(value);
                if c == '/' {
                    self.switch_to(ParserState::ExpectingElementClose);
                } else {
                    self.close_if_void();
                    self.switch_to(ParserState::Uninitialised);
                }
            }
            c if is_quote(c) => {
                if self.token_buffer.is_empty() {
                    self.current_delimiter = Some(c);
                } else {
                    // `name=value"`: the opening quote is missing.
                    let value = self.take_buffer();
                    self.commit_attribute_value(AttributeValue::Text(value));
                    self.record_issue(format!("unquoted value closed by {c}"));
                    self.switch_to(ParserState::ExpectingAttributeName);
                }
            }
            c if c.is_whitespace() => {
                if !self.token_buffer.is_empty() {
                    let value = self.take_buffer();
                    self.commit_attribute_value(AttributeValue::Text(value));
                    self.switch_to(ParserState::ExpectingAttributeName);
                }
            }
            _ => self.buffer(c),
        }
        Ok(())
    }

    pub(super) fn handle_element_close(&mut self, c: char) -> Result<(), ParseError> {
        match c {
            c if is_name_char(c) => self.buffer(c),
            '>' => {
                let name = self.take_buffer();
                let target = (!name.is_empty()).then_some(name.as_str());
                let _ = self.close_node(target);
                self.switch_to(ParserState::Uninitialised);
            }
            c if c.is_whitespace() => {}
            _ => return Err(self.unexpected(c, None)),
        }
        Ok(())
    }
}
