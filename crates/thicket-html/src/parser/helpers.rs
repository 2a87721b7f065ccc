//! Buffer, cursor and attribute helpers used by the state handlers.

use thicket_common::warning::warn_once;
use thicket_dom::{AttributeValue, ElementData, NodeType};

use super::{ParseError, ParseIssue, Parser, ParserState};
use crate::tags::is_void_element;

// =============================================================================
// State and buffer
// =============================================================================

impl Parser {
    pub(super) const fn switch_to(&mut self, new_state: ParserState) {
        self.state = new_state;
    }

    pub(super) fn buffer(&mut self, c: char) {
        self.token_buffer.push(c);
    }

    /// Take the buffer contents, leaving it empty.
    pub(super) fn take_buffer(&mut self) -> String {
        std::mem::take(&mut self.token_buffer)
    }

    /// Emit buffered text as a Text node under the cursor.
    ///
    /// An empty buffer emits nothing.
    pub(super) fn flush_buffer(&mut self) {
        if self.token_buffer.is_empty() {
            return;
        }
        let text = self.take_buffer();
        let _ = self.tree.append_child(self.current_node, NodeType::Text(text));
    }

    /// Emit buffered comment text, trimmed. Blank comments emit nothing.
    pub(super) fn emit_comment(&mut self) {
        let text = self.take_buffer();
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            let comment = NodeType::Comment(trimmed.to_string());
            let _ = self.tree.append_child(self.current_node, comment);
        }
    }

    /// Write held-back comment dashes into the buffer.
    pub(super) fn flush_pending_dashes(&mut self, count: usize) {
        self.token_buffer.extend(std::iter::repeat_n('-', count));
        self.pending_dashes = 0;
    }
}

// =============================================================================
// Tree cursor
// =============================================================================

impl Parser {
    /// Append an element under the cursor and move the cursor into it.
    ///
    /// An empty name opens nothing and leaves the cursor where it is.
    pub(super) fn open_element(&mut self, tag_name: String) -> bool {
        let Some(data) = ElementData::new(tag_name) else {
            self.record_issue("element with empty name ignored".to_string());
            return false;
        };
        self.current_node = self
            .tree
            .append_child(self.current_node, NodeType::Element(data));
        self.depth += 1;
        true
    }

    /// Close the nearest open element named `closing_tag_name`.
    ///
    /// With no name, the current element closes itself (self-closing tags,
    /// void elements, omitted end tags). The walk goes from the cursor
    /// towards the root comparing names exactly; on a match the cursor moves
    /// to that element's parent. With no match the cursor stays put and the
    /// end tag is ignored.
    pub(super) fn close_node(&mut self, closing_tag_name: Option<&str>) -> bool {
        let target = match closing_tag_name {
            Some(name) => name.to_string(),
            None => match self.tree.tag_name(self.current_node) {
                Some(name) => name.to_string(),
                None => {
                    self.record_issue("self-closing tag with no open element".to_string());
                    return false;
                }
            },
        };

        let mut node = self.current_node;
        let mut depth = self.depth;
        while let Some(parent) = self.tree.parent(node) {
            if self.tree.tag_name(node) == Some(target.as_str()) {
                self.current_node = parent;
                self.depth = depth.saturating_sub(1);
                return true;
            }
            node = parent;
            depth = depth.saturating_sub(1);
        }

        self.record_issue(format!("unmatched end tag </{target}> ignored"));
        false
    }

    /// Walk out of the current element if it is a void element.
    pub(super) fn close_if_void(&mut self) {
        let is_void = self
            .tree
            .tag_name(self.current_node)
            .is_some_and(is_void_element);
        if is_void {
            let _ = self.close_node(None);
        }
    }
}

// =============================================================================
// Attributes
// =============================================================================

impl Parser {
    /// Assign an attribute on the current element. Last assignment wins.
    pub(super) fn set_attribute(&mut self, name: String, value: AttributeValue) {
        let Some(element) = self.tree.as_element_mut(self.current_node) else {
            return;
        };
        let tag = element.tag_name.clone();
        if element.set_attribute(name.clone(), value).is_some() {
            self.record_issue(format!("duplicate attribute {name:?} on <{tag}> overwritten"));
        }
    }

    /// Commit a non-empty buffer as a presence-only attribute.
    pub(super) fn commit_boolean_attribute(&mut self) {
        if !self.token_buffer.is_empty() {
            let name = self.take_buffer();
            self.set_attribute(name, AttributeValue::Present);
        }
    }

    /// Commit the buffer as the value of the pending attribute name.
    pub(super) fn commit_attribute_value(&mut self, value: AttributeValue) {
        let name = std::mem::take(&mut self.current_attribute);
        self.set_attribute(name, value);
    }
}

// =============================================================================
// Errors and recoveries
// =============================================================================

impl Parser {
    /// Build the fatal error for `c` at the current position and state.
    pub(super) const fn unexpected(&self, c: char, detail: Option<&'static str>) -> ParseError {
        ParseError::UnexpectedToken {
            line: self.line,
            column: self.column,
            character: c,
            state: self.state,
            detail,
        }
    }

    /// Note a recovery at the current position.
    pub(super) fn record_issue(&mut self, message: String) {
        if self.diagnostics {
            let _ = warn_once("HTML", &message);
        }
        self.issues.push(ParseIssue {
            message,
            line: self.line,
            column: self.column,
        });
    }
}
