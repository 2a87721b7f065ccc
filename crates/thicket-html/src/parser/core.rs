use thicket_dom::{DomTree, NodeId};

use super::{ParseError, ParseIssue, ParserState};

/// A lenient, single-pass markup parser.
///
/// The parser owns the tree it builds and a cursor (the current node) into
/// it. Text, comments and elements are appended under the cursor; start
/// tags move the cursor down, end tags and tag-omission rules move it back
/// up. Nothing is validated: the only hard failure is a character that no
/// transition accepts, reported as [`ParseError::UnexpectedToken`].
///
/// One instance parses one document. It is not meant to be shared between
/// threads while parsing, but independent instances can run in parallel.
#[derive(Debug)]
pub struct Parser {
    /// The tree under construction. `NodeId::ROOT` is the Document node.
    pub(super) tree: DomTree,
    /// Where new nodes are attached.
    pub(super) current_node: NodeId,
    /// Depth of `current_node` below the document. Diagnostics only.
    pub(super) depth: usize,
    /// Raw text of the last `<!DOCTYPE ...>` seen.
    pub(super) doctype: Option<String>,

    pub(super) state: ParserState,
    /// State in effect when the previous character was dispatched.
    pub(super) prev_state: ParserState,
    /// Text, names and values accumulate here until a transition commits them.
    pub(super) token_buffer: String,
    pub(super) current_char: Option<char>,
    pub(super) prev_char: Option<char>,

    /// Name captured at `=` (or at a quote that stands in for it).
    pub(super) current_attribute: String,
    /// Quote that opened the attribute value being read.
    pub(super) current_delimiter: Option<char>,

    /// `-` characters held back inside a comment until we know whether they
    /// end it.
    pub(super) pending_dashes: usize,
    /// Set while the dashes of `<!--` itself are being consumed.
    pub(super) comment_opening: bool,

    pub(super) line: usize,
    pub(super) column: usize,

    pub(super) issues: Vec<ParseIssue>,
    /// Echo recorded issues through the shared warning channel.
    pub(super) diagnostics: bool,
}

impl Parser {
    /// Create a parser with an empty document and no doctype.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tree: DomTree::new(),
            current_node: NodeId::ROOT,
            depth: 0,
            doctype: None,
            state: ParserState::Uninitialised,
            prev_state: ParserState::Uninitialised,
            token_buffer: String::new(),
            current_char: None,
            prev_char: None,
            current_attribute: String::new(),
            current_delimiter: None,
            pending_dashes: 0,
            comment_opening: false,
            line: 1,
            column: 0,
            issues: Vec::new(),
            diagnostics: false,
        }
    }

    /// Print each recovery once to stderr as it is recorded.
    ///
    /// Recoveries are always available from [`Parser::issues`]; this only
    /// controls whether they are also echoed.
    #[must_use]
    pub const fn with_diagnostics(mut self) -> Self {
        self.diagnostics = true;
        self
    }

    /// Parse `input` as a complete document and return its tree.
    ///
    /// Every character is processed exactly once, in order. Input that ends
    /// in the middle of a tag is not an error; whatever was built is kept.
    ///
    /// Each call starts over from an empty document. Nothing carries over
    /// from an earlier call, whether it finished or failed.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnexpectedToken`] for a character no transition
    /// of the current state accepts, including the start of an XML
    /// processing instruction or CDATA section. The parse stops at that
    /// character.
    pub fn parse(&mut self, input: &str) -> Result<&DomTree, ParseError> {
        self.reset();
        for c in input.chars() {
            self.prev_char = self.current_char.replace(c);
            self.advance_position(c);

            let dispatched_in = self.state;
            self.step(c)?;
            self.prev_state = dispatched_in;
        }
        self.finish();
        Ok(&self.tree)
    }

    /// Parse a byte buffer. Invalid UTF-8 is replaced, not detected around.
    ///
    /// # Errors
    ///
    /// Same as [`Parser::parse`].
    pub fn parse_bytes(&mut self, input: &[u8]) -> Result<&DomTree, ParseError> {
        let text = String::from_utf8_lossy(input);
        self.parse(&text)
    }

    /// Back to the state of a fresh parser, keeping configuration.
    fn reset(&mut self) {
        *self = Self {
            diagnostics: self.diagnostics,
            ..Self::new()
        };
    }

    fn advance_position(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }

    fn step(&mut self, c: char) -> Result<(), ParseError> {
        match self.state {
            ParserState::Uninitialised => self.handle_uninitialised(c),
            ParserState::ExpectingTag => self.handle_expecting_tag(c),
            ParserState::ExpectingBangQualifier => self.handle_bang_qualifier(c),
            ParserState::WithinDoctype => self.handle_doctype(c),
            ParserState::WithinXmlInstruction => {
                Err(self.unexpected(c, Some(super::transitions::XML_INSTRUCTION_UNSUPPORTED)))
            }
            ParserState::WithinCdata => {
                Err(self.unexpected(c, Some(super::transitions::CDATA_UNSUPPORTED)))
            }
            ParserState::WithinComment => self.handle_comment(c),
            ParserState::ExpectingElementName => self.handle_element_name(c),
            ParserState::ExpectingAttributeName => self.handle_attribute_name(c),
            ParserState::ExpectingAttributeValue => self.handle_attribute_value(c),
            ParserState::ExpectingElementClose => self.handle_element_close(c),
        }
    }

    /// End of input: keep trailing text, note anything left open.
    fn finish(&mut self) {
        if self.state.is_text() {
            self.flush_buffer();
        } else {
            self.record_issue(format!("input ended inside markup ({})", self.state));
        }
    }

    /// The doctype text, without `<!` and `>`, e.g. `DOCTYPE html`.
    #[must_use]
    pub fn doctype(&self) -> Option<&str> {
        self.doctype.as_deref()
    }

    /// The tree built so far.
    #[must_use]
    pub const fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Give up the parser and keep the tree.
    #[must_use]
    pub fn into_tree(self) -> DomTree {
        self.tree
    }

    /// Recoveries applied so far, in input order.
    #[must_use]
    pub fn issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// Current machine state.
    #[must_use]
    pub const fn state(&self) -> ParserState {
        self.state
    }

    /// Node new children are attached to.
    #[must_use]
    pub const fn current_node(&self) -> NodeId {
        self.current_node
    }

    /// Depth of the current node below the document.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Line and column of the last character processed.
    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything a finished parse produced.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// The tree, rooted at `NodeId::ROOT`.
    pub tree: DomTree,
    /// Raw doctype text, if the document had one.
    pub doctype: Option<String>,
    /// Recoveries applied while parsing.
    pub issues: Vec<ParseIssue>,
}

/// Parse a complete document with a fresh [`Parser`].
///
/// # Errors
///
/// Returns the parser's [`ParseError`] if the input hits a fatal transition.
pub fn parse_document(input: &str) -> Result<ParsedDocument, ParseError> {
    let mut parser = Parser::new();
    let _ = parser.parse(input)?;
    let doctype = parser.doctype.take();
    let issues = std::mem::take(&mut parser.issues);
    Ok(ParsedDocument {
        tree: parser.into_tree(),
        doctype,
        issues,
    })
}
