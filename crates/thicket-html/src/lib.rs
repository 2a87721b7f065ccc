//! Lenient HTML/XML tree builder for the thicket parser.
//!
//! # Scope
//!
//! This crate implements:
//! - **Parser** - a single-pass, character-driven state machine that builds
//!   a [`thicket_dom::DomTree`] of element, text and comment nodes and
//!   records the doctype
//! - **Tag tables** - void elements and end-tag omission rules used to
//!   close elements implicitly
//! - **Tree dump** - an indented text rendering for debugging
//!
//! # Not Supported
//!
//! - XML processing instructions and CDATA sections (fatal errors)
//! - Encoding detection, character references, streaming input
//! - Validation or spec-conformant tree construction

/// The state-machine parser.
pub mod parser;
/// Text rendering of a parsed tree.
pub mod print;
/// Void-element and tag-omission tables.
pub mod tags;

pub use parser::{ParseError, ParseIssue, ParsedDocument, Parser, ParserState, parse_document};
pub use print::{format_tree, print_tree};
