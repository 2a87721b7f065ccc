//! The character-driven tree builder.
//!
//! [`Parser`] walks the input one character at a time. Every character is
//! dispatched to the handler for the current [`ParserState`], which may
//! buffer it, emit a node under the cursor, move the cursor into a new
//! element, or walk the cursor back up on a closing tag.

/// Parser struct, main loop and public entry points.
pub mod core;
/// The fatal error and the recorded recoveries.
pub mod error;
/// Buffer, cursor and attribute helpers shared by the transitions.
mod helpers;
/// The state enum.
pub mod state;
/// One handler per state.
mod transitions;

pub use self::core::{ParsedDocument, Parser, parse_document};
pub use error::{ParseError, ParseIssue};
pub use state::ParserState;
