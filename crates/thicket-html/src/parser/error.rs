use thiserror::Error;

use super::ParserState;

/// The single fatal error. Any construct the parser cannot make sense of
/// aborts the whole parse with this; everything else is recovered silently
/// and, at most, recorded as a [`ParseIssue`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character that no transition of the current state accepts.
    #[error(
        "unexpected token at line {line}, column {column}: {character:?}; parser state was {state} ({code}){suffix}",
        code = .state.code(),
        suffix = detail_suffix(.detail)
    )]
    UnexpectedToken {
        /// 1-based line of the offending character.
        line: usize,
        /// 1-based column of the offending character.
        column: usize,
        /// The offending character.
        character: char,
        /// State the machine was in when it gave up.
        state: ParserState,
        /// Why the construct is rejected, for recognised-but-unsupported markup.
        detail: Option<&'static str>,
    },
}

impl ParseError {
    /// Line and column of the failure.
    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        match self {
            Self::UnexpectedToken { line, column, .. } => (*line, *column),
        }
    }

    /// State the machine was in when it gave up.
    #[must_use]
    pub const fn state(&self) -> ParserState {
        match self {
            Self::UnexpectedToken { state, .. } => *state,
        }
    }
}

#[allow(clippy::ref_option)]
fn detail_suffix(detail: &Option<&'static str>) -> String {
    detail.map(|d| format!(": {d}")).unwrap_or_default()
}

/// A malformed-input recovery the parser applied without failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// What was recovered from and how.
    pub message: String,
    /// 1-based line where the recovery happened.
    pub line: usize,
    /// 1-based column where the recovery happened.
    pub column: usize,
}
