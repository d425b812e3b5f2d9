// src/common.rs
//
// common imports, type aliases, and other globals (avoids circular imports)

use std::fmt;

use ::kinded::Kinded;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// file-handling, command-line parsing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `F`ake `Path` or `F`ile `Path`
pub type FPath = String;

/// user-passed signifier that the transcript is read from STDIN
pub const PATH_STDIN: &str = "-";

/// general counting type
pub type Count = u64;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// transcript data
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Index of a line within a transcript, zero-based.
pub type LineIndex = usize;

/// HSM user id as listed by `listUsers`, one-based.
///
/// Signed so the "unknown owner" sentinel may be `-1`.
pub type UserId = i64;

/// HSM key handle. Kept as the text found in the transcript.
pub type KeyId = String;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// parse errors
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A format violation found while parsing a transcript.
///
/// Any `ParseError` is fatal for the whole run; an audit report is never
/// built from a partially parsed transcript.
///
/// Each variant records the [`LineIndex`] where the violation was noticed.
/// Use [`Kinded::kind`] to compare the variant without its data.
#[derive(Clone, Debug, Eq, PartialEq, Kinded)]
pub enum ParseError {
    /// No line at or after `from` contains `marker`.
    MarkerNotFound {
        marker: String,
        from: LineIndex,
    },
    /// Attempted to read a line at or past the end of the transcript.
    UnexpectedEof {
        at: LineIndex,
    },
    /// A declared count (users or keys) is not an integer.
    BadCount {
        line: String,
        at: LineIndex,
    },
    /// A user listing line has fewer than three columns.
    BadUserRecord {
        line: String,
        at: LineIndex,
    },
    /// The user listing is not in ascending, gapless id order.
    UserIdMismatch {
        expected: UserId,
        found: String,
        at: LineIndex,
    },
    /// The key list line does not have as many key records as declared.
    KeyCountMismatch {
        user_id: UserId,
        declared: Count,
        found: Count,
        at: LineIndex,
    },
}

impl ParseError {
    /// The line index where the violation was noticed.
    pub const fn line_index(&self) -> LineIndex {
        match self {
            ParseError::MarkerNotFound { from, .. } => *from,
            ParseError::UnexpectedEof { at }
            | ParseError::BadCount { at, .. }
            | ParseError::BadUserRecord { at, .. }
            | ParseError::UserIdMismatch { at, .. }
            | ParseError::KeyCountMismatch { at, .. } => *at,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // line numbers are printed one-based
        match self {
            ParseError::MarkerNotFound { marker, from } => {
                write!(f, "marker {:?} not found at or after line {}", marker, from + 1)
            }
            ParseError::UnexpectedEof { at } => {
                write!(f, "unexpected end of transcript reading line {}", at + 1)
            }
            ParseError::BadCount { line, at } => {
                write!(f, "unable to parse a count from line {} {:?}", at + 1, line)
            }
            ParseError::BadUserRecord { line, at } => {
                write!(f, "user record at line {} has fewer than 3 columns {:?}", at + 1, line)
            }
            ParseError::UserIdMismatch { expected, found, at } => {
                write!(f, "expected user id {} at line {}, found {:?}", expected, at + 1, found)
            }
            ParseError::KeyCountMismatch { user_id, declared, found, at } => {
                write!(
                    f,
                    "user {} declared {} keys but the key list at line {} has {}",
                    user_id,
                    declared,
                    at + 1,
                    found
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Result of the transcript parsing functions.
pub type ResultParse<T> = std::result::Result<T, ParseError>;
