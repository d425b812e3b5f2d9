// src/readers/linereader.rs

//! Implements a [`LineReader`],
//! the cursor that drives parsing of a [`LogLines`].
//!
//! [`LogLines`]: crate::data::line::LogLines

use crate::common::{Count, FPath, LineIndex, ParseError, ResultParse};
use crate::data::line::LogLines;

use std::fmt;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LineReader
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A cursor over the lines of a [`LogLines`].
///
/// Parsing a transcript is a series of "seek to a marker, then read a fixed
/// structure" steps. A `LineReader` holds the current [`LineIndex`] for those
/// steps. The underlying `LogLines` are never modified, so any number of
/// `LineReader` may read the same `LogLines`.
///
/// _XXX: not a rust "Reader"; does not implement trait [`Read`]._
///
/// [`LogLines`]: crate::data::line::LogLines
/// [`LineIndex`]: crate::common::LineIndex
/// [`Read`]: std::io::Read
pub struct LineReader<'a> {
    loglines: &'a LogLines,
    /// the next line to be read
    index: LineIndex,
    /// Internal stats - `Count` of calls to `read_line` that returned a line.
    pub(super) lines_read: Count,
    /// Internal stats - `Count` of lines tested by `skip_to`.
    pub(super) lines_scanned: Count,
    /// Internal stats - `Count` of calls to `reset`.
    pub(super) resets: Count,
}

impl fmt::Debug for LineReader<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("LineReader")
            .field("path", self.loglines.path())
            .field("index", &self.index)
            .field("len", &self.loglines.len())
            .finish()
    }
}

/// Statistics of one [`LineReader`], for CLI option `--summary`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SummaryLineReader {
    /// `Count` of lines in the transcript
    pub linereader_lines: Count,
    /// `Count` of lines returned by `read_line`
    pub linereader_lines_read: Count,
    /// `Count` of lines tested while seeking markers
    pub linereader_lines_scanned: Count,
    /// `Count` of cursor resets
    pub linereader_resets: Count,
}

impl<'a> LineReader<'a> {
    /// Create a new `LineReader` positioned at the first line.
    pub fn new(loglines: &'a LogLines) -> LineReader<'a> {
        defñ!("LineReader::new({:?})", loglines);

        LineReader {
            loglines,
            index: 0,
            lines_read: 0,
            lines_scanned: 0,
            resets: 0,
        }
    }

    /// See [`LogLines::path`].
    ///
    /// [`LogLines::path`]: crate::data::line::LogLines#method.path
    #[inline(always)]
    pub fn path(&self) -> &FPath {
        self.loglines.path()
    }

    /// Count of lines in the underlying `LogLines`.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.loglines.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.loglines.is_empty()
    }

    /// Index of the next line `read_line` would return.
    #[inline(always)]
    pub const fn position(&self) -> LineIndex {
        self.index
    }

    /// Move the cursor to line `to`.
    pub fn reset(
        &mut self,
        to: LineIndex,
    ) {
        defñ!("({})", to);
        self.resets += 1;
        self.index = to;
    }

    /// Advance the cursor until the current line contains `marker`.
    /// The current line is tested first.
    ///
    /// Returns the index of the matching line; the cursor is left on that
    /// line. If no remaining line matches then the cursor is not moved and
    /// [`ParseError::MarkerNotFound`] is returned.
    pub fn skip_to(
        &mut self,
        marker: &str,
    ) -> ResultParse<LineIndex> {
        defn!("({:?}) from {}", marker, self.index);
        let mut at: LineIndex = self.index;
        while let Some(line) = self.loglines.get(at) {
            self.lines_scanned += 1;
            if line.contains(marker) {
                self.index = at;
                defx!("found at {}", at);
                return Ok(at);
            }
            at += 1;
        }
        defx!("not found");

        Err(ParseError::MarkerNotFound {
            marker: String::from(marker),
            from: self.index,
        })
    }

    /// Advance the cursor `count` lines without reading them.
    ///
    /// The cursor may move past the last line; the following `read_line`
    /// then fails.
    pub fn skip_lines(
        &mut self,
        count: usize,
    ) {
        defñ!("({}) from {}", count, self.index);
        self.index = self.index.saturating_add(count);
    }

    /// Return the current line and advance the cursor by one.
    pub fn read_line(&mut self) -> ResultParse<&'a str> {
        let loglines: &'a LogLines = self.loglines;
        match loglines.get(self.index) {
            Some(line) => {
                defñ!("{}: {:?}", self.index, line);
                self.index += 1;
                self.lines_read += 1;

                Ok(line)
            }
            None => {
                defñ!("{}: past end", self.index);

                Err(ParseError::UnexpectedEof { at: self.index })
            }
        }
    }

    /// Return a `SummaryLineReader` of this `LineReader`.
    pub fn summary(&self) -> SummaryLineReader {
        SummaryLineReader {
            linereader_lines: self.loglines.len() as Count,
            linereader_lines_read: self.lines_read,
            linereader_lines_scanned: self.lines_scanned,
            linereader_resets: self.resets,
        }
    }
}
