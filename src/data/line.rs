// src/data/line.rs

//! Implements [`LogLines`], the immutable lines of one transcript.

use crate::common::{FPath, LineIndex, PATH_STDIN};

use std::fmt;
use std::io::{Read, Result};

use ::bstr::ByteSlice;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// A single line of text without the line terminator.
pub type Line = String;

/// Sequence of [`Line`].
pub type Lines = Vec<Line>;

/// All lines of one transcript, in file order.
///
/// Read once then never modified. Lines are decoded as UTF-8; invalid
/// sequences are replaced with `U+FFFD`. Line terminators `"\n"` and `"\r\n"`
/// are removed.
pub struct LogLines {
    /// path the lines were read from, `"-"` for STDIN
    path: FPath,
    lines: Lines,
}

impl fmt::Debug for LogLines {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("LogLines")
            .field("path", &self.path)
            .field("lines", &self.lines.len())
            .finish()
    }
}

impl LogLines {
    /// Split raw bytes into `LogLines`.
    pub fn from_bytes(
        path: FPath,
        data: &[u8],
    ) -> LogLines {
        defn!("({:?}, data len {})", path, data.len());
        let lines: Lines = data
            .lines()
            .map(|line| line.to_str_lossy().into_owned())
            .collect();
        defx!("return {} lines", lines.len());

        LogLines { path, lines }
    }

    /// Convenience wrapper of [`from_bytes`] for text already in memory.
    ///
    /// [`from_bytes`]: LogLines::from_bytes
    pub fn from_text(
        path: &str,
        text: &str,
    ) -> LogLines {
        LogLines::from_bytes(FPath::from(path), text.as_bytes())
    }

    /// Read all of `reader` into `LogLines`.
    pub fn from_reader<R: Read>(
        path: FPath,
        reader: &mut R,
    ) -> Result<LogLines> {
        let mut data: Vec<u8> = Vec::new();
        reader.read_to_end(&mut data)?;

        Ok(LogLines::from_bytes(path, &data))
    }

    /// Read the entire file at `path`. The file is closed before returning.
    ///
    /// Passing [`PATH_STDIN`] reads STDIN.
    ///
    /// [`PATH_STDIN`]: crate::common::PATH_STDIN
    pub fn from_path(path: &FPath) -> Result<LogLines> {
        defñ!("({:?})", path);
        if path.as_str() == PATH_STDIN {
            let stdin = std::io::stdin();
            let mut lock = stdin.lock();
            return LogLines::from_reader(path.clone(), &mut lock);
        }
        let data: Vec<u8> = std::fs::read(path)?;

        Ok(LogLines::from_bytes(path.clone(), &data))
    }

    pub fn path(&self) -> &FPath {
        &self.path
    }

    /// Count of lines.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line at `index`, if any.
    #[inline(always)]
    pub fn get(
        &self,
        index: LineIndex,
    ) -> Option<&str> {
        self.lines
            .get(index)
            .map(|line| line.as_str())
    }
}
