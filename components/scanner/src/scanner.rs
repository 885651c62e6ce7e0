//! String scanner
//!
//! A [`Scanner`] walks an immutable string from left to right and hands out
//! fixed-width pieces of it. The cursor only moves on success; a failed call
//! leaves it where it was, so callers can probe alternatives without saving
//! and restoring state themselves.

use crate::error::{ScanError, ScanResult};

/// Cursor over an immutable string.
///
/// Widths are counted in characters, the cursor itself is a byte offset that
/// always sits on a character boundary within `[0, len]`.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    source: &'a str,
    position: usize,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `source`
    pub fn new(source: &'a str) -> Self {
        Scanner {
            source,
            position: 0,
        }
    }

    /// The string being scanned
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Current cursor position (byte offset)
    pub fn position(&self) -> usize {
        self.position
    }

    /// Length of the scanned string in bytes
    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Whether the scanned string is empty
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// The part of the string not consumed yet
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Whether every character has been consumed
    pub fn is_at_end(&self) -> bool {
        self.position == self.source.len()
    }

    /// Byte offset just past the next `count` characters, if there are that many.
    fn end_of(&self, count: usize) -> Option<usize> {
        if count == 0 {
            return Some(self.position);
        }
        self.remaining()
            .char_indices()
            .nth(count - 1)
            .map(|(offset, c)| self.position + offset + c.len_utf8())
    }

    /// Consume and return the next `count` characters.
    pub fn scan(&mut self, count: usize) -> ScanResult<&'a str> {
        let end = self.end_of(count).ok_or_else(|| ScanError::OutOfBounds {
            position: self.position,
            requested: count,
            remaining: self.remaining().chars().count(),
        })?;
        let slice = &self.source[self.position..end];
        self.position = end;
        Ok(slice)
    }

    /// Consume exactly `count` characters and read them as a base-10 integer.
    ///
    /// The window must be made of `count` ASCII digits, nothing else: no sign,
    /// no whitespace.
    pub fn scan_int(&mut self, count: usize) -> ScanResult<u32> {
        let start = self.position;
        let window = self.scan(count)?;
        let parsed = if !window.is_empty() && window.bytes().all(|b| b.is_ascii_digit()) {
            window.parse::<u32>().ok()
        } else {
            None
        };
        match parsed {
            Some(value) => Ok(value),
            None => {
                self.position = start;
                Err(ScanError::NotAnInteger {
                    position: start,
                    found: window.to_string(),
                })
            }
        }
    }

    /// Consume `expected`, which must appear verbatim at the cursor.
    ///
    /// Input shorter than `expected` is reported as `OutOfBounds`, like any
    /// other scan past the end.
    pub fn skip_string(&mut self, expected: &str) -> ScanResult<()> {
        let start = self.position;
        let window = self.scan(expected.chars().count())?;
        if window == expected {
            return Ok(());
        }
        self.position = start;
        Err(ScanError::SkipMismatch {
            position: start,
            expected: expected.to_string(),
            found: window.to_string(),
        })
    }

    /// Consume the first candidate that appears at the cursor and return its index.
    ///
    /// Candidates are tried in order and the first match wins, so a candidate
    /// that is a prefix of a later one shadows it. A candidate longer than the
    /// rest of the input simply does not match.
    pub fn scan_array<S: AsRef<str>>(&mut self, candidates: &[S]) -> ScanResult<usize> {
        let start = self.position;
        for (index, candidate) in candidates.iter().enumerate() {
            let candidate = candidate.as_ref();
            if let Ok(window) = self.scan(candidate.chars().count()) {
                if window == candidate {
                    return Ok(index);
                }
            }
            self.position = start;
        }
        Err(ScanError::NoArrayMatch { position: start })
    }
}
