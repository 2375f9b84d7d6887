//! Statement splitting over a byte stream.
//!
//! [`Statements`] decodes UTF-8 from any [`Read`] and yields one statement
//! per top-level `.` terminator, terminator included. Outside blocks, runs of
//! whitespace (any Unicode whitespace) collapse to a single space and `#`
//! line comments are skipped; inside blocks every character is kept verbatim.

use std::io::{self, BufReader, Bytes, Read};

use crate::scanner::BlockScanner;

type DotBoundary = fn(char) -> bool;

fn is_terminator(c: char) -> bool {
    c == '.'
}

/// Lazy, forward-only iterator over the statements of a stream.
///
/// Each item is the trimmed statement text, or the I/O error that stopped the
/// scan. Invalid UTF-8 is reported as [`io::ErrorKind::InvalidData`]. After an
/// error the iterator is fused.
///
/// Text left over at end of stream (no final `.`) is not yielded; inspect it
/// with [`Statements::remainder`] once iteration has finished.
pub struct Statements<R> {
    bytes: Bytes<BufReader<R>>,
    scanner: BlockScanner<DotBoundary>,
    buf: String,
    pending_space: bool,
    in_comment: bool,
    comments: bool,
    remainder: Option<String>,
    done: bool,
}

impl<R: Read> Statements<R> {
    /// Split `input`, recognising `#` line comments.
    pub fn new(input: R) -> Self {
        Self::with_comments(input, true)
    }

    /// Split `input`; with `comments` off, `#` is ordinary content.
    pub fn with_comments(input: R, comments: bool) -> Self {
        Self {
            bytes: BufReader::new(input).bytes(),
            scanner: BlockScanner::new(is_terminator as DotBoundary),
            buf: String::new(),
            pending_space: false,
            in_comment: false,
            comments,
            remainder: None,
            done: false,
        }
    }

    /// The unterminated tail of the stream, if any.
    ///
    /// `None` until the iterator has returned `None`, and `None` afterwards
    /// when the input ended cleanly on a terminator.
    pub fn remainder(&self) -> Option<&str> {
        self.remainder.as_deref()
    }

    /// Feed one character. Returns a finished statement when `c` terminates one.
    fn push(&mut self, c: char) -> Option<String> {
        if self.in_comment {
            if c == '\n' || c == '\r' {
                self.in_comment = false;
                self.pending_space = true;
            }
            return None;
        }

        if !self.scanner.is_active() {
            if c.is_whitespace() {
                self.pending_space = true;
                return None;
            }
            if self.comments && c == '#' && (self.buf.is_empty() || self.pending_space) {
                self.in_comment = true;
                return None;
            }
        }

        if std::mem::take(&mut self.pending_space) && !self.buf.is_empty() {
            self.buf.push(' ');
        }

        let split = self.scanner.step(c);
        self.buf.push(c);
        split.then(|| std::mem::take(&mut self.buf).trim().to_string())
    }

    /// Decode the next character from the byte stream.
    fn next_char(&mut self) -> Option<io::Result<char>> {
        let first = match self.bytes.next()? {
            Ok(b) => b,
            Err(e) => return Some(Err(e)),
        };
        let width = utf8_width(first);
        if width == 0 {
            return Some(Err(invalid_utf8()));
        }

        let mut raw = [first, 0, 0, 0];
        for slot in &mut raw[1..width] {
            *slot = match self.bytes.next() {
                Some(Ok(b)) => b,
                Some(Err(e)) => return Some(Err(e)),
                None => return Some(Err(invalid_utf8())),
            };
        }

        Some(
            std::str::from_utf8(&raw[..width])
                .ok()
                .and_then(|s| s.chars().next())
                .ok_or_else(invalid_utf8),
        )
    }
}

impl<R: Read> Iterator for Statements<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        while let Some(decoded) = self.next_char() {
            let c = match decoded {
                Ok(c) => c,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };
            if let Some(stmt) = self.push(c) {
                return Some(Ok(stmt));
            }
        }

        self.done = true;
        let tail = std::mem::take(&mut self.buf);
        let tail = tail.trim();
        if !tail.is_empty() {
            self.remainder = Some(tail.to_string());
        }
        None
    }
}

/// Encoded length announced by a UTF-8 lead byte, or 0 if `b` cannot lead.
fn utf8_width(b: u8) -> usize {
    match b {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

fn invalid_utf8() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, "stream is not valid UTF-8")
}

// --- tests -------------------------------------------------------------------
