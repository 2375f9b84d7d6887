//! Block-aware scanning shared by the statement splitter and the tokenizer.
//!
//! A *block* is a delimited span (`<...>` or `"..."`) whose contents are
//! opaque: a `.` or whitespace inside it is content, never a separator. The
//! [`BlockScanner`] tracks whether the current position is inside a block and
//! answers, character by character, whether that character may act as a
//! boundary.

/// Opening character of each block kind paired with the one that closes it.
pub const BLOCK_DELIMITERS: [(char, char); 2] = [('<', '>'), ('"', '"')];

/// Tracks open blocks and classifies split points for one scan.
///
/// `F` decides which characters are boundaries when no block is open. The
/// splitter passes `|c| c == '.'`; the tokenizer adds whitespace.
#[derive(Debug, Clone)]
pub struct BlockScanner<F> {
    boundary: F,
    closer: Option<char>,
}

impl<F: Fn(char) -> bool> BlockScanner<F> {
    /// A scanner in the inactive state.
    pub fn new(boundary: F) -> Self {
        Self {
            boundary,
            closer: None,
        }
    }

    /// `true` while a block opened earlier has not been closed yet.
    pub fn is_active(&self) -> bool {
        self.closer.is_some()
    }

    /// Advance over `c` and report whether it is a split point.
    ///
    /// Inside a block only the active closer is significant: it ends the
    /// block and is itself content. Outside, an opener starts a block and any
    /// other character is a split point exactly when the boundary predicate
    /// says so.
    pub fn step(&mut self, c: char) -> bool {
        match self.closer {
            Some(closer) => {
                if c == closer {
                    self.closer = None;
                }
                false
            }
            None => match closer_for(c) {
                Some(closer) => {
                    self.closer = Some(closer);
                    false
                }
                None => (self.boundary)(c),
            },
        }
    }

    /// Forget any open block.
    pub fn reset(&mut self) {
        self.closer = None;
    }
}

fn closer_for(c: char) -> Option<char> {
    BLOCK_DELIMITERS
        .iter()
        .find(|(open, _)| *open == c)
        .map(|(_, close)| *close)
}

// --- tests -------------------------------------------------------------------
