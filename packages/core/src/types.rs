//! Core data types produced by the reader.
//!
//! A [`Triple`] is the only value that outlives parsing. Its fields are plain
//! strings: an absolute URI, quoted literal text, or an abbreviated
//! `label:suffix` token, depending on whether qualification was requested.

use serde::{Deserialize, Serialize};

/// One subject/predicate/object statement.
///
/// Triples are compared structurally and never mutated once built.
/// Serialises as `{ "subject": ..., "predicate": ..., "object": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Triple {
    /// The node the statement is about.
    pub subject: String,
    /// The relationship from subject to object.
    pub predicate: String,
    /// The value: another node or a quoted literal.
    pub object: String,
}

impl Triple {
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// Apply `f` to every field, producing a new triple.
    pub fn map(&self, mut f: impl FnMut(&str) -> String) -> Self {
        Self {
            subject: f(&self.subject),
            predicate: f(&self.predicate),
            object: f(&self.object),
        }
    }
}

/// Formats the triple as `subject predicate object .` on one line.
impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}
