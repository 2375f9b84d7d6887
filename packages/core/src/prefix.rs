//! `@prefix` declarations and the label → base-URI registry.

use std::collections::HashMap;

use crate::error::ReadError;

/// Keyword that opens a prefix declaration.
pub const PREFIX_KEYWORD: &str = "@prefix";

/// Label → base-URI bindings, in declaration order.
///
/// Append-only: a label can be bound once. The reader hands out only shared
/// references, so a finished registry is read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixRegistry {
    bases: HashMap<String, String>,
    order: Vec<String>,
}

impl PrefixRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `label` to `base`.
    ///
    /// Rebinding an existing label fails with [`ReadError::DuplicatePrefix`]
    /// and leaves the registry unchanged.
    pub fn register(
        &mut self,
        label: impl Into<String>,
        base: impl Into<String>,
    ) -> Result<(), ReadError> {
        let label = label.into();
        if self.bases.contains_key(&label) {
            return Err(ReadError::DuplicatePrefix { label });
        }
        self.order.push(label.clone());
        self.bases.insert(label, base.into());
        Ok(())
    }

    /// Parse an `@prefix` statement and register its binding.
    ///
    /// Returns the label that was bound.
    pub fn register_statement(&mut self, statement: &str) -> Result<&str, ReadError> {
        let (label, base) = parse_prefix(statement)?;
        tracing::debug!(label, base, "registering prefix");
        self.register(label, base)?;
        Ok(self.order.last().map(String::as_str).unwrap_or_default())
    }

    /// The base URI bound to `label`.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.bases.get(label).map(String::as_str)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.bases.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// `(label, base)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order
            .iter()
            .map(|label| (label.as_str(), self.bases[label].as_str()))
    }

    /// Registered labels in declaration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

/// `true` if `statement` is a prefix declaration.
pub fn is_prefix_statement(statement: &str) -> bool {
    statement.starts_with(PREFIX_KEYWORD)
}

/// Extract `(label, base)` from `@prefix LABEL: <URI> .`.
///
/// The label is one or more word characters (alphanumerics or `_`) followed
/// by `:`. The base is everything between `<` and the next `>`, which must be
/// followed by the `.` terminator. Whitespace is allowed between the parts.
pub fn parse_prefix(statement: &str) -> Result<(&str, &str), ReadError> {
    let malformed = || ReadError::Format {
        statement: statement.to_string(),
    };

    let rest = statement
        .strip_prefix(PREFIX_KEYWORD)
        .filter(|rest| rest.starts_with(char::is_whitespace))
        .ok_or_else(malformed)?
        .trim_start();

    let label_end = rest.find(|c: char| !is_word_char(c)).unwrap_or(rest.len());
    let (label, rest) = rest.split_at(label_end);
    if label.is_empty() {
        return Err(malformed());
    }

    let rest = rest
        .strip_prefix(':')
        .map(str::trim_start)
        .and_then(|rest| rest.strip_prefix('<'))
        .ok_or_else(malformed)?;
    let close = rest.find('>').ok_or_else(malformed)?;
    let (base, tail) = (&rest[..close], &rest[close + 1..]);

    if tail.trim_start() != "." {
        return Err(malformed());
    }
    Ok((label, base))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

// --- tests -------------------------------------------------------------------
