//! The reader: parses a whole stream once, then answers queries.

use std::io::Read;

use crate::config::{ReaderConfig, TrailingPolicy};
use crate::error::ReadError;
use crate::extract::extract_triples;
use crate::prefix::{is_prefix_statement, PrefixRegistry};
use crate::qualify::Qualifier;
use crate::split::Statements;
use crate::tokenize::tokenize;
use crate::types::Triple;

/// A fully parsed document: its prefix table and its triples.
///
/// All input is consumed inside the constructor. Afterwards the reader is
/// immutable, so queries are pure reads and can be shared across threads.
#[derive(Debug, Clone)]
pub struct TurtleReader {
    prefixes: PrefixRegistry,
    triples: Vec<Triple>,
    qualifier: Qualifier,
}

impl TurtleReader {
    /// Parse `input` with the default [`ReaderConfig`].
    pub fn from_reader(input: impl Read) -> Result<Self, ReadError> {
        Self::with_config(input, &ReaderConfig::default())
    }

    /// Parse a document held in memory.
    pub fn parse_str(input: &str) -> Result<Self, ReadError> {
        Self::from_reader(input.as_bytes())
    }

    /// Parse `input`, stopping at the first I/O, prefix, or policy error.
    ///
    /// Statements are handled in source order. Qualification runs later,
    /// against the finished prefix table, so a prefix declared after a
    /// statement still expands that statement's identifiers.
    pub fn with_config(input: impl Read, config: &ReaderConfig) -> Result<Self, ReadError> {
        let mut prefixes = PrefixRegistry::new();
        let mut triples = Vec::new();
        let mut statements = Statements::with_comments(input, config.comments);
        let mut count = 0usize;

        for statement in statements.by_ref() {
            let statement = statement?;
            count += 1;
            if is_prefix_statement(&statement) {
                prefixes.register_statement(&statement)?;
            } else {
                let found = extract_triples(&tokenize(&statement));
                tracing::debug!(statement = %statement, triples = found.len(), "statement");
                triples.extend(found);
            }
        }

        if let Some(rest) = statements.remainder() {
            match config.trailing {
                TrailingPolicy::Discard => {
                    tracing::warn!(statement = %rest, "discarding unterminated statement");
                }
                TrailingPolicy::Reject => {
                    return Err(ReadError::UnterminatedStatement {
                        statement: rest.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            statements = count,
            prefixes = prefixes.len(),
            triples = triples.len(),
            "parsed input"
        );

        let qualifier = Qualifier::new(&prefixes)?;
        Ok(Self {
            prefixes,
            triples,
            qualifier,
        })
    }

    /// Every triple in source order.
    ///
    /// With `qualified`, each field is expanded through the prefix table (or
    /// stripped of its angle brackets); otherwise fields are returned exactly
    /// as written. Repeated calls return identical sequences.
    pub fn triples(&self, qualified: bool) -> Vec<Triple> {
        if qualified {
            self.triples
                .iter()
                .map(|t| t.map(|field| self.qualifier.qualify(field)))
                .collect()
        } else {
            self.triples.clone()
        }
    }

    /// Triples as written, without copying.
    pub fn raw_triples(&self) -> &[Triple] {
        &self.triples
    }

    /// The prefix table built while parsing.
    pub fn prefixes(&self) -> &PrefixRegistry {
        &self.prefixes
    }

    /// Expand a single identifier against this document's prefixes.
    pub fn qualify(&self, ident: &str) -> String {
        self.qualifier.qualify(ident)
    }

    /// Number of triples.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "\
@prefix ex:<http://example.org/>.
ex:a ex:b ex:c .
<http://x/s> ex:p \"v\" .
";

    #[test]
    fn builds_registry_and_triples() {
        let r = TurtleReader::parse_str(DOC).unwrap();
        assert_eq!(r.prefixes().get("ex"), Some("http://example.org/"));
        assert_eq!(r.len(), 2);
        assert_eq!(r.raw_triples()[0], Triple::new("ex:a", "ex:b", "ex:c"));
    }

    #[test]
    fn qualified_query_expands_every_field() {
        let r = TurtleReader::parse_str(DOC).unwrap();
        assert_eq!(
            r.triples(true),
            vec![
                Triple::new(
                    "http://example.org/a",
                    "http://example.org/b",
                    "http://example.org/c"
                ),
                Triple::new("http://x/s", "http://example.org/p", "\"v\""),
            ]
        );
    }

    #[test]
    fn single_identifier_qualification() {
        let r = TurtleReader::parse_str(DOC).unwrap();
        assert_eq!(r.qualify("ex:z"), "http://example.org/z");
    }

    #[test]
    fn empty_input() {
        let r = TurtleReader::parse_str("").unwrap();
        assert!(r.is_empty());
        assert!(r.prefixes().is_empty());
        assert!(r.triples(true).is_empty());
    }

    #[test]
    fn trailing_statement_discarded_by_default() {
        let r = TurtleReader::parse_str("<a> <b> <c> . <d> <e> <f>").unwrap();
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn trailing_statement_rejected_when_configured() {
        let config = ReaderConfig::new().trailing(TrailingPolicy::Reject);
        let err = TurtleReader::with_config("<a> <b> <c> . <d> <e> <f>".as_bytes(), &config)
            .unwrap_err();
        assert!(matches!(
            err,
            ReadError::UnterminatedStatement { statement } if statement == "<d> <e> <f>"
        ));
    }

    #[test]
    fn whitespace_tail_is_not_a_statement() {
        let config = ReaderConfig::new().trailing(TrailingPolicy::Reject);
        assert!(TurtleReader::with_config("<a> <b> <c> .\n\n  ".as_bytes(), &config).is_ok());
    }

    #[test]
    fn malformed_prefix_aborts() {
        let err = TurtleReader::parse_str("@prefix ex http://x/ .\n<a> <b> <c> .").unwrap_err();
        assert!(matches!(err, ReadError::Format { .. }));
    }

    #[test]
    fn duplicate_prefix_aborts() {
        let err = TurtleReader::parse_str("@prefix ex:<http://x/>. @prefix ex:<http://y/>.")
            .unwrap_err();
        assert!(matches!(err, ReadError::DuplicatePrefix { label } if label == "ex"));
    }

    #[test]
    fn io_error_propagates() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disk on fire"))
            }
        }
        let err = TurtleReader::from_reader(Broken).unwrap_err();
        assert!(matches!(err, ReadError::Io(_)));
    }

    #[test]
    fn reader_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TurtleReader>();
    }
}
