//! Reader for a Turtle-style triple format.
//!
//! Input is a sequence of `.`-terminated statements: `@prefix` declarations
//! and subject/predicate/object clauses with `;` and `,` chaining. The reader
//! splits statements, tokenizes them, registers prefixes, and extracts an
//! ordered list of [`Triple`]s. Identifiers can be expanded to absolute URIs
//! on request.
//!
//! The hard part is telling delimiters apart from content that looks like
//! one: a `.` inside `<http://example.org/>` or `"3.14"` is never a
//! terminator. Both the splitter and the tokenizer share one
//! [`scanner::BlockScanner`] for that.
//!
//! # Crate layout
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`scanner`] | Block-aware boundary detection |
//! | [`split`] | Lazy statement splitting over any [`std::io::Read`] |
//! | [`tokenize`] | Statement → tokens |
//! | [`prefix`] | `@prefix` parsing and the [`PrefixRegistry`] |
//! | [`extract`] | Tokens → [`Triple`]s |
//! | [`qualify`] | `label:suffix` → absolute URI |
//! | [`reader`] | [`TurtleReader`], the eager parse-then-query facade |
//! | [`config`] | [`ReaderConfig`] |
//! | [`render`] | Graphviz, Prolog-fact, and JSON output |
//!
//! # Quick start
//!
//! ```rust
//! use turtlefacts::{Triple, TurtleReader};
//!
//! let doc = "@prefix ex:<http://example.org/>.\nex:a ex:b ex:c .";
//! let reader = TurtleReader::parse_str(doc).unwrap();
//!
//! assert_eq!(reader.triples(false), vec![Triple::new("ex:a", "ex:b", "ex:c")]);
//! assert_eq!(
//!     reader.triples(true)[0].object,
//!     "http://example.org/c"
//! );
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod prefix;
pub mod qualify;
pub mod reader;
pub mod render;
pub mod scanner;
pub mod split;
pub mod tokenize;
pub mod types;

pub use config::{ReaderConfig, TrailingPolicy};
pub use error::ReadError;
pub use prefix::PrefixRegistry;
pub use qualify::Qualifier;
pub use reader::TurtleReader;
pub use render::OutputFormat;
pub use types::Triple;
