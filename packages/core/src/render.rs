//! Renderers that turn a triple sequence into other representations.
//!
//! Renderers see only `&[Triple]`. They do not know whether the fields were
//! qualified, so every field is escaped and emitted as an opaque string.

use crate::types::Triple;

/// Output representations, resolved once from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Graphviz `digraph`.
    Dot,
    /// Prolog-style `triple/3` clauses.
    Facts,
    /// JSON array of `{subject, predicate, object}` objects.
    Json,
}

impl OutputFormat {
    /// Render `triples` in this format.
    pub fn render(self, triples: &[Triple]) -> Result<String, serde_json::Error> {
        match self {
            OutputFormat::Dot => Ok(render_dot(triples)),
            OutputFormat::Facts => Ok(render_facts(triples)),
            OutputFormat::Json => render_json(triples),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Dot => write!(f, "dot"),
            OutputFormat::Facts => write!(f, "facts"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dot" => Ok(OutputFormat::Dot),
            "facts" => Ok(OutputFormat::Facts),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "unknown output format {:?}; expected one of: dot, facts, json",
                s
            )),
        }
    }
}

/// Render triples as a Graphviz directed graph.
///
/// ```text
/// digraph triples {
///   "http://example.org/a" -> "http://example.org/c" [label="http://example.org/b"];
/// }
/// ```
pub fn render_dot(triples: &[Triple]) -> String {
    let mut out = String::from("digraph triples {\n");
    for t in triples {
        out.push_str(&format!(
            "  \"{}\" -> \"{}\" [label=\"{}\"];\n",
            dot_escape(&t.subject),
            dot_escape(&t.object),
            dot_escape(&t.predicate)
        ));
    }
    out.push_str("}\n");
    out
}

/// Render triples as one `triple/3` clause per line.
///
/// ```text
/// triple('http://example.org/a', 'http://example.org/b', 'it''s').
/// ```
pub fn render_facts(triples: &[Triple]) -> String {
    triples
        .iter()
        .map(|t| {
            format!(
                "triple({}, {}, {}).\n",
                atom(&t.subject),
                atom(&t.predicate),
                atom(&t.object)
            )
        })
        .collect()
}

/// Render triples as a pretty-printed JSON array.
pub fn render_json(triples: &[Triple]) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(triples)?;
    out.push('\n');
    Ok(out)
}

// --- helpers -----------------------------------------------------------------

fn dot_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}

/// Quote `s` as a Prolog atom: `'` doubled, `\` escaped.
fn atom(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\'' => out.push_str("''"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

// --- tests -------------------------------------------------------------------
