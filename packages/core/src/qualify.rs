//! Expansion of abbreviated identifiers into absolute URIs.

use std::collections::HashMap;

use regex::Regex;

use crate::prefix::PrefixRegistry;

/// Expands `label:suffix` identifiers against a snapshot of a registry.
///
/// Built once from a finished [`PrefixRegistry`]: every registered label goes
/// into a single anchored alternation, so one match decides whether an
/// identifier is abbreviated.
#[derive(Debug, Clone)]
pub struct Qualifier {
    pattern: Option<Regex>,
    bases: HashMap<String, String>,
}

impl Qualifier {
    /// Snapshot `registry` and compile its label pattern.
    pub fn new(registry: &PrefixRegistry) -> Result<Self, regex::Error> {
        let pattern = if registry.is_empty() {
            None
        } else {
            let alternation = registry
                .labels()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&format!("^({alternation}):"))?)
        };

        Ok(Self {
            pattern,
            bases: registry
                .iter()
                .map(|(label, base)| (label.to_string(), base.to_string()))
                .collect(),
        })
    }

    /// Expand one identifier.
    ///
    /// `label:suffix` with a registered label becomes `base` + `suffix`, the
    /// suffix copied verbatim. Anything else loses one enclosing `<` `>` pair
    /// if it has one and is otherwise returned as is.
    pub fn qualify(&self, ident: &str) -> String {
        let expanded = self.pattern.as_ref().and_then(|re| {
            let caps = re.captures(ident)?;
            let base = self.bases.get(&caps[1])?;
            let suffix = &ident[caps.get(0)?.end()..];
            Some(format!("{base}{suffix}"))
        });
        expanded.unwrap_or_else(|| strip_brackets(ident).to_string())
    }
}

/// Remove one enclosing `<` `>` pair.
pub fn strip_brackets(ident: &str) -> &str {
    ident
        .strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
        .unwrap_or(ident)
}

// --- tests -------------------------------------------------------------------
