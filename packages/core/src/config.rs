//! Reader configuration.

/// What to do with text after the last top-level `.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingPolicy {
    /// Drop it and log a warning. Default.
    #[default]
    Discard,
    /// Fail construction with [`ReadError::UnterminatedStatement`](crate::ReadError::UnterminatedStatement).
    Reject,
}

/// Formats the policy as its lowercase name (e.g. `"discard"`).
impl std::fmt::Display for TrailingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrailingPolicy::Discard => write!(f, "discard"),
            TrailingPolicy::Reject => write!(f, "reject"),
        }
    }
}

/// Parses a [`TrailingPolicy`] from its lowercase name.
impl std::str::FromStr for TrailingPolicy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "discard" => Ok(TrailingPolicy::Discard),
            "reject" => Ok(TrailingPolicy::Reject),
            _ => Err(format!(
                "unknown trailing policy {:?}; expected one of: discard, reject",
                s
            )),
        }
    }
}

/// Options for [`TurtleReader::with_config`](crate::TurtleReader::with_config).
///
/// | Field | Default | Effect |
/// |-------|---------|--------|
/// | `trailing` | `Discard` | Handling of an unterminated final statement |
/// | `comments` | `true` | Skip `#` line comments outside blocks |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    pub trailing: TrailingPolicy,
    pub comments: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            trailing: TrailingPolicy::Discard,
            comments: true,
        }
    }
}

impl ReaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trailing(mut self, policy: TrailingPolicy) -> Self {
        self.trailing = policy;
        self
    }

    pub fn comments(mut self, enabled: bool) -> Self {
        self.comments = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = ReaderConfig::new();
        assert_eq!(c.trailing, TrailingPolicy::Discard);
        assert!(c.comments);
    }

    #[test]
    fn builder_setters() {
        let c = ReaderConfig::new().trailing(TrailingPolicy::Reject).comments(false);
        assert_eq!(c.trailing, TrailingPolicy::Reject);
        assert!(!c.comments);
    }

    #[test]
    fn policy_parse_and_display() {
        for p in [TrailingPolicy::Discard, TrailingPolicy::Reject] {
            assert_eq!(p.to_string().parse::<TrailingPolicy>(), Ok(p));
        }
        assert!("strict".parse::<TrailingPolicy>().is_err());
    }
}
