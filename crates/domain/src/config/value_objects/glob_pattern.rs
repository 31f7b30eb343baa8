use std::fmt;

use ftp_monitor_shared_kernel::{DomainError, DomainResult};
use globset::{Glob, GlobMatcher};

/// What a pattern is tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchScope {
    /// Only the final path segment, e.g. `*.txt`.
    Name,
    /// The whole `/`-separated relative path, e.g. `reports/**/*.csv`.
    Path,
}

/// Wrapper around a compiled `globset` matcher that remembers its source text.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    original: String,
    scope: MatchScope,
    matcher: GlobMatcher,
}

impl GlobPattern {
    pub fn new(pattern: &str) -> DomainResult<Self> {
        let normalized = pattern.trim().replace('\\', "/");
        let glob = Glob::new(&normalized).map_err(|err| DomainError::InvalidPattern {
            pattern: pattern.to_string(),
            details: err.to_string(),
            source: Some(Box::new(err)),
        })?;
        let scope = if normalized.contains('/') || normalized.contains("**") {
            MatchScope::Path
        } else {
            MatchScope::Name
        };
        Ok(Self { original: normalized, scope, matcher: glob.compile_matcher() })
    }

    /// Tests a relative path; name-scoped patterns only see its last segment.
    pub fn matches(&self, relative_path: &str) -> bool {
        match self.scope {
            MatchScope::Name => {
                let name = relative_path.rsplit('/').next().unwrap_or(relative_path);
                self.matcher.is_match(name)
            }
            MatchScope::Path => self.matcher.is_match(relative_path),
        }
    }

    pub fn scope(&self) -> MatchScope {
        self.scope
    }

    pub fn pattern(&self) -> &str {
        &self.original
    }
}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}
