use ftp_monitor_shared_kernel::DomainResult;

use super::GlobPattern;

/// Whitelist/blacklist rules deciding which files are uploaded.
///
/// An empty whitelist admits every file. The blacklist is checked
/// unconditionally and wins over a whitelist match.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    whitelist: Vec<GlobPattern>,
    blacklist: Vec<GlobPattern>,
}

impl RuleSet {
    /// Compiles both lists. Blank entries are dropped rather than treated as
    /// a pattern that matches nothing.
    pub fn new<S: AsRef<str>>(whitelist: &[S], blacklist: &[S]) -> DomainResult<Self> {
        Ok(Self { whitelist: compile(whitelist)?, blacklist: compile(blacklist)? })
    }

    /// Rules that accept every file.
    pub fn allow_all() -> Self {
        Self::default()
    }

    pub fn qualifies(&self, relative_path: &str) -> bool {
        if !self.whitelist.is_empty() && !self.whitelist.iter().any(|p| p.matches(relative_path)) {
            return false;
        }

        !self.blacklist.iter().any(|p| p.matches(relative_path))
    }

    pub fn whitelist(&self) -> &[GlobPattern] {
        &self.whitelist
    }

    pub fn blacklist(&self) -> &[GlobPattern] {
        &self.blacklist
    }
}

fn compile<S: AsRef<str>>(patterns: &[S]) -> DomainResult<Vec<GlobPattern>> {
    patterns
        .iter()
        .map(AsRef::as_ref)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(GlobPattern::new)
        .collect()
}
