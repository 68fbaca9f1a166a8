/// How the name pattern gates propagation onto a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Every node passes.
    Unrestricted,
    /// Only nodes whose name matches the pattern pass.
    IncludeMatching,
    /// Only nodes whose name does NOT match the pattern pass.
    ExcludeMatching,
}

/// Case-insensitive substring gate on node names.
///
/// One fixed pattern per generation request; independent of selection
/// membership and applied multiplicatively with it. The filter never prunes
/// recursion, it only withholds writes on the nodes it rejects.
#[derive(Debug, Clone)]
pub struct NameFilter {
    pub mode: FilterMode,
    pattern: String,
}

impl NameFilter {
    #[must_use]
    pub fn new(mode: FilterMode, pattern: &str) -> Self {
        Self {
            mode,
            pattern: pattern.to_ascii_lowercase(),
        }
    }

    #[must_use]
    pub fn unrestricted() -> Self {
        Self::new(FilterMode::Unrestricted, "")
    }

    #[must_use]
    pub fn include(pattern: &str) -> Self {
        Self::new(FilterMode::IncludeMatching, pattern)
    }

    #[must_use]
    pub fn exclude(pattern: &str) -> Self {
        Self::new(FilterMode::ExcludeMatching, pattern)
    }

    /// Whether propagation onto a node with this name is permitted.
    #[must_use]
    pub fn permits(&self, node_name: &str) -> bool {
        match self.mode {
            FilterMode::Unrestricted => true,
            FilterMode::IncludeMatching => self.matches(node_name),
            FilterMode::ExcludeMatching => !self.matches(node_name),
        }
    }

    fn matches(&self, node_name: &str) -> bool {
        node_name.to_ascii_lowercase().contains(&self.pattern)
    }
}
