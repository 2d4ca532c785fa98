//! Indentation policy.

/// How one level of indentation is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndentationPolicy {
    use_tabs: bool,
    spaces_per_level: usize,
}

impl IndentationPolicy {
    /// Creates a policy from the raw editor settings.
    ///
    /// # Arguments
    /// * `use_tabs` - Indent with one tab per level
    /// * `spaces_per_level` - Spaces per level when not using tabs
    #[must_use]
    pub const fn new(use_tabs: bool, spaces_per_level: usize) -> Self {
        Self {
            use_tabs,
            spaces_per_level,
        }
    }

    /// One tab per level.
    #[must_use]
    pub const fn tabs() -> Self {
        Self::new(true, 0)
    }

    /// `count` spaces per level.
    #[must_use]
    pub const fn spaces(count: usize) -> Self {
        Self::new(false, count)
    }

    /// Returns true if levels are rendered with tabs.
    #[must_use]
    pub const fn use_tabs(&self) -> bool {
        self.use_tabs
    }

    /// Spaces per level; ignored when using tabs.
    #[must_use]
    pub const fn spaces_per_level(&self) -> usize {
        self.spaces_per_level
    }

    /// Returns the whitespace for a single level.
    #[must_use]
    pub fn unit(&self) -> String {
        if self.use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(self.spaces_per_level)
        }
    }

    /// Returns the whitespace for `level` levels.
    #[must_use]
    pub fn indent(&self, level: usize) -> String {
        self.unit().repeat(level)
    }
}

impl Default for IndentationPolicy {
    fn default() -> Self {
        Self::spaces(4)
    }
}
