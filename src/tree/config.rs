//! Configuration for the tree renderer

/// Configuration for tree rendering behavior.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Classify symlinks by their target, so a link to a directory is
    /// rendered and descended as a directory.
    pub follow_symlinks: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: true,
        }
    }
}
