//! TreeRenderer - depth-first traversal that streams entries to an output sink

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::ignore_rules::IgnoreRules;
use crate::output::child_prefix;

use super::config::RenderConfig;
use super::entry::{TreeEntry, display_name};

/// Receives rendered nodes in display order.
pub trait TreeOutput {
    /// The first line: the traversal root.
    fn root(&mut self, name: &str) -> io::Result<()>;

    fn directory(&mut self, name: &str, prefix: &str, is_last: bool) -> io::Result<()>;

    fn file(&mut self, name: &str, prefix: &str, is_last: bool) -> io::Result<()>;

    /// A directory below the root could not be listed.
    fn permission_denied(&mut self, prefix: &str) -> io::Result<()>;

    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Counts of what a render pass printed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderStats {
    pub dirs: usize,
    pub files: usize,
    pub denied: usize,
}

/// Renders the tree below `root`, filtering every entry through `rules`.
pub struct TreeRenderer<'a> {
    root: PathBuf,
    rules: &'a IgnoreRules,
    config: RenderConfig,
}

impl<'a> TreeRenderer<'a> {
    pub fn new(root: impl Into<PathBuf>, rules: &'a IgnoreRules) -> Self {
        Self {
            root: root.into(),
            rules,
            config: RenderConfig::default(),
        }
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Print the root line and everything beneath it.
    ///
    /// Failing to list the root is fatal; failures further down only cut off
    /// their own branch.
    pub fn render_root<O: TreeOutput>(&self, output: &mut O) -> Result<RenderStats> {
        let entries = self.read_entries(&self.root).map_err(|source| Error::Root {
            path: self.root.clone(),
            source,
        })?;

        output.root(&display_name(&self.root))?;

        let mut stats = RenderStats::default();
        self.render_entries(entries, "", output, &mut stats)?;
        output.finish()?;

        debug!(
            dirs = stats.dirs,
            files = stats.files,
            denied = stats.denied,
            "render complete"
        );
        Ok(stats)
    }

    /// Render the children of `path` beneath `prefix`.
    pub fn render<O: TreeOutput>(
        &self,
        path: &Path,
        prefix: &str,
        output: &mut O,
    ) -> Result<RenderStats> {
        let mut stats = RenderStats::default();
        self.render_dir(path, prefix, output, &mut stats)?;
        Ok(stats)
    }

    fn render_dir<O: TreeOutput>(
        &self,
        path: &Path,
        prefix: &str,
        output: &mut O,
        stats: &mut RenderStats,
    ) -> Result<()> {
        let entries = match self.read_entries(path) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                output.permission_denied(prefix)?;
                stats.denied += 1;
                return Ok(());
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "cannot list directory");
                return Ok(());
            }
        };

        self.render_entries(entries, prefix, output, stats)
    }

    fn render_entries<O: TreeOutput>(
        &self,
        entries: Vec<TreeEntry>,
        prefix: &str,
        output: &mut O,
        stats: &mut RenderStats,
    ) -> Result<()> {
        let total = entries.len();

        for (i, entry) in entries.into_iter().enumerate() {
            let is_last = i + 1 == total;

            if entry.is_dir {
                output.directory(&entry.name, prefix, is_last)?;
                stats.dirs += 1;
                self.render_dir(&entry.path, &child_prefix(prefix, is_last), output, stats)?;
            } else {
                output.file(&entry.name, prefix, is_last)?;
                stats.files += 1;
            }
        }

        Ok(())
    }

    /// List, sort and filter the children of `path`.
    fn read_entries(&self, path: &Path) -> io::Result<Vec<TreeEntry>> {
        let mut dir_entries: Vec<_> = fs::read_dir(path)?.filter_map(|e| e.ok()).collect();
        dir_entries.sort_by_key(|e| e.file_name());

        Ok(dir_entries
            .iter()
            .filter_map(|e| TreeEntry::from_dir_entry(e, &self.root, self.config.follow_symlinks))
            .filter(|e| !self.rules.is_excluded(&e.relative))
            .collect())
    }
}
