//! Gitignore-style exclusion rules loaded from a `.treeignore` file
//!
//! Patterns follow `.gitignore` syntax: `#` comments, `!` negation, a trailing
//! `/` for directory-only rules, and `*`, `**`, `?`, `[...]` wildcards. Rules
//! are evaluated in file order and the last match decides.
//!
//! Paths handed to [`IgnoreRules::is_excluded`] are relative to the rule set's
//! root, `/`-separated, and carry a trailing `/` when they name a directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Name of the ignore file looked up in the traversal root.
pub const DEFAULT_IGNORE_FILE: &str = ".treeignore";

/// Compiled, immutable ignore rule set.
#[derive(Debug, Clone)]
pub struct IgnoreRules {
    matcher: Gitignore,
    skipped: usize,
}

impl IgnoreRules {
    /// A rule set that excludes nothing.
    pub fn empty() -> Self {
        Self {
            matcher: Gitignore::empty(),
            skipped: 0,
        }
    }

    /// Compile ordered pattern lines relative to `root`.
    ///
    /// A line the glob compiler rejects (an inverted range such as `[z-a]`, an
    /// unclosed `{`) is skipped with a warning and the remaining lines still
    /// apply. An unclosed `[` is not an error: it matches literally, as git
    /// does.
    pub fn compile<I, S>(root: &Path, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GitignoreBuilder::new(root);
        let mut skipped = 0usize;

        for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            if let Err(err) = builder.add_line(None, line) {
                warn!(
                    line = index + 1,
                    pattern = line,
                    error = %err,
                    "skipping malformed ignore pattern"
                );
                skipped += 1;
            }
        }

        // Each glob was already validated by `add_line`; building the combined
        // set can only fail if its regex exceeds the size limit.
        let matcher = match builder.build() {
            Ok(matcher) => matcher,
            Err(err) => {
                warn!(error = %err, "could not build ignore rules, nothing will be excluded");
                Gitignore::empty()
            }
        };

        Self { matcher, skipped }
    }

    /// Read and compile the ignore file `file` (relative to `root`, or absolute).
    ///
    /// A missing file yields an empty rule set.
    pub fn load(root: &Path, file: &Path) -> Result<Self> {
        let path = root.join(file);
        match fs::read_to_string(&path) {
            Ok(contents) => {
                let rules = Self::compile(root, contents.lines());
                debug!(
                    path = %path.display(),
                    rules = rules.len(),
                    skipped = rules.skipped(),
                    "loaded ignore rules"
                );
                Ok(rules)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no ignore file, excluding nothing");
                Ok(Self::empty())
            }
            Err(source) => Err(Error::IgnoreFile { path, source }),
        }
    }

    /// Whether `relative` is excluded, either directly or through one of its
    /// parent directories.
    ///
    /// `relative` is taken relative to the rule set's root; a leading `/` is
    /// ignored.
    pub fn is_excluded(&self, relative: &str) -> bool {
        let is_dir = relative.ends_with('/');
        let trimmed = relative.trim_start_matches('/').trim_end_matches('/');
        if trimmed.is_empty() || self.is_empty() {
            return false;
        }
        self.matcher
            .matched_path_or_any_parents(PathBuf::from(trimmed), is_dir)
            .is_ignore()
    }

    /// Number of compiled rules, negations included.
    pub fn len(&self) -> usize {
        (self.matcher.num_ignores() + self.matcher.num_whitelists()) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.matcher.is_empty()
    }

    /// Number of lines dropped as malformed.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl Default for IgnoreRules {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn rules(lines: &[&str]) -> IgnoreRules {
        IgnoreRules::compile(Path::new("/project"), lines.iter().copied())
    }

    #[test]
    fn test_empty_rules_exclude_nothing() {
        let rules = IgnoreRules::empty();
        assert!(rules.is_empty());
        assert!(!rules.is_excluded("a.log"));
        assert!(!rules.is_excluded("target/"));
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let rules = rules(&["# build output", "", "   ", "*.o"]);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.skipped(), 0);
        assert!(rules.is_excluded("main.o"));
        assert!(!rules.is_excluded("# build output"));
    }

    #[test]
    fn test_directory_only_pattern() {
        let rules = rules(&["foo/"]);
        assert!(rules.is_excluded("foo/"));
        assert!(rules.is_excluded("nested/foo/"));
        assert!(!rules.is_excluded("foo"), "a file named foo is kept");
        assert!(rules.is_excluded("foo/bar.txt"), "contents follow the directory");
    }

    #[test]
    fn test_extension_glob_at_any_depth() {
        let rules = rules(&["*.log"]);
        assert!(rules.is_excluded("a.log"));
        assert!(rules.is_excluded("dir/b.log"));
        assert!(rules.is_excluded("dir/deeper/c.log"));
        assert!(!rules.is_excluded("a.log.txt"));
    }

    #[test]
    fn test_negation_reincludes() {
        let rules = rules(&["*.log", "!keep.log"]);
        assert!(rules.is_excluded("a.log"));
        assert!(!rules.is_excluded("keep.log"));
        assert!(!rules.is_excluded("sub/keep.log"));
    }

    #[test]
    fn test_last_matching_rule_wins() {
        let rules = rules(&["!keep.log", "*.log"]);
        assert!(rules.is_excluded("keep.log"));
    }

    #[test]
    fn test_anchored_patterns() {
        let rules = rules(&["/build/", "docs/*.md"]);
        assert!(rules.is_excluded("build/"));
        assert!(!rules.is_excluded("src/build/"));
        assert!(rules.is_excluded("docs/intro.md"));
        assert!(!rules.is_excluded("other/docs/intro.md"));
        assert!(!rules.is_excluded("docs/sub/intro.md"), "* stays within a segment");
    }

    #[test]
    fn test_double_star_crosses_segments() {
        let rules = rules(&["**/cache/", "a/**/z.txt"]);
        assert!(rules.is_excluded("cache/"));
        assert!(rules.is_excluded("x/y/cache/"));
        assert!(rules.is_excluded("a/z.txt"));
        assert!(rules.is_excluded("a/b/c/z.txt"));
        assert!(!rules.is_excluded("b/z.txt"));
    }

    #[test]
    fn test_single_char_and_class_wildcards() {
        let rules = rules(&["file?.txt", "[ab].md"]);
        assert!(rules.is_excluded("file1.txt"));
        assert!(!rules.is_excluded("file12.txt"));
        assert!(rules.is_excluded("a.md"));
        assert!(rules.is_excluded("b.md"));
        assert!(!rules.is_excluded("c.md"));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let rules = rules(&["*.LOG"]);
        assert!(rules.is_excluded("A.LOG"));
        assert!(!rules.is_excluded("a.log"));
    }

    #[test]
    fn test_leading_slash_is_relative_to_root() {
        let rules = rules(&["*.log", "/build/"]);
        assert!(rules.is_excluded("/x.log"));
        assert!(rules.is_excluded("/build/"));
        assert!(!rules.is_excluded("/src/"));
        assert!(!rules.is_excluded("/"));
    }

    #[test]
    fn test_malformed_line_is_skipped() {
        let rules = rules(&["[z-a].txt", "*.tmp"]);
        assert_eq!(rules.skipped(), 1);
        assert_eq!(rules.len(), 1);
        assert!(rules.is_excluded("scratch.tmp"));
        assert!(!rules.is_excluded("z.txt"));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let rules = IgnoreRules::load(dir.path(), Path::new(DEFAULT_IGNORE_FILE)).unwrap();
        assert!(rules.is_empty());
        assert!(!rules.is_excluded("anything"));
    }

    #[test]
    fn test_load_reads_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(DEFAULT_IGNORE_FILE),
            "# comment\r\ntarget/\r\n*.log\n",
        )
        .unwrap();

        let rules = IgnoreRules::load(dir.path(), Path::new(DEFAULT_IGNORE_FILE)).unwrap();
        assert_eq!(rules.len(), 2);
        assert!(rules.is_excluded("target/"));
        assert!(rules.is_excluded("x.log"));
        assert!(!rules.is_excluded("src/"));
    }

    #[test]
    fn test_load_directory_is_error() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(DEFAULT_IGNORE_FILE)).unwrap();

        let err = IgnoreRules::load(dir.path(), Path::new(DEFAULT_IGNORE_FILE)).unwrap_err();
        assert!(matches!(err, Error::IgnoreFile { .. }));
    }
}
