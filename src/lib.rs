//! treeignore - print a directory tree, skipping paths listed in `.treeignore`

pub mod error;
pub mod ignore_rules;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use ignore_rules::{DEFAULT_IGNORE_FILE, IgnoreRules};
pub use output::{OutputConfig, TreeFormatter};
pub use tree::{RenderConfig, RenderStats, TreeOutput, TreeRenderer, resolve_root};
