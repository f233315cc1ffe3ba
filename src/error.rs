//! Error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors. Problems below the traversal root are recovered inside the
/// renderer and never surface here.
#[derive(Debug, Error)]
pub enum Error {
    /// The traversal root could not be resolved or listed.
    #[error("cannot access '{}': {source}", path.display())]
    Root {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The ignore file exists but could not be read.
    #[error("cannot read ignore file '{}': {source}", path.display())]
    IgnoreFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
