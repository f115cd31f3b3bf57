//! Error taxonomy for the patcher. Every failure the tool can hit is
//! classified here and propagated up to `main` for a single `fatal:` line.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("cannot read '{path}': {source}")]
    ReadSource {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write '{path}': {source}")]
    WriteSource {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The anchor pattern matched nothing and the file does not carry the
    /// applied marker either. The target was left byte-for-byte unchanged.
    #[error("patch '{patch}' found no anchor in '{path}'; file left unchanged")]
    AnchorNotFound { patch: &'static str, path: PathBuf },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
