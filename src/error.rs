use std::path::PathBuf;

use thiserror::Error;

/// Failures loading visual assets.  Never fatal: callers fall back to a
/// placeholder.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read sprite {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("sprite {path} contains no drawable rows")]
    Empty { path: PathBuf },
}

/// Failures delivering an audio cue.  Logged and ignored.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio output failed: {0}")]
    Io(#[from] std::io::Error),
}
