use std::path::PathBuf;

use thiserror::Error;

use crate::document::Layer;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to read token document {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse token document {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two source paths hyphenate to the same flat key within one layer.
    #[error("duplicate token `{key}` in the {layer} layer")]
    DuplicateKey { layer: Layer, key: String },

    #[error("failed to serialize token layers")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to create output directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = TokenError> = std::result::Result<T, E>;
