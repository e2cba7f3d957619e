//! Definition loading errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::error::PaletteError;

/// Error type for palette definition loading failures.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// The definition file could not be read.
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML/JSON syntax error, or a document of the wrong shape.
    #[error("failed to parse palette definition{}: {message}", location(.path))]
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Description of what was wrong.
        message: String,
    },

    /// The file extension is not one of the recognized definition formats.
    #[error("unsupported definition file {} (expected .yaml, .yml or .json)", .0.display())]
    UnsupportedExtension(PathBuf),

    /// The document has no `prefix`.
    #[error("palette definition has no 'prefix'")]
    MissingPrefix,

    /// A color attribute holds something other than a number or string.
    #[error("invalid attribute '{key}' for color '{color}': {message}")]
    InvalidAttribute {
        color: String,
        key: String,
        message: String,
    },

    /// A color failed to resolve.
    #[error("invalid color '{color}'")]
    Color {
        color: String,
        #[source]
        source: PaletteError,
    },

    /// An output request could not be built (bad naming template).
    #[error("invalid output request '{kind}'")]
    Output {
        kind: String,
        #[source]
        source: PaletteError,
    },
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

/// Result type for definition loading.
pub type Result<T> = std::result::Result<T, DefinitionError>;
