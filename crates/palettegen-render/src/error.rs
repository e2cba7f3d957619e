//! Error types for palette resolution and rendering.
//!
//! [`PaletteError`] covers everything the core can fail at: normalizing a color
//! component, parsing a hex value, picking a formatter for an output request,
//! compiling a naming template and writing a rendered file.

use std::path::PathBuf;

use thiserror::Error;

use crate::color::Component;

/// Errors raised while building colors, formatters and output targets.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// A component value is neither an integer nor a real number.
    #[error("invalid value for component '{component}': {value}")]
    InvalidComponentFormat {
        /// The component being normalized.
        component: Component,
        /// The offending value, as written.
        value: String,
    },

    /// The `hex` attribute could not be read as an integer.
    #[error("invalid hex color '{0}': expected an integer, '#rrggbb' or '0xrrggbb'")]
    InvalidHex(String),

    /// An output request names a format kind with no matching formatter.
    #[error("unknown format kind '{kind}' (expected one of: {expected})")]
    UnknownFormatKind {
        /// The requested kind, as written.
        kind: String,
        /// Comma-separated list of supported kinds.
        expected: String,
    },

    /// A naming template failed to compile or render.
    #[error("invalid naming template '{template}': {message}")]
    InvalidNamingTemplate {
        /// The template source.
        template: String,
        /// Message from the template engine.
        message: String,
    },

    /// A rendered file could not be written.
    #[error("failed to write {}", .path.display())]
    WriteFailure {
        /// Destination path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for palette operations.
pub type Result<T> = std::result::Result<T, PaletteError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_invalid_component_display() {
        let err = PaletteError::InvalidComponentFormat {
            component: Component::Green,
            value: "\"lots\"".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("green"));
        assert!(msg.contains("lots"));
    }

    #[test]
    fn test_unknown_kind_lists_expected() {
        let err = PaletteError::UnknownFormatKind {
            kind: "kotlin".to_string(),
            expected: "palette, objc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown format kind 'kotlin' (expected one of: palette, objc)"
        );
    }

    #[test]
    fn test_write_failure_keeps_io_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = PaletteError::WriteFailure {
            path: PathBuf::from("/tmp/x.clr"),
            source: io_err,
        };
        assert!(err.to_string().contains("/tmp/x.clr"));
        let source = err.source().expect("io source");
        assert_eq!(source.to_string(), "denied");
    }
}
