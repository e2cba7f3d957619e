//! Output targets: formatters bound to file paths.
//!
//! [`OutputTarget::from_request`] turns one [`OutputRequest`] into its targets
//! (two for `objc`, one otherwise). A target resolves its path, renders text,
//! and can write that text to disk. Writing always overwrites.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PaletteError, Result};
use crate::format::{FormatKind, Formatter, Layout};
use crate::palette::{OutputRequest, Palette};

/// Directories the formatters fall back to, resolved once by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDefaults {
    home: PathBuf,
    working_dir: PathBuf,
}

impl OutputDefaults {
    /// `home` roots the palette file location; `working_dir` receives source files.
    pub fn new(home: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            working_dir: working_dir.into(),
        }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }
}

/// Rendered text paired with the path it belongs at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutput {
    pub layout: Layout,
    pub path: PathBuf,
    pub content: String,
}

impl RenderedOutput {
    /// Writes the content to its path, replacing any existing file.
    ///
    /// With `create_dirs`, missing parent directories are created first.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::WriteFailure`] with the underlying I/O error.
    pub fn write(&self, create_dirs: bool) -> Result<()> {
        let failure = |source: std::io::Error| PaletteError::WriteFailure {
            path: self.path.clone(),
            source,
        };

        if create_dirs {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(failure)?;
            }
        }
        fs::write(&self.path, &self.content).map_err(failure)?;

        tracing::info!(
            layout = %self.layout,
            path = %self.path.display(),
            bytes = self.content.len(),
            "wrote output"
        );
        Ok(())
    }
}

/// A formatter plus an optional base directory override.
#[derive(Debug, Clone)]
pub struct OutputTarget {
    formatter: Formatter,
    base_path: Option<PathBuf>,
}

impl OutputTarget {
    pub fn new(formatter: Formatter, base_path: Option<PathBuf>) -> Self {
        Self {
            formatter,
            base_path,
        }
    }

    /// Builds the targets for one output request.
    ///
    /// All targets of a request share its base path and naming rule.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::UnknownFormatKind`] before anything is rendered.
    pub fn from_request(request: &OutputRequest, defaults: &OutputDefaults) -> Result<Vec<Self>> {
        let kind: FormatKind = request.kind().parse()?;
        let targets = kind
            .layouts()
            .iter()
            .map(|&layout| {
                let mut formatter = Formatter::new(layout, defaults);
                if let Some(naming) = request.naming() {
                    formatter = formatter.with_naming(naming.clone());
                }
                Self::new(formatter, request.base_path().map(Path::to_path_buf))
            })
            .collect();
        Ok(targets)
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    pub fn layout(&self) -> Layout {
        self.formatter.layout()
    }

    pub fn base_path(&self) -> Option<&Path> {
        self.base_path.as_deref()
    }

    /// The base directory (override or formatter default) followed by the filename.
    ///
    /// The filename is always appended below the base, even when the palette
    /// prefix starts with a path separator.
    pub fn resolve_path(&self, palette: &Palette) -> PathBuf {
        let dir = self
            .base_path
            .as_deref()
            .unwrap_or_else(|| self.formatter.default_directory());
        let filename = self.formatter.derive_filename(palette);
        dir.join(filename.trim_start_matches(std::path::is_separator))
    }

    pub fn render(&self, palette: &Palette) -> String {
        self.formatter.render(palette)
    }

    /// Resolves the path and renders the text without touching the disk.
    pub fn produce(&self, palette: &Palette) -> RenderedOutput {
        let path = self.resolve_path(palette);
        tracing::debug!(layout = %self.layout(), path = %path.display(), "rendering output");
        RenderedOutput {
            layout: self.layout(),
            path,
            content: self.render(palette),
        }
    }

    /// Renders and writes the output, overwriting any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::WriteFailure`], e.g. when the directory is missing.
    pub fn emit(&self, palette: &Palette) -> Result<RenderedOutput> {
        let output = self.produce(palette);
        output.write(false)?;
        Ok(output)
    }
}

/// Builds every target for a palette, in request order.
///
/// Uses the default output set when the palette requests none.
///
/// # Errors
///
/// Fails on the first request with an unknown format kind.
pub fn build_targets(palette: &Palette, defaults: &OutputDefaults) -> Result<Vec<OutputTarget>> {
    let mut targets = Vec::new();
    for request in palette.outputs().iter() {
        targets.extend(OutputTarget::from_request(request, defaults)?);
    }
    Ok(targets)
}
