//! Palettes and output requests.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::color::{Attributes, Color};
use crate::error::Result;
use crate::naming::NamingRule;

/// Output kinds used when a palette requests none.
pub const DEFAULT_OUTPUT_KINDS: &[&str] = &["palette", "objc"];

/// A request for one output kind.
///
/// The kind is kept as written; it is checked when the request is turned into
/// output targets (see [`OutputTarget::from_request`](crate::OutputTarget::from_request)).
#[derive(Debug, Clone)]
pub struct OutputRequest {
    kind: String,
    base_path: Option<PathBuf>,
    naming: Option<NamingRule>,
}

impl OutputRequest {
    /// Creates a request for the given kind (`palette`, `objc`, ...).
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            base_path: None,
            naming: None,
        }
    }

    /// Overrides the directory the output is written to.
    pub fn with_base_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_path = Some(path.into());
        self
    }

    /// Replaces the formatter's default naming rule.
    pub fn with_naming(mut self, naming: NamingRule) -> Self {
        self.naming = Some(naming);
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn base_path(&self) -> Option<&Path> {
        self.base_path.as_deref()
    }

    pub fn naming(&self) -> Option<&NamingRule> {
        self.naming.as_ref()
    }
}

/// An ordered collection of colors plus the outputs to generate from them.
///
/// Color order is significant: it is the order of the generated entries.
///
/// # Example
///
/// ```rust
/// use palettegen_render::{Attributes, OutputRequest, Palette};
///
/// let mut palette = Palette::new("abc");
/// palette.add_color("ink", &Attributes::new().with("w", 0.1)).unwrap();
/// palette.push_output(OutputRequest::new("objc"));
///
/// assert_eq!(palette.colors().len(), 1);
/// assert_eq!(palette.outputs()[0].kind(), "objc");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Palette {
    prefix: String,
    colors: Vec<Color>,
    outputs: Vec<OutputRequest>,
}

impl Palette {
    /// Creates an empty palette with the given identifier prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            colors: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Appends a color, returning `self` for chaining.
    pub fn with_color(mut self, color: Color) -> Self {
        self.colors.push(color);
        self
    }

    /// Appends an output request, returning `self` for chaining.
    pub fn with_output(mut self, request: OutputRequest) -> Self {
        self.outputs.push(request);
        self
    }

    pub fn push_color(&mut self, color: Color) {
        self.colors.push(color);
    }

    /// Resolves raw attributes and appends the resulting color.
    ///
    /// # Errors
    ///
    /// Propagates resolution errors; the palette is unchanged on failure.
    pub fn add_color(&mut self, name: impl Into<String>, attributes: &Attributes) -> Result<&Color> {
        let color = Color::from_attributes(name, attributes)?;
        self.colors.push(color);
        Ok(&self.colors[self.colors.len() - 1])
    }

    pub fn push_output(&mut self, request: OutputRequest) {
        self.outputs.push(request);
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// The explicitly requested outputs, possibly empty.
    pub fn requested_outputs(&self) -> &[OutputRequest] {
        &self.outputs
    }

    /// The outputs to generate: the requested ones, or the default set.
    pub fn outputs(&self) -> Cow<'_, [OutputRequest]> {
        if self.outputs.is_empty() {
            Cow::Owned(
                DEFAULT_OUTPUT_KINDS
                    .iter()
                    .map(|kind| OutputRequest::new(*kind))
                    .collect(),
            )
        } else {
            Cow::Borrowed(&self.outputs)
        }
    }
}
