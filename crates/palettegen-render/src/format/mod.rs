//! Formatters: one palette in, one text artifact out.
//!
//! A [`Formatter`] pairs a [`Layout`] with its spacing and naming rule. The
//! layout decides the per-variant pieces (prefix, one entry per color, suffix,
//! file placement); the render loop that stitches them together lives in one
//! place, [`Formatter::render`]:
//!
//! ```text
//! prefix
//! \n × post_prefix
//! color line, \n × intercolor, color line, ...
//! \n × pre_suffix
//! suffix
//! ```
//!
//! Every piece ends in a newline (or is empty), so a count of `n` produces
//! `n` blank lines.
//!
//! # Layouts
//!
//! | Layout | File | Contents |
//! |--------|------|----------|
//! | `palette` | `<prefix>-palette.clr` | `r g b a name` lines, three decimals |
//! | `objc-header` | `Prefix+<Prefix>Color.h` | `UIColor` category interface |
//! | `objc-impl` | `Prefix+<Prefix>Color.m` | `UIColor` category implementation |
//! | `swift` | `<Prefix>Color.swift` | reserved, renders nothing yet |

mod objc;
mod palette_file;
mod swift;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;

use crate::color::Color;
use crate::error::PaletteError;
use crate::naming::NamingRule;
use crate::palette::Palette;
use crate::target::OutputDefaults;

/// A format kind as named in an output request.
///
/// `objc` expands to the header and implementation layouts; every other kind
/// maps to exactly one layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    Palette,
    Objc,
    ObjcHeader,
    ObjcImpl,
    Swift,
}

impl FormatKind {
    /// All request kinds, in documentation order.
    pub const ALL: [FormatKind; 5] = [
        FormatKind::Palette,
        FormatKind::Objc,
        FormatKind::ObjcHeader,
        FormatKind::ObjcImpl,
        FormatKind::Swift,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FormatKind::Palette => "palette",
            FormatKind::Objc => "objc",
            FormatKind::ObjcHeader => "objc-header",
            FormatKind::ObjcImpl => "objc-impl",
            FormatKind::Swift => "swift",
        }
    }

    /// The layouts rendered for this kind, in output order.
    pub fn layouts(self) -> &'static [Layout] {
        match self {
            FormatKind::Palette => &[Layout::Palette],
            FormatKind::Objc => &[Layout::ObjcHeader, Layout::ObjcImpl],
            FormatKind::ObjcHeader => &[Layout::ObjcHeader],
            FormatKind::ObjcImpl => &[Layout::ObjcImpl],
            FormatKind::Swift => &[Layout::Swift],
        }
    }

    fn expected() -> String {
        FormatKind::ALL
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatKind {
    type Err = PaletteError;

    /// Parses a kind name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        FormatKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| PaletteError::UnknownFormatKind {
                kind: s.to_string(),
                expected: FormatKind::expected(),
            })
    }
}

/// Newline counts placed between the rendered pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Spacing {
    /// After the prefix.
    pub post_prefix: usize,
    /// Between two color entries.
    pub intercolor: usize,
    /// Before the suffix.
    pub pre_suffix: usize,
}

impl Spacing {
    pub const fn new(post_prefix: usize, intercolor: usize, pre_suffix: usize) -> Self {
        Self {
            post_prefix,
            intercolor,
            pre_suffix,
        }
    }
}

/// One concrete rendering of a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// Plain color list (`.clr`).
    Palette,
    /// Objective-C category interface (`.h`).
    ObjcHeader,
    /// Objective-C category implementation (`.m`).
    ObjcImpl,
    /// Swift extension; reserved, renders empty output.
    Swift,
}

impl Layout {
    pub fn name(self) -> &'static str {
        match self {
            Layout::Palette => "palette",
            Layout::ObjcHeader => "objc-header",
            Layout::ObjcImpl => "objc-impl",
            Layout::Swift => "swift",
        }
    }

    pub fn default_spacing(self) -> Spacing {
        match self {
            Layout::Palette => palette_file::SPACING,
            Layout::ObjcHeader => objc::HEADER_SPACING,
            Layout::ObjcImpl => objc::IMPL_SPACING,
            Layout::Swift => swift::SPACING,
        }
    }

    pub fn default_naming(self) -> NamingRule {
        match self {
            Layout::Palette | Layout::Swift => NamingRule::camel(),
            Layout::ObjcHeader | Layout::ObjcImpl => NamingRule::prefixed_method(),
        }
    }

    /// The directory used when the output request gives none.
    pub fn default_directory(self, defaults: &OutputDefaults) -> PathBuf {
        match self {
            Layout::Palette => palette_file::default_directory(defaults.home()),
            Layout::ObjcHeader | Layout::ObjcImpl | Layout::Swift => {
                defaults.working_dir().to_path_buf()
            }
        }
    }

    pub fn derive_filename(self, palette: &Palette) -> String {
        match self {
            Layout::Palette => palette_file::filename(palette),
            Layout::ObjcHeader => objc::filename(palette, true),
            Layout::ObjcImpl => objc::filename(palette, false),
            Layout::Swift => swift::filename(palette),
        }
    }

    fn render_prefix(self, palette: &Palette) -> String {
        match self {
            Layout::Palette => palette_file::prefix(),
            Layout::ObjcHeader => objc::prefix(palette, true),
            Layout::ObjcImpl => objc::prefix(palette, false),
            Layout::Swift => String::new(),
        }
    }

    fn render_color_line(self, color: &Color, identifier: &str) -> String {
        match self {
            Layout::Palette => palette_file::color_line(color, identifier),
            Layout::ObjcHeader => objc::declaration(identifier),
            Layout::ObjcImpl => objc::definition(color, identifier),
            Layout::Swift => String::new(),
        }
    }

    fn render_suffix(self) -> String {
        match self {
            Layout::Palette | Layout::Swift => String::new(),
            Layout::ObjcHeader | Layout::ObjcImpl => objc::suffix(),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A layout bound to its spacing, naming rule and default directory.
///
/// # Example
///
/// ```rust
/// use palettegen_render::{Attributes, Color, Formatter, Layout, OutputDefaults, Palette};
///
/// let palette = Palette::new("abc")
///     .with_color(Color::from_attributes("ink", &Attributes::new().with("w", 0.1)).unwrap());
/// let defaults = OutputDefaults::new("/home/me", ".");
///
/// let header = Formatter::new(Layout::ObjcHeader, &defaults);
/// assert!(header.render(&palette).contains("+ (UIColor *)abc_inkColor;"));
/// ```
#[derive(Debug, Clone)]
pub struct Formatter {
    layout: Layout,
    spacing: Spacing,
    naming: NamingRule,
    default_directory: PathBuf,
}

impl Formatter {
    /// Creates a formatter with the layout's default spacing and naming.
    pub fn new(layout: Layout, defaults: &OutputDefaults) -> Self {
        Self {
            layout,
            spacing: layout.default_spacing(),
            naming: layout.default_naming(),
            default_directory: layout.default_directory(defaults),
        }
    }

    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_naming(mut self, naming: NamingRule) -> Self {
        self.naming = naming;
        self
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    pub fn naming(&self) -> &NamingRule {
        &self.naming
    }

    pub fn default_directory(&self) -> &Path {
        &self.default_directory
    }

    pub fn derive_filename(&self, palette: &Palette) -> String {
        self.layout.derive_filename(palette)
    }

    /// The identifier generated for a color of this palette.
    pub fn identifier(&self, color: &Color, palette: &Palette) -> String {
        self.naming.apply(color.name(), palette.prefix())
    }

    /// Renders the palette. Pure: the same input always yields the same text.
    pub fn render(&self, palette: &Palette) -> String {
        let mut output = self.layout.render_prefix(palette);
        push_newlines(&mut output, self.spacing.post_prefix);

        let colors = palette.colors();
        for (index, color) in colors.iter().enumerate() {
            let identifier = self.identifier(color, palette);
            output.push_str(&self.layout.render_color_line(color, &identifier));
            if index + 1 < colors.len() {
                push_newlines(&mut output, self.spacing.intercolor);
            }
        }

        push_newlines(&mut output, self.spacing.pre_suffix);
        output.push_str(&self.layout.render_suffix());
        output
    }
}

fn push_newlines(output: &mut String, count: usize) {
    output.extend(std::iter::repeat('\n').take(count));
}
