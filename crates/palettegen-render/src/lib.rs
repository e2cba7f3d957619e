//! # Palettegen Render - Palette Normalization and Code Generation
//!
//! `palettegen-render` turns a palette of named colors into generated files:
//! a plain-text color list and an Objective-C `UIColor` category (header and
//! implementation). It is the engine behind the `palettegen` command-line tool,
//! but has no opinion about where palettes come from or how files reach disk.
//!
//! ## Core Concepts
//!
//! - [`Attributes`]: raw, user-supplied color attributes (`r`, `g`, `hex`, `w`, ...)
//! - [`Color`]: a named color holding normalized [`Components`]
//! - [`Palette`]: ordered colors, an identifier prefix and the requested outputs
//! - [`Formatter`]: renders a palette with one [`Layout`] (palette file, header, ...)
//! - [`OutputTarget`]: a formatter bound to an output path
//! - [`NamingRule`]: maps a color name and palette prefix to a generated identifier
//!
//! ## Quick Start
//!
//! ```rust
//! use palettegen_render::{build_targets, Attributes, Color, OutputDefaults, Palette};
//!
//! let pink = Color::from_attributes(
//!     "hotPink",
//!     &Attributes::new().with("hex", "#FF69B4"),
//! ).unwrap();
//!
//! let palette = Palette::new("abc").with_color(pink);
//! let defaults = OutputDefaults::new("/home/me", "/work/app");
//!
//! // No outputs requested: the default set (palette file + objc pair) is used.
//! let targets = build_targets(&palette, &defaults).unwrap();
//! assert_eq!(targets.len(), 3);
//!
//! let clr = targets[0].render(&palette);
//! assert_eq!(clr, "PALETTE\n1.000 0.412 0.706 1.000 hotPink\n");
//! ```
//!
//! ## Normalization
//!
//! Integers are read as 0-255 channel values, floats as 0-1 fractions. A `hex`
//! attribute overrides red/green/blue, and a `white` component overrides both:
//!
//! ```rust
//! use palettegen_render::{Attributes, Color};
//!
//! let gray = Color::from_attributes(
//!     "gray",
//!     &Attributes::new().with("w", 0.5).with("hex", 0x000000),
//! ).unwrap();
//! assert_eq!(gray.red(), Some(0.5));
//! assert_eq!(gray.alpha(), 1.0);
//! ```
//!
//! ## Loading Definitions
//!
//! The [`definition`] module reads YAML or JSON palette definitions into a
//! [`Palette`]; see its documentation for the file format.

pub mod color;
pub mod definition;
mod error;
pub mod format;
pub mod naming;
mod palette;
mod target;

pub use color::{normalize_component, resolve_components, AttributeValue, Attributes, Color, Component, Components};
pub use error::{PaletteError, Result};
pub use format::{FormatKind, Formatter, Layout, Spacing};
pub use naming::NamingRule;
pub use palette::{OutputRequest, Palette, DEFAULT_OUTPUT_KINDS};
pub use target::{build_targets, OutputDefaults, OutputTarget, RenderedOutput};
