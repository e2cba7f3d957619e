//! Named colors and their normalized components.
//!
//! A [`Color`] is built once from raw [`Attributes`] and never changes
//! afterwards. Its [`Components`] are a bounded set of five channels
//! ([`Component`]), each optional except alpha, each in `[0.0, 1.0]`.
//!
//! A channel that was never specified stays absent. Formatters read missing
//! channels as `0.0` when they render, never earlier.

mod resolve;
mod value;

use std::fmt;

use crate::error::Result;

pub use resolve::{normalize_component, resolve_components};
pub use value::{AttributeValue, Attributes};

/// One of the five canonical color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Component {
    Red,
    Green,
    Blue,
    White,
    Alpha,
}

impl Component {
    /// All components, in canonical order.
    pub const ALL: [Component; 5] = [
        Component::Red,
        Component::Green,
        Component::Blue,
        Component::White,
        Component::Alpha,
    ];

    /// Maps an attribute key (short or long form) to its component.
    ///
    /// Returns `None` for anything outside the canonical set, including `hex`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "r" | "red" => Some(Component::Red),
            "g" | "green" => Some(Component::Green),
            "b" | "blue" => Some(Component::Blue),
            "w" | "white" => Some(Component::White),
            "a" | "alpha" => Some(Component::Alpha),
            _ => None,
        }
    }

    /// The canonical long name.
    pub fn name(self) -> &'static str {
        match self {
            Component::Red => "red",
            Component::Green => "green",
            Component::Blue => "blue",
            Component::White => "white",
            Component::Alpha => "alpha",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalized channel values of a color.
///
/// Every present value lies in `[0.0, 1.0]`. Alpha is always present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Components {
    red: Option<f64>,
    green: Option<f64>,
    blue: Option<f64>,
    white: Option<f64>,
    alpha: f64,
}

impl Default for Components {
    fn default() -> Self {
        Self {
            red: None,
            green: None,
            blue: None,
            white: None,
            alpha: 1.0,
        }
    }
}

impl Components {
    /// Looks up a component. Alpha always yields `Some`.
    pub fn get(&self, component: Component) -> Option<f64> {
        match component {
            Component::Red => self.red,
            Component::Green => self.green,
            Component::Blue => self.blue,
            Component::White => self.white,
            Component::Alpha => Some(self.alpha),
        }
    }

    /// Looks up a component, reading a missing channel as `0.0`.
    pub fn get_or_zero(&self, component: Component) -> f64 {
        self.get(component).unwrap_or(0.0)
    }

    /// Sets a component, clamping into `[0.0, 1.0]`.
    pub(crate) fn set(&mut self, component: Component, value: f64) {
        let value = value.clamp(0.0, 1.0);
        match component {
            Component::Red => self.red = Some(value),
            Component::Green => self.green = Some(value),
            Component::Blue => self.blue = Some(value),
            Component::White => self.white = Some(value),
            Component::Alpha => self.alpha = value,
        }
    }

    /// Iterates the present components in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Component, f64)> + '_ {
        Component::ALL
            .into_iter()
            .filter_map(|c| self.get(c).map(|v| (c, v)))
    }
}

/// A named color with resolved components.
///
/// # Example
///
/// ```rust
/// use palettegen_render::{Attributes, Color, Component};
///
/// let orange = Color::from_attributes("orange", &Attributes::new().with("hex", 0xFF8000)).unwrap();
/// assert_eq!(orange.red(), Some(1.0));
/// assert_eq!(orange.get(Component::Blue), Some(0.0));
/// assert_eq!(orange.white(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    name: String,
    components: Components,
}

impl Color {
    /// Creates a color from already-normalized components.
    pub fn new(name: impl Into<String>, components: Components) -> Self {
        Self {
            name: name.into(),
            components,
        }
    }

    /// Resolves raw attributes into a color.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidComponentFormat`](crate::PaletteError::InvalidComponentFormat)
    /// or [`PaletteError::InvalidHex`](crate::PaletteError::InvalidHex); no partial color is produced.
    pub fn from_attributes(name: impl Into<String>, attributes: &Attributes) -> Result<Self> {
        let components = resolve_components(attributes)?;
        Ok(Self::new(name, components))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn components(&self) -> &Components {
        &self.components
    }

    pub fn get(&self, component: Component) -> Option<f64> {
        self.components.get(component)
    }

    pub fn red(&self) -> Option<f64> {
        self.components.red
    }

    pub fn green(&self) -> Option<f64> {
        self.components.green
    }

    pub fn blue(&self) -> Option<f64> {
        self.components.blue
    }

    pub fn white(&self) -> Option<f64> {
        self.components.white
    }

    pub fn alpha(&self) -> f64 {
        self.components.alpha
    }

    /// Whether the color was specified through a white component.
    pub fn is_white_based(&self) -> bool {
        self.components.white.is_some()
    }
}
