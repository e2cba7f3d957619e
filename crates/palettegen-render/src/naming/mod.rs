//! Naming rules: color name + palette prefix → generated identifier.
//!
//! Every formatter ships a default rule, and an output request can replace it.
//! Rules are plain data: a cheap-to-clone handle around a pure function.
//!
//! ```rust
//! use palettegen_render::NamingRule;
//!
//! assert_eq!(NamingRule::camel().apply("Hot Pink", "abc"), "hotPink");
//! assert_eq!(NamingRule::prefixed_method().apply("Hot Pink", "abc"), "abc_hotPinkColor");
//!
//! let upper = NamingRule::new(|name, prefix| format!("{}{}", prefix.to_uppercase(), name));
//! assert_eq!(upper.apply("Ink", "abc"), "ABCInk");
//!
//! let templated = NamingRule::template("k{{ prefix | upper }}{{ name | camel | upper_first }}").unwrap();
//! assert_eq!(templated.apply("hot pink", "abc"), "kABCHotPink");
//! ```

pub mod case;
mod template;

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::error::Result;

pub use template::register_filters;

type NamingFn = dyn Fn(&str, &str) -> String + Send + Sync;

/// A `(color name, prefix) -> identifier` function.
#[derive(Clone)]
pub struct NamingRule {
    label: Cow<'static, str>,
    func: Arc<NamingFn>,
}

impl fmt::Debug for NamingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamingRule")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl NamingRule {
    /// Wraps an arbitrary function.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        Self::labelled("custom", func)
    }

    pub(crate) fn labelled<F>(label: impl Into<Cow<'static, str>>, func: F) -> Self
    where
        F: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            func: Arc::new(func),
        }
    }

    /// Lower camel case of the color name; the prefix is ignored.
    pub fn camel() -> Self {
        Self::labelled("camel", |name, _prefix| case::camel_case(name))
    }

    /// `<prefix>_<camelName>Color`, the Objective-C category method style.
    pub fn prefixed_method() -> Self {
        Self::labelled("prefixed-method", |name, prefix| {
            format!("{}_{}Color", prefix, case::camel_case(name))
        })
    }

    /// Compiles a MiniJinja template with `name` and `prefix` in scope.
    ///
    /// The filters `camel`, `snake`, `upper_first` and `lower_first` are
    /// available next to MiniJinja's built-ins.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidNamingTemplate`](crate::PaletteError::InvalidNamingTemplate)
    /// if the template does not compile or fails a trial render.
    pub fn template(source: &str) -> Result<Self> {
        template::compile(source)
    }

    /// Produces the identifier for a color.
    pub fn apply(&self, name: &str, prefix: &str) -> String {
        (self.func)(name, prefix)
    }

    /// Short description, for diagnostics.
    pub fn label(&self) -> &str {
        &self.label
    }
}
