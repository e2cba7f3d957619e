//! Attribute resolution: raw attributes in, normalized components out.
//!
//! Resolution runs in a fixed order, each step overriding the previous one:
//!
//! 1. Known keys (`r`/`red`, `g`/`green`, `b`/`blue`, `w`/`white`, `a`/`alpha`)
//!    are collected under their long names. Everything else is dropped.
//! 2. Alpha defaults to `1.0`.
//! 3. A `hex` attribute overwrites red, green and blue with its bytes.
//! 4. A white component overwrites red, green and blue again, so white wins
//!    over hex when both are given.
//! 5. Every value is normalized (integers divided by 255) and clamped.

use std::collections::BTreeMap;

use super::value::{AttributeValue, Attributes};
use super::{Component, Components};
use crate::error::{PaletteError, Result};

const HEX_KEY: &str = "hex";

/// Resolves raw attributes into normalized components.
///
/// # Errors
///
/// - [`PaletteError::InvalidHex`] if `hex` is not an integer or integer string
/// - [`PaletteError::InvalidComponentFormat`] if a component is a string or not a real number
pub fn resolve_components(attributes: &Attributes) -> Result<Components> {
    let mut raw: BTreeMap<Component, AttributeValue> = BTreeMap::new();
    for (key, value) in attributes.iter() {
        if let Some(component) = Component::from_key(key) {
            raw.insert(component, value.clone());
        }
    }

    raw.entry(Component::Alpha)
        .or_insert(AttributeValue::Float(1.0));

    if let Some(hex) = attributes.get(HEX_KEY) {
        let rgb = parse_hex(hex)?;
        raw.insert(Component::Red, AttributeValue::Integer((rgb & 0xFF0000) >> 16));
        raw.insert(Component::Green, AttributeValue::Integer((rgb & 0x00FF00) >> 8));
        raw.insert(Component::Blue, AttributeValue::Integer(rgb & 0x0000FF));
    }

    if let Some(white) = raw.get(&Component::White).cloned() {
        for component in [Component::Red, Component::Green, Component::Blue] {
            raw.insert(component, white.clone());
        }
    }

    let mut components = Components::default();
    for (component, value) in &raw {
        components.set(*component, normalize_component(*component, value)?);
    }
    Ok(components)
}

/// Normalizes one component value into `[0.0, 1.0]`.
///
/// Integers are 0-255 channel values and are divided by `255.0`; floats pass
/// through. Out-of-range results are clamped, not rejected.
///
/// ```rust
/// use palettegen_render::{normalize_component, AttributeValue, Component};
///
/// assert_eq!(normalize_component(Component::Red, &AttributeValue::Integer(255)).unwrap(), 1.0);
/// assert_eq!(normalize_component(Component::Red, &AttributeValue::Float(0.25)).unwrap(), 0.25);
/// assert_eq!(normalize_component(Component::Red, &AttributeValue::Float(7.0)).unwrap(), 1.0);
/// ```
///
/// # Errors
///
/// Returns [`PaletteError::InvalidComponentFormat`] for strings, NaN and infinities.
pub fn normalize_component(component: Component, value: &AttributeValue) -> Result<f64> {
    let converted = match value {
        AttributeValue::Integer(i) => *i as f64 / 255.0,
        AttributeValue::Float(f) => *f,
        AttributeValue::Text(_) => f64::NAN,
    };

    if !converted.is_finite() {
        return Err(PaletteError::InvalidComponentFormat {
            component,
            value: value.to_string(),
        });
    }

    Ok(converted.clamp(0.0, 1.0))
}

/// Reads a `hex` attribute as an integer.
///
/// Accepts non-negative integers, `#rrggbb` / `0xrrggbb` strings and decimal
/// strings. Signs are rejected everywhere.
fn parse_hex(value: &AttributeValue) -> Result<i64> {
    match value {
        AttributeValue::Integer(i) if *i >= 0 => Ok(*i),
        AttributeValue::Integer(_) | AttributeValue::Float(_) => {
            Err(PaletteError::InvalidHex(value.to_string()))
        }
        AttributeValue::Text(s) => {
            let s = s.trim();
            let invalid = || PaletteError::InvalidHex(s.to_string());
            let (digits, radix) = match s
                .strip_prefix('#')
                .or_else(|| s.strip_prefix("0x"))
                .or_else(|| s.strip_prefix("0X"))
            {
                Some(digits) => (digits, 16),
                None => (s, 10),
            };
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return Err(invalid());
            }
            i64::from_str_radix(digits, radix).map_err(|_| invalid())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Option<f64>, b: f64) -> bool {
        a.map(|a| (a - b).abs() < 1e-9).unwrap_or(false)
    }

    // =========================================================================
    // Key mapping
    // =========================================================================

    #[test]
    fn test_short_keys_map_to_long_names() {
        let attrs = Attributes::new()
            .with("r", 255)
            .with("g", 0)
            .with("b", 51)
            .with("a", 0.5);
        let c = resolve_components(&attrs).unwrap();
        assert_eq!(c.get(Component::Red), Some(1.0));
        assert_eq!(c.get(Component::Green), Some(0.0));
        assert!(approx(c.get(Component::Blue), 0.2));
        assert_eq!(c.get(Component::Alpha), Some(0.5));
    }

    #[test]
    fn test_unknown_keys_dropped() {
        let attrs = Attributes::new().with("cyan", 12).with("name", "ignored");
        let c = resolve_components(&attrs).unwrap();
        assert_eq!(c.iter().count(), 1);
    }

    #[test]
    fn test_later_spelling_wins() {
        let attrs = Attributes::new().with("r", 0).with("red", 255);
        let c = resolve_components(&attrs).unwrap();
        assert_eq!(c.get(Component::Red), Some(1.0));
    }

    #[test]
    fn test_missing_channels_stay_absent() {
        let attrs = Attributes::new().with("r", 255);
        let c = resolve_components(&attrs).unwrap();
        assert_eq!(c.get(Component::Green), None);
        assert_eq!(c.get(Component::Blue), None);
        assert_eq!(c.get(Component::White), None);
    }

    // =========================================================================
    // Alpha default
    // =========================================================================

    #[test]
    fn test_alpha_defaults_to_one() {
        let c = resolve_components(&Attributes::new()).unwrap();
        assert_eq!(c.get(Component::Alpha), Some(1.0));

        let c = resolve_components(&Attributes::new().with("w", 0.2)).unwrap();
        assert_eq!(c.get(Component::Alpha), Some(1.0));
    }

    #[test]
    fn test_integer_alpha_is_a_channel_value() {
        let c = resolve_components(&Attributes::new().with("a", 1)).unwrap();
        assert!(approx(c.get(Component::Alpha), 1.0 / 255.0));
    }

    // =========================================================================
    // Hex
    // =========================================================================

    #[test]
    fn test_hex_integer() {
        let c = resolve_components(&Attributes::new().with("hex", 0xFF8000)).unwrap();
        assert_eq!(c.get(Component::Red), Some(1.0));
        assert!(approx(c.get(Component::Green), 128.0 / 255.0));
        assert_eq!(c.get(Component::Blue), Some(0.0));
    }

    #[test]
    fn test_hex_strings() {
        for s in ["#FF8000", "0xff8000", "0XFF8000", "16744448", " #ff8000 "] {
            let c = resolve_components(&Attributes::new().with("hex", s)).unwrap();
            assert_eq!(c.get(Component::Red), Some(1.0), "input {s}");
            assert!(approx(c.get(Component::Green), 128.0 / 255.0), "input {s}");
            assert_eq!(c.get(Component::Blue), Some(0.0), "input {s}");
        }
    }

    #[test]
    fn test_hex_overrides_explicit_channels() {
        let attrs = Attributes::new().with("r", 0).with("hex", 0xFF0000);
        let c = resolve_components(&attrs).unwrap();
        assert_eq!(c.get(Component::Red), Some(1.0));
    }

    #[test]
    fn test_hex_invalid() {
        for s in ["orange", "#gg0000", "ff8000", "", "#", "#-1", "0x+ff", "-5", "+5"] {
            let err = resolve_components(&Attributes::new().with("hex", s)).unwrap_err();
            assert!(matches!(err, PaletteError::InvalidHex(_)), "input {s}");
        }
        let err = resolve_components(&Attributes::new().with("hex", 1.5)).unwrap_err();
        assert!(matches!(err, PaletteError::InvalidHex(_)));
    }

    #[test]
    fn test_hex_negative_integer_is_invalid() {
        let err = resolve_components(&Attributes::new().with("hex", -1)).unwrap_err();
        assert!(matches!(err, PaletteError::InvalidHex(_)));
    }

    #[test]
    fn test_hex_masks_out_of_range_bits() {
        let c = resolve_components(&Attributes::new().with("hex", 0x1_00FF_0000_i64)).unwrap();
        assert_eq!(c.get(Component::Red), Some(1.0));
        assert_eq!(c.get(Component::Green), Some(0.0));
    }

    // =========================================================================
    // White
    // =========================================================================

    #[test]
    fn test_white_wins_over_hex() {
        let attrs = Attributes::new().with("white", 0.5).with("hex", 0x000000);
        let c = resolve_components(&attrs).unwrap();
        assert_eq!(c.get(Component::Red), Some(0.5));
        assert_eq!(c.get(Component::Green), Some(0.5));
        assert_eq!(c.get(Component::Blue), Some(0.5));
        assert_eq!(c.get(Component::White), Some(0.5));
    }

    #[test]
    fn test_white_integer_normalized_everywhere() {
        let c = resolve_components(&Attributes::new().with("w", 51)).unwrap();
        for comp in [Component::Red, Component::Green, Component::Blue, Component::White] {
            assert!(approx(c.get(comp), 0.2));
        }
    }

    // =========================================================================
    // Normalization
    // =========================================================================

    #[test]
    fn test_normalize_clamps() {
        assert_eq!(
            normalize_component(Component::Red, &AttributeValue::Integer(300)).unwrap(),
            1.0
        );
        assert_eq!(
            normalize_component(Component::Red, &AttributeValue::Integer(-5)).unwrap(),
            0.0
        );
        assert_eq!(
            normalize_component(Component::Red, &AttributeValue::Float(-0.1)).unwrap(),
            0.0
        );
    }

    #[test]
    fn test_normalize_rejects_strings() {
        let err = resolve_components(&Attributes::new().with("g", "half")).unwrap_err();
        match err {
            PaletteError::InvalidComponentFormat { component, value } => {
                assert_eq!(component, Component::Green);
                assert_eq!(value, "\"half\"");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_normalize_rejects_nan() {
        let err = normalize_component(Component::Alpha, &AttributeValue::Float(f64::NAN));
        assert!(matches!(
            err,
            Err(PaletteError::InvalidComponentFormat { .. })
        ));
    }
}
