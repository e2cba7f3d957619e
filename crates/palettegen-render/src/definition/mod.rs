//! Palette definition files.
//!
//! A definition is a YAML or JSON document describing one palette:
//!
//! ```yaml
//! prefix: abc
//!
//! # Optional. Defaults to [palette, objc].
//! outputs:
//!   - palette
//!   - kind: objc
//!     path: ./Generated
//!     naming: "{{ prefix | upper }}{{ name | camel | upper_first }}"
//!
//! # Mapping form (name → attributes), file order preserved...
//! colors:
//!   hotPink: { hex: "#FF69B4" }
//!   shadow: { w: 0, a: 0.4 }
//! ```
//!
//! ...or list form, where each entry carries its own `name`:
//!
//! ```yaml
//! prefix: abc
//! colors:
//!   - { name: accent, r: 255, g: 128, b: 0 }
//! ```
//!
//! Relative output paths are resolved against the directory holding the
//! definition file.
//!
//! # Supported Extensions
//!
//! | Priority | Extension | Parser |
//! |----------|-----------|--------|
//! | 1 | `.yaml` | YAML |
//! | 2 | `.yml` | YAML |
//! | 3 | `.json` | JSON |

mod error;

use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

use crate::color::{AttributeValue, Attributes, Color};
use crate::naming::NamingRule;
use crate::palette::{OutputRequest, Palette};

pub use error::{DefinitionError, Result};

/// Recognized definition file extensions in priority order.
pub const DEFINITION_EXTENSIONS: &[&str] = &[".yaml", ".yml", ".json"];

/// Loads a palette definition from a file, picking the parser by extension.
///
/// # Errors
///
/// Returns a [`DefinitionError`] if the file cannot be read, has an unknown
/// extension, or does not describe a valid palette.
///
/// # Example
///
/// ```rust,ignore
/// let palette = palettegen_render::definition::load_file("colors.yaml")?;
/// ```
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Palette> {
    let path = path.as_ref();
    let format = SourceFormat::from_path(path)
        .ok_or_else(|| DefinitionError::UnsupportedExtension(path.to_path_buf()))?;

    let content = std::fs::read_to_string(path).map_err(|source| DefinitionError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let root = format
        .parse(&content)
        .map_err(|message| DefinitionError::Parse {
            path: Some(path.to_path_buf()),
            message,
        })?;

    let base_dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    tracing::debug!(path = %path.display(), "loaded palette definition");
    parse_root(&root, base_dir)
}

/// Parses a YAML definition. Relative output paths stay relative.
pub fn from_yaml(yaml: &str) -> Result<Palette> {
    let root = SourceFormat::Yaml
        .parse(yaml)
        .map_err(|message| DefinitionError::Parse {
            path: None,
            message,
        })?;
    parse_root(&root, None)
}

/// Parses a JSON definition. Relative output paths stay relative.
pub fn from_json(json: &str) -> Result<Palette> {
    let root = SourceFormat::Json
        .parse(json)
        .map_err(|message| DefinitionError::Parse {
            path: None,
            message,
        })?;
    parse_root(&root, None)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceFormat {
    Yaml,
    Json,
}

impl SourceFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_ascii_lowercase();
        let ext = DEFINITION_EXTENSIONS
            .iter()
            .find(|ext| name.ends_with(*ext))?;
        Some(if *ext == ".json" {
            SourceFormat::Json
        } else {
            SourceFormat::Yaml
        })
    }

    /// Parses into a YAML value tree; JSON maps keep their document order.
    fn parse(self, content: &str) -> std::result::Result<Value, String> {
        match self {
            SourceFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            SourceFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

fn parse_error(message: impl Into<String>) -> DefinitionError {
    DefinitionError::Parse {
        path: None,
        message: message.into(),
    }
}

fn parse_root(root: &Value, base_dir: Option<&Path>) -> Result<Palette> {
    let mapping = root
        .as_mapping()
        .ok_or_else(|| parse_error("Palette definition must be a mapping"))?;

    let prefix = match mapping.get("prefix") {
        None | Some(Value::Null) => return Err(DefinitionError::MissingPrefix),
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            return Err(parse_error(format!(
                "'prefix' must be a string, got {:?}",
                other
            )))
        }
    };

    let mut palette = Palette::new(prefix);

    match mapping.get("colors") {
        None | Some(Value::Null) => {}
        Some(Value::Mapping(colors)) => {
            for (key, value) in colors {
                let name = key
                    .as_str()
                    .ok_or_else(|| parse_error(format!("Color name must be a string, got {:?}", key)))?;
                let attrs = value
                    .as_mapping()
                    .ok_or_else(|| parse_error(format!("Color '{}' must be a mapping", name)))?;
                palette.push_color(build_color(name, attrs)?);
            }
        }
        Some(Value::Sequence(colors)) => {
            for (index, value) in colors.iter().enumerate() {
                let attrs = value
                    .as_mapping()
                    .ok_or_else(|| parse_error(format!("Color #{} must be a mapping", index)))?;
                let name = attrs
                    .get("name")
                    .and_then(Value::as_str)
                    .ok_or_else(|| parse_error(format!("Color #{} has no string 'name'", index)))?;
                palette.push_color(build_color(name, attrs)?);
            }
        }
        Some(other) => {
            return Err(parse_error(format!(
                "'colors' must be a mapping or a list, got {:?}",
                other
            )))
        }
    }

    match mapping.get("outputs") {
        None | Some(Value::Null) => {}
        Some(Value::Sequence(outputs)) => {
            for value in outputs {
                palette.push_output(build_output(value, base_dir)?);
            }
        }
        Some(other) => {
            return Err(parse_error(format!(
                "'outputs' must be a list, got {:?}",
                other
            )))
        }
    }

    Ok(palette)
}

fn build_color(name: &str, mapping: &Mapping) -> Result<Color> {
    let mut attrs = Attributes::new();
    for (key, value) in mapping {
        let key = key
            .as_str()
            .ok_or_else(|| parse_error(format!("Attribute names of '{}' must be strings", name)))?;
        if key == "name" {
            continue;
        }
        let value = AttributeValue::parse_value(value).map_err(|message| {
            DefinitionError::InvalidAttribute {
                color: name.to_string(),
                key: key.to_string(),
                message,
            }
        })?;
        attrs.insert(key, value);
    }

    Color::from_attributes(name, &attrs).map_err(|source| DefinitionError::Color {
        color: name.to_string(),
        source,
    })
}

fn build_output(value: &Value, base_dir: Option<&Path>) -> Result<OutputRequest> {
    let entry = match value {
        Value::String(kind) => return Ok(OutputRequest::new(kind.clone())),
        Value::Mapping(entry) => entry,
        other => {
            return Err(parse_error(format!(
                "Output must be a kind name or a mapping, got {:?}",
                other
            )))
        }
    };

    let kind = entry
        .get("kind")
        .and_then(Value::as_str)
        .ok_or_else(|| parse_error("Output mapping needs a string 'kind'"))?;
    let mut request = OutputRequest::new(kind);

    if let Some(path) = optional_str(entry, "path", kind)? {
        request = request.with_base_path(resolve_relative(path, base_dir));
    }

    if let Some(template) = optional_str(entry, "naming", kind)? {
        let naming = NamingRule::template(template).map_err(|source| DefinitionError::Output {
            kind: kind.to_string(),
            source,
        })?;
        request = request.with_naming(naming);
    }

    Ok(request)
}

fn optional_str<'a>(entry: &'a Mapping, key: &str, kind: &str) -> Result<Option<&'a str>> {
    match entry.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(parse_error(format!(
            "Output '{}': '{}' must be a string, got {:?}",
            kind, key, other
        ))),
    }
}

fn resolve_relative(path: &str, base_dir: Option<&Path>) -> PathBuf {
    let path = Path::new(path);
    match base_dir {
        Some(base) if path.is_relative() => base.join(path),
        _ => path.to_path_buf(),
    }
}
