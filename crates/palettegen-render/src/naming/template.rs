//! MiniJinja-backed naming templates.

use std::sync::Arc;

use minijinja::{context, Environment};

use super::case;
use super::NamingRule;
use crate::error::{PaletteError, Result};

const TEMPLATE_NAME: &str = "naming";

/// Registers the casing filters on a MiniJinja environment.
///
/// - `camel`: `{{ "hot pink" | camel }}` → `hotPink`
/// - `snake`: `{{ "hotPink" | snake }}` → `hot_pink`
/// - `upper_first`: `{{ "ink" | upper_first }}` → `Ink`
/// - `lower_first`: `{{ "Ink" | lower_first }}` → `ink`
pub fn register_filters(env: &mut Environment<'static>) {
    env.add_filter("camel", |value: String| -> String { case::camel_case(&value) });
    env.add_filter("snake", |value: String| -> String { case::snake_case(&value) });
    env.add_filter("upper_first", |value: String| -> String {
        case::upper_first(&value)
    });
    env.add_filter("lower_first", |value: String| -> String {
        case::lower_first(&value)
    });
}

pub(super) fn compile(source: &str) -> Result<NamingRule> {
    let invalid = |err: minijinja::Error| PaletteError::InvalidNamingTemplate {
        template: source.to_string(),
        message: err.to_string(),
    };

    let mut env = Environment::new();
    register_filters(&mut env);
    env.add_template_owned(TEMPLATE_NAME, source.to_string())
        .map_err(invalid)?;

    // Unknown filters only surface at render time.
    render(&env, "sample color", "prefix").map_err(invalid)?;

    let env = Arc::new(env);
    Ok(NamingRule::labelled(
        format!("template({})", source),
        move |name, prefix| match render(&env, name, prefix) {
            Ok(identifier) => identifier,
            Err(err) => {
                tracing::warn!(color = name, error = %err, "naming template failed, using raw name");
                name.to_string()
            }
        },
    ))
}

fn render(
    env: &Environment<'static>,
    name: &str,
    prefix: &str,
) -> std::result::Result<String, minijinja::Error> {
    env.get_template(TEMPLATE_NAME)?
        .render(context! { name => name, prefix => prefix })
}
