//! Command implementations.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use console::style;
use palettegen_render::{build_targets, FormatKind, Layout, OutputDefaults};
use serde::Serialize;

use super::load;

/// One planned output as reported by `plan`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedOutput {
    pub kind: Layout,
    pub path: PathBuf,
}

/// Loads the definition and emits each target in request order.
///
/// Stops at the first failure; files already written stay on disk.
pub fn generate(
    file: &Path,
    defaults: &OutputDefaults,
    create_dirs: bool,
    dry_run: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let palette = load(file)?;
    let targets = build_targets(&palette, defaults).context("invalid output request")?;
    tracing::info!(
        prefix = palette.prefix(),
        colors = palette.colors().len(),
        targets = targets.len(),
        "generating palette"
    );

    for target in &targets {
        let output = target.produce(&palette);
        if dry_run {
            writeln!(out, "{} {}", style("==>").dim(), output.path.display())?;
            out.write_all(output.content.as_bytes())?;
            continue;
        }

        output.write(create_dirs)?;
        writeln!(
            out,
            "{} {} ({} bytes)",
            style("wrote").green(),
            output.path.display(),
            output.content.len()
        )?;
    }
    Ok(())
}

/// Lists `kind path` pairs without rendering anything.
pub fn plan(
    file: &Path,
    defaults: &OutputDefaults,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let palette = load(file)?;
    let planned: Vec<PlannedOutput> = build_targets(&palette, defaults)
        .context("invalid output request")?
        .iter()
        .map(|target| PlannedOutput {
            kind: target.layout(),
            path: target.resolve_path(&palette),
        })
        .collect();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&planned)?)?;
    } else {
        for entry in &planned {
            writeln!(out, "{} {}", entry.kind, entry.path.display())?;
        }
    }
    Ok(())
}

/// Lists the request kinds and the layouts each expands to.
pub fn kinds(out: &mut impl Write) -> anyhow::Result<()> {
    for kind in FormatKind::ALL {
        let layouts: Vec<&str> = kind.layouts().iter().map(|l| l.name()).collect();
        if layouts == [kind.as_str()] {
            writeln!(out, "{}", kind)?;
        } else {
            writeln!(out, "{:<12} -> {}", kind.as_str(), layouts.join(", "))?;
        }
    }
    Ok(())
}
