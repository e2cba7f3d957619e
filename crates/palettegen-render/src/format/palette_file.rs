//! Plain color list, one `r g b a name` line per color.

use std::path::{Path, PathBuf};

use super::Spacing;
use crate::color::{Color, Component};
use crate::palette::Palette;

pub(super) const SPACING: Spacing = Spacing::new(0, 0, 0);

const HEADER: &str = "PALETTE";

/// `<home>/Library/Colors`, where user color lists live.
pub(super) fn default_directory(home: &Path) -> PathBuf {
    home.join("Library").join("Colors")
}

pub(super) fn filename(palette: &Palette) -> String {
    format!("{}-palette.clr", palette.prefix())
}

pub(super) fn prefix() -> String {
    format!("{}\n", HEADER)
}

pub(super) fn color_line(color: &Color, identifier: &str) -> String {
    let c = color.components();
    format!(
        "{:.3} {:.3} {:.3} {:.3} {}\n",
        c.get_or_zero(Component::Red),
        c.get_or_zero(Component::Green),
        c.get_or_zero(Component::Blue),
        c.get_or_zero(Component::Alpha),
        identifier
    )
}
