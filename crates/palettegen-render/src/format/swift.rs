//! Swift extension output.
//!
//! Only file placement is defined for now; rendering produces no text.

use super::Spacing;
use crate::naming::case::upper_first;
use crate::palette::Palette;

pub(super) const SPACING: Spacing = Spacing::new(0, 0, 0);

pub(super) fn filename(palette: &Palette) -> String {
    format!("{}Color.swift", upper_first(palette.prefix()))
}
