//! Objective-C `UIColor` category, split into header and implementation.
//!
//! Both files share one banner and category name. The header declares one
//! class method per color; the implementation returns a constructed color,
//! using `colorWithWhite:alpha:` for white-based colors.

use super::Spacing;
use crate::color::{Color, Component};
use crate::naming::case::upper_first;
use crate::palette::Palette;

pub(super) const HEADER_SPACING: Spacing = Spacing::new(2, 1, 2);
pub(super) const IMPL_SPACING: Spacing = Spacing::new(2, 2, 2);

fn category(palette: &Palette) -> String {
    format!("{}Color", upper_first(palette.prefix()))
}

pub(super) fn filename(palette: &Palette, is_header: bool) -> String {
    let extension = if is_header { "h" } else { "m" };
    format!("Prefix+{}.{}", category(palette), extension)
}

pub(super) fn prefix(palette: &Palette, is_header: bool) -> String {
    let category = category(palette);
    let banner = format!(
        "//\n//  {}\n//\n//  Generated by palettegen. Do not edit by hand.\n//\n\n",
        filename(palette, is_header)
    );
    if is_header {
        format!(
            "{}#import <UIKit/UIKit.h>\n\n@interface UIColor ({})\n",
            banner, category
        )
    } else {
        format!(
            "{}#import \"{}\"\n\n@implementation UIColor ({})\n",
            banner,
            filename(palette, true),
            category
        )
    }
}

fn signature(identifier: &str) -> String {
    format!("+ (UIColor *){}", identifier)
}

pub(super) fn declaration(identifier: &str) -> String {
    format!("{};\n", signature(identifier))
}

pub(super) fn definition(color: &Color, identifier: &str) -> String {
    format!(
        "{}\n{{\n    return {};\n}}\n",
        signature(identifier),
        constructor(color)
    )
}

fn constructor(color: &Color) -> String {
    let c = color.components();
    match color.white() {
        Some(white) => format!(
            "[UIColor colorWithWhite:{:.2} alpha:{:.2}]",
            white,
            color.alpha()
        ),
        None => format!(
            "[UIColor colorWithRed:{:.2} green:{:.2} blue:{:.2} alpha:{:.2}]",
            c.get_or_zero(Component::Red),
            c.get_or_zero(Component::Green),
            c.get_or_zero(Component::Blue),
            color.alpha()
        ),
    }
}

pub(super) fn suffix() -> String {
    "@end\n".to_string()
}
