//! End-to-end tests: attributes → palette → targets → text.

use palettegen_render::{
    build_targets, Attributes, Color, Layout, NamingRule, OutputDefaults, OutputRequest, Palette,
    PaletteError,
};

fn defaults() -> OutputDefaults {
    OutputDefaults::new("/home/me", "/work/app")
}

fn sample_palette(count: usize) -> Palette {
    let mut palette = Palette::new("abc");
    for i in 0..count {
        let attrs = if i % 2 == 0 {
            Attributes::new().with("r", (i * 20) as i64).with("g", 10).with("b", 200)
        } else {
            Attributes::new().with("w", 0.5).with("a", 0.8)
        };
        palette.add_color(format!("color {}", i), &attrs).unwrap();
    }
    palette
}

fn count_methods(text: &str) -> usize {
    text.lines().filter(|l| l.starts_with("+ (UIColor *)")).count()
}

// ============================================================================
// Objective-C pair
// ============================================================================

#[test]
fn objc_request_yields_two_targets_with_every_color() {
    for n in [0usize, 1, 2, 5] {
        let palette = sample_palette(n).with_output(OutputRequest::new("objc"));
        let targets = build_targets(&palette, &defaults()).unwrap();
        assert_eq!(targets.len(), 2);
        for target in &targets {
            assert_eq!(count_methods(&target.render(&palette)), n, "n = {n}");
        }
    }
}

#[test]
fn objc_header_full_text() {
    let mut palette = Palette::new("abc").with_output(OutputRequest::new("objc-header"));
    palette
        .add_color("hotPink", &Attributes::new().with("hex", "#FF69B4"))
        .unwrap();
    palette
        .add_color("shadow", &Attributes::new().with("w", 0).with("a", 0.4))
        .unwrap();

    let targets = build_targets(&palette, &defaults()).unwrap();
    assert_eq!(
        targets[0].render(&palette),
        "//
//  Prefix+AbcColor.h
//
//  Generated by palettegen. Do not edit by hand.
//

#import <UIKit/UIKit.h>

@interface UIColor (AbcColor)


+ (UIColor *)abc_hotPinkColor;

+ (UIColor *)abc_shadowColor;


@end
"
    );
}

#[test]
fn objc_impl_full_text() {
    let mut palette = Palette::new("abc").with_output(OutputRequest::new("objc-impl"));
    palette
        .add_color("hotPink", &Attributes::new().with("hex", "#FF69B4"))
        .unwrap();
    palette
        .add_color("shadow", &Attributes::new().with("w", 0).with("a", 0.4))
        .unwrap();

    let targets = build_targets(&palette, &defaults()).unwrap();
    assert_eq!(
        targets[0].render(&palette),
        "//
//  Prefix+AbcColor.m
//
//  Generated by palettegen. Do not edit by hand.
//

#import \"Prefix+AbcColor.h\"

@implementation UIColor (AbcColor)


+ (UIColor *)abc_hotPinkColor
{
    return [UIColor colorWithRed:1.00 green:0.41 blue:0.71 alpha:1.00];
}


+ (UIColor *)abc_shadowColor
{
    return [UIColor colorWithWhite:0.00 alpha:0.40];
}


@end
"
    );
}

#[test]
fn header_has_one_blank_line_between_colors_and_impl_two() {
    let palette = sample_palette(2).with_output(OutputRequest::new("objc"));
    let targets = build_targets(&palette, &defaults()).unwrap();

    let header = targets[0].render(&palette);
    assert!(header.contains("Color;\n\n+ (UIColor *)"));
    assert!(!header.contains("Color;\n\n\n+ (UIColor *)"));

    let implementation = targets[1].render(&palette);
    assert!(implementation.contains("}\n\n\n+ (UIColor *)"));
    assert!(!implementation.contains("}\n\n\n\n+ (UIColor *)"));
}

// ============================================================================
// Paths and naming
// ============================================================================

#[test]
fn default_outputs_land_in_default_directories() {
    let palette = sample_palette(1);
    let paths: Vec<String> = build_targets(&palette, &defaults())
        .unwrap()
        .iter()
        .map(|t| t.resolve_path(&palette).display().to_string())
        .collect();
    assert_eq!(
        paths,
        vec![
            "/home/me/Library/Colors/abc-palette.clr",
            "/work/app/Prefix+AbcColor.h",
            "/work/app/Prefix+AbcColor.m",
        ]
    );
}

#[test]
fn palette_default_naming_is_lower_camel_case() {
    let palette = Palette::new("abc")
        .with_color(Color::from_attributes("hotPink", &Attributes::new()).unwrap())
        .with_color(Color::from_attributes("Deep Sea", &Attributes::new()).unwrap());
    let targets = build_targets(&palette, &defaults()).unwrap();
    let clr = targets[0].render(&palette);
    assert!(clr.contains(" hotPink\n"));
    assert!(clr.contains(" deepSea\n"));
}

#[test]
fn custom_naming_applies_to_both_objc_targets() {
    let naming = NamingRule::template("{{ prefix | upper }}{{ name | camel | upper_first }}").unwrap();
    let palette = sample_palette(1).with_output(OutputRequest::new("objc").with_naming(naming));
    for target in build_targets(&palette, &defaults()).unwrap() {
        assert!(target.render(&palette).contains("+ (UIColor *)ABCColor0"));
    }
}

#[test]
fn swift_output_is_empty_but_placed() {
    let palette = sample_palette(3).with_output(OutputRequest::new("swift"));
    let targets = build_targets(&palette, &defaults()).unwrap();
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].layout(), Layout::Swift);
    assert_eq!(targets[0].render(&palette), "");
    assert_eq!(
        targets[0].resolve_path(&palette).display().to_string(),
        "/work/app/AbcColor.swift"
    );
}

#[test]
fn unknown_kind_fails_before_rendering() {
    let palette = sample_palette(1).with_output(OutputRequest::new("android"));
    match build_targets(&palette, &defaults()) {
        Err(PaletteError::UnknownFormatKind { kind, .. }) => assert_eq!(kind, "android"),
        other => panic!("unexpected result: {other:?}"),
    }
}

// ============================================================================
// Definition files
// ============================================================================

#[test]
fn yaml_definition_through_the_pipeline() {
    let palette = palettegen_render::definition::from_yaml(
        r##"
        prefix: abc
        outputs: [palette]
        colors:
            orange: { hex: "#FF8000" }
            ink: { w: 0.1, a: 0.9 }
        "##,
    )
    .unwrap();

    let targets = build_targets(&palette, &defaults()).unwrap();
    assert_eq!(
        targets[0].render(&palette),
        "PALETTE\n1.000 0.502 0.000 1.000 orange\n0.100 0.100 0.100 0.900 ink\n"
    );
}
