//! Parsing and serialization of CSS notations.

use spectra::{Color, InvalidReason, ParseOptions};

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn serializes_shorthand_hex() {
    let color = Color::parse("#4Af").unwrap();
    insta::assert_snapshot!(color.hex(), @"#44aaff");
    insta::assert_snapshot!(color.rgb_string(), @"rgb(68,170,255)");
    insta::assert_snapshot!(color.rgba_string(), @"rgba(68,170,255,1)");
    insta::assert_snapshot!(color.hsl_string(), @"hsl(207,1,0.63)");
    insta::assert_snapshot!(color.hsla_string(), @"hsla(207,1,0.63,1)");
}

#[test]
fn serializes_translucent_color() {
    let color = Color::rgba(255, 25, 75, 0.6);
    insta::assert_snapshot!(color.rgba_string(), @"rgba(255,25,75,0.6)");
    insta::assert_snapshot!(color.to_string(), @"rgba(255,25,75,0.6)");
    insta::assert_snapshot!(color.hsla_string(), @"hsla(347,1,0.55,0.6)");
}

#[test]
fn serializes_achromatic_colors() {
    insta::assert_snapshot!(Color::rgb(0, 0, 0).hsl_string(), @"hsl(0,0,0)");
    insta::assert_snapshot!(Color::rgb(255, 255, 255).hsl_string(), @"hsl(0,0,1)");
}

#[test]
fn rgb_number_round_trips() {
    let color = Color::parse("#4Af").unwrap();
    assert_eq!(color.rgb_number(), 0x44aaff);
    assert_eq!(Color::from_rgb_number(0x44aaff), color);
    assert_eq!(Color::from_rgb_number(0xff194b).hex(), "#ff194b");
}

#[test]
fn serialized_forms_parse_back() {
    let color = Color::rgba(12, 200, 99, 0.25);
    assert_eq!(Color::parse(&color.rgba_string()).unwrap(), color);
    assert_eq!(Color::parse(&color.hex()).unwrap(), color.with_alpha(1.0));
    assert_eq!(Color::parse(&color.rgb_string()).unwrap(), color.with_alpha(1.0));
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn parses_hex_case_insensitively() {
    assert_eq!(Color::parse("#FF194b").unwrap().hex(), "#ff194b");
    assert_eq!(Color::parse("#4af").unwrap(), Color::parse("#44AAFF").unwrap());
}

#[test]
fn parses_functions_with_whitespace() {
    let expected = Color::rgba(255, 25, 75, 0.6);
    assert_eq!(Color::parse("rgba(255,25, 75, 0.6)").unwrap(), expected);
    assert_eq!(Color::parse("  RGBA( 255 , 25 , 75 , .6 )  ").unwrap(), expected);
    assert_eq!(Color::parse("rgb(255,25, 75)").unwrap(), expected.with_alpha(1.0));
}

#[test]
fn parses_named_colors() {
    assert_eq!(Color::parse("white").unwrap().hex(), "#ffffff");
    assert_eq!(Color::parse("teal").unwrap().hex(), "#008080");
    assert_eq!(Color::parse("RebeccaPurple").unwrap().hex(), "#663399");
}

#[test]
fn negative_zero_alpha_prints_as_zero() {
    let color = Color::parse("rgba(0,0,0,-0)").unwrap();
    insta::assert_snapshot!(color.rgba_string(), @"rgba(0,0,0,0)");
    assert_eq!(Color::rgba(0, 0, 0, -0.0).rgba_string(), "rgba(0,0,0,0)");
}

// ============================================================================
// Rejected Notations
// ============================================================================

fn reason(text: &str) -> InvalidReason {
    Color::parse(text).unwrap_err().reason().clone()
}

#[test]
fn rejects_bad_hex() {
    assert_eq!(reason("#deadbeef"), InvalidReason::HexLength(8));
    assert_eq!(reason("#12"), InvalidReason::HexLength(2));
    assert_eq!(reason("#12g"), InvalidReason::HexDigit('g'));
}

#[test]
fn rejects_bad_functions() {
    assert_eq!(reason("rgb(1,2)"), InvalidReason::MalformedFunction);
    assert_eq!(reason("rgba(1,2,3)"), InvalidReason::MalformedFunction);
    assert_eq!(reason("rgb(1,2,3"), InvalidReason::MalformedFunction);
    assert_eq!(
        reason("rgb(256,0,0)"),
        InvalidReason::ChannelOutOfRange("256".to_string())
    );
    assert_eq!(
        reason("rgb(1.5,0,0)"),
        InvalidReason::ChannelOutOfRange("1.5".to_string())
    );
    assert_eq!(
        reason("rgba(0,0,0,1.5)"),
        InvalidReason::AlphaOutOfRange("1.5".to_string())
    );
}

#[test]
fn rejects_unknown_text() {
    assert_eq!(reason("not a real color"), InvalidReason::UnknownName);
    assert_eq!(reason("   "), InvalidReason::Empty);
}

// ============================================================================
// Parse Options
// ============================================================================

#[test]
fn hex_alpha_is_opt_in() {
    let options = ParseOptions::default().with_hex_alpha(true);

    let color = Color::parse_with("#deadbeef", options).unwrap();
    assert_eq!(color.hex(), "#deadbe");
    assert!((color.alpha() - 239.0 / 255.0).abs() < 1e-12);

    let color = Color::parse_with("#f00a", options).unwrap();
    assert_eq!(color.hex(), "#ff0000");
    assert!((color.alpha() - 170.0 / 255.0).abs() < 1e-12);

    assert_eq!(
        Color::parse_with("#4af", options).unwrap(),
        Color::parse("#4af").unwrap()
    );
}
