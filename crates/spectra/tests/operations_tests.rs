//! Derived operation tests: adjustments, mixing, gradients, palettes and blends.

use spectra::{Color, Harmony};

fn base() -> Color {
    Color::rgba(255, 25, 75, 0.6)
}

fn hexes(colors: &[Color]) -> String {
    colors.iter().map(Color::hex).collect::<Vec<_>>().join(" ")
}

// ============================================================================
// Single-Color Adjustments
// ============================================================================

#[test]
fn complement() {
    let complement = base().complement();
    assert_eq!(complement.hex(), "#19ffcd");
    assert_eq!(complement.alpha(), 0.6);
}

#[test]
fn negate_and_invert() {
    assert_eq!(base().negate().hex(), "#00e6b4");
    assert_eq!(base().invert(), base().negate());
}

#[test]
fn lighten() {
    assert_eq!(base().lighten(10.0).hex(), "#ff4c73");
}

#[test]
fn darken() {
    assert_eq!(base().darken(10.0).hex(), "#e50032");
}

#[test]
fn saturate() {
    // Already fully saturated.
    assert_eq!(base().saturate(10.0).hex(), "#ff194b");
}

#[test]
fn desaturate() {
    assert_eq!(base().desaturate(10.0).hex(), "#f42552");
}

#[test]
fn fade_in() {
    assert!((base().fade_in(7.0).alpha() - 0.67).abs() < 1e-9);
}

#[test]
fn fade_out() {
    assert!((base().fade_out(5.0).alpha() - 0.55).abs() < 1e-9);
}

#[test]
fn adjustments_leave_receiver() {
    let color = base();
    let _ = color.lighten(30.0).desaturate(40.0).fade_out(20.0);
    assert_eq!(color, base());
    assert_eq!(color.hex(), "#ff194b");
}

// ============================================================================
// Luma and Grayscale
// ============================================================================

#[test]
fn luma() {
    assert!((base().luma() - 77.5).abs() < 0.05);
}

#[test]
fn grayscale() {
    let gray = base().grayscale();
    assert_eq!(gray.hex(), "#8c8c8c");
    assert_eq!(gray.alpha(), 0.6);
    assert_eq!(base().luma_grayscale().hex(), "#4e4e4e");
}

#[test]
fn dark_and_light() {
    assert!(base().is_dark());
    assert!(!base().is_light());
    assert!(Color::parse("white").unwrap().is_light());
}

// ============================================================================
// Mixing and Gradients
// ============================================================================

#[test]
fn mix() {
    let color1 = Color::parse("#0f7").unwrap();
    let color2 = Color::parse("#f87").unwrap();

    assert_eq!(color1.mix(color2, 0.0).unwrap().hex(), "#00ff77");
    assert_eq!(color1.mix(color2, 20.0).unwrap().hex(), "#33e777");
    assert_eq!(color1.mix("#f87", 20.0).unwrap().hex(), "#33e777");
    assert_eq!(color1.mix(&color2, 100.0).unwrap(), color2);
}

#[test]
fn mix_rejects_absent_input() {
    let color = Color::parse("#0f7").unwrap();
    assert!(color.mix(None::<Color>, 50.0).is_err());
    assert!(color.mix("not a real color", 50.0).is_err());
}

#[test]
fn gradient() {
    let black = Color::parse("#000").unwrap();
    let gradient = black.gradient("#505050", 6).unwrap();
    assert_eq!(gradient.len(), 6);
    insta::assert_snapshot!(
        hexes(&gradient),
        @"#000000 #101010 #202020 #303030 #404040 #505050"
    );
}

#[test]
fn gradient_endpoints() {
    let from = base();
    let to = Color::rgb(10, 200, 90);
    let gradient = from.gradient(to, 9).unwrap();
    assert_eq!(gradient.first(), Some(&from));
    assert_eq!(gradient.last(), Some(&to));
}

// ============================================================================
// Harmony
// ============================================================================

#[test]
fn harmony_default() {
    let palette = base().harmony(None, None);
    assert_eq!(palette.len(), 2);
    insta::assert_snapshot!(hexes(&palette), @"#ff194b #19ffcd");
    assert_eq!(palette[1], base().complement());
}

#[test]
fn harmony_analogous() {
    let palette = base().harmony(Some("analogous"), Some(1));
    insta::assert_snapshot!(hexes(&palette), @"#ff19be #ff194b #ff5a19");
}

#[test]
fn harmony_triad() {
    let palette = base().harmony(Some("triad"), None);
    insta::assert_snapshot!(hexes(&palette), @"#ff194b #4bff19 #194bff");
}

#[test]
fn harmony_split_complementary() {
    let palette = base().harmony(Some("triad"), Some(-5));
    insta::assert_snapshot!(hexes(&palette), @"#4bff19 #194bff #ff194b");
}

#[test]
fn harmony_rectangle() {
    let palette = base().harmony(Some("rectangle"), None);
    insta::assert_snapshot!(hexes(&palette), @"#ff194b #ffcd19 #19ffcd #194bff");
}

#[test]
fn harmony_square() {
    let palette = base().harmony(Some("square"), None);
    insta::assert_snapshot!(hexes(&palette), @"#ff194b #beff19 #19ffcd #5a19ff");
}

#[test]
fn harmony_unknown_scheme() {
    let palette = base().harmony(Some("foo"), None);
    assert_eq!(hexes(&palette), hexes(&base().harmony(None, None)));
}

#[test]
fn harmony_typed_scheme() {
    assert_eq!(
        base().harmony_of(Harmony::Square, 0),
        base().harmony(Some("square"), None)
    );
}

// ============================================================================
// Blend Modes
// ============================================================================

#[test]
fn multiply() {
    let color1 = Color::parse("#0f7").unwrap();
    let color2 = Color::parse("#f87").unwrap();

    assert_eq!(color1.multiply(color2).unwrap().hex(), "#008838");
    assert_eq!(color1.multiply("#f87").unwrap().hex(), "#008838");
    assert!(color1.multiply(None::<&str>).is_err());
}

#[test]
fn screen() {
    let color1 = Color::parse("#0f7").unwrap();
    let color2 = Color::parse("#f87").unwrap();

    assert_eq!(color1.screen(color2).unwrap().hex(), "#ffffb6");
    assert_eq!(color1.screen("#f87").unwrap().hex(), "#ffffb6");
    assert!(color1.screen(None::<&str>).is_err());
}
