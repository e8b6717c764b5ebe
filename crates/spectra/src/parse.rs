//! CSS-style color notation parsing.
//!
//! Accepted forms:
//!
//! - **Hex**: `#rgb`, `#rrggbb` (and `#rgba`, `#rrggbbaa` when
//!   [`ParseOptions::allow_hex_alpha`] is set)
//! - **RGB**: `rgb(r, g, b)`, `rgba(r, g, b, a)` with integer channels and an
//!   alpha that may drop its leading zero (`.6`)
//! - **Named**: the CSS color names in [`crate::named`]
//!
//! Hex digits, function names and color names are case-insensitive.
//! Whitespace around the whole input, around the parentheses and around
//! commas is ignored.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, digit0, digit1, multispace0},
    combinator::{all_consuming, opt, recognize},
    multi::separated_list1,
    sequence::{delimited, pair, tuple},
};

use crate::convert::Rgb;
use crate::error::{ColorError, InvalidReason, Result};
use crate::named;

/// Switches that widen what the parser accepts.
///
/// The default is strict: only three- and six-digit hex is understood, so
/// `#deadbeef` is rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Accept `#rgba` and `#rrggbbaa`, reading the last nibble/byte as alpha.
    pub allow_hex_alpha: bool,
}

impl ParseOptions {
    /// Returns a copy with hex alpha parsing switched on or off.
    pub fn with_hex_alpha(mut self, allow: bool) -> Self {
        self.allow_hex_alpha = allow;
        self
    }
}

/// Parses a CSS notation into RGB channels and alpha.
///
/// # Examples
///
/// ```
/// use spectra::convert::Rgb;
/// use spectra::parse::{ParseOptions, parse_notation};
///
/// let (rgb, alpha) = parse_notation("#4Af", ParseOptions::default()).unwrap();
/// assert_eq!(rgb, Rgb::new(68, 170, 255));
/// assert_eq!(alpha, 1.0);
///
/// assert!(parse_notation("#deadbeef", ParseOptions::default()).is_err());
/// ```
pub fn parse_notation(input: &str, options: ParseOptions) -> Result<(Rgb, f64)> {
    let text = input.trim();
    if text.is_empty() {
        return Err(ColorError::invalid(input, InvalidReason::Empty));
    }

    if let Some(digits) = text.strip_prefix('#') {
        return parse_hex(input, digits, options);
    }

    if text.get(..3).is_some_and(|prefix| prefix.eq_ignore_ascii_case("rgb")) {
        return parse_rgb_function(input, text);
    }

    named::lookup(text)
        .map(|rgb| (rgb, 1.0))
        .ok_or_else(|| ColorError::invalid(input, InvalidReason::UnknownName))
}

fn parse_hex(input: &str, digits: &str, options: ParseOptions) -> Result<(Rgb, f64)> {
    let nibbles = digits
        .chars()
        .map(|c| {
            c.to_digit(16)
                .map(|d| d as u8)
                .ok_or_else(|| ColorError::invalid(input, InvalidReason::HexDigit(c)))
        })
        .collect::<Result<Vec<u8>>>()?;

    let short = |i: usize| nibbles[i] * 17;
    let long = |i: usize| nibbles[i] * 16 + nibbles[i + 1];

    match (nibbles.len(), options.allow_hex_alpha) {
        // #rgb -> #rrggbb
        (3, _) => Ok((Rgb::new(short(0), short(1), short(2)), 1.0)),
        (6, _) => Ok((Rgb::new(long(0), long(2), long(4)), 1.0)),
        (4, true) => Ok((
            Rgb::new(short(0), short(1), short(2)),
            f64::from(short(3)) / 255.0,
        )),
        (8, true) => Ok((
            Rgb::new(long(0), long(2), long(4)),
            f64::from(long(6)) / 255.0,
        )),
        (len, _) => Err(ColorError::invalid(input, InvalidReason::HexLength(len))),
    }
}

/// A plain decimal number: `12`, `-3`, `0.6`, `.6`, `1.`.
fn number(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(char('-')),
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
            recognize(pair(char('.'), digit1)),
        )),
    )))(input)
}

/// `rgb(...)` or `rgba(...)`, returning the function name and raw arguments.
fn rgb_function(input: &str) -> IResult<&str, (&str, Vec<&str>)> {
    all_consuming(pair(
        alt((tag_no_case("rgba"), tag_no_case("rgb"))),
        delimited(
            pair(multispace0, char('(')),
            separated_list1(char(','), delimited(multispace0, number, multispace0)),
            char(')'),
        ),
    ))(input)
}

fn parse_rgb_function(input: &str, text: &str) -> Result<(Rgb, f64)> {
    let (_, (name, args)) =
        rgb_function(text).map_err(|_| ColorError::invalid(input, InvalidReason::MalformedFunction))?;

    let arity = if name.eq_ignore_ascii_case("rgba") { 4 } else { 3 };
    if args.len() != arity {
        return Err(ColorError::invalid(input, InvalidReason::MalformedFunction));
    }

    let rgb = Rgb::new(
        parse_channel(input, args[0])?,
        parse_channel(input, args[1])?,
        parse_channel(input, args[2])?,
    );
    let alpha = match args.get(3) {
        Some(raw) => parse_alpha(input, raw)?,
        None => 1.0,
    };

    Ok((rgb, alpha))
}

fn parse_channel(input: &str, raw: &str) -> Result<u8> {
    raw.parse::<u8>()
        .map_err(|_| ColorError::invalid(input, InvalidReason::ChannelOutOfRange(raw.to_string())))
}

fn parse_alpha(input: &str, raw: &str) -> Result<f64> {
    match raw.parse::<f64>() {
        // `-0` is accepted as zero
        Ok(alpha) if (0.0..=1.0).contains(&alpha) => Ok(alpha.abs()),
        _ => Err(ColorError::invalid(
            input,
            InvalidReason::AlphaOutOfRange(raw.to_string()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<(Rgb, f64)> {
        parse_notation(input, ParseOptions::default())
    }

    fn reason(input: &str) -> InvalidReason {
        parse(input).unwrap_err().reason().clone()
    }

    // ==================== HEX ====================

    #[test]
    fn hex_short() {
        assert_eq!(parse("#4Af").unwrap(), (Rgb::new(68, 170, 255), 1.0));
        assert_eq!(parse("#000").unwrap(), (Rgb::new(0, 0, 0), 1.0));
    }

    #[test]
    fn hex_long_any_case() {
        assert_eq!(parse("#FF194b").unwrap(), (Rgb::new(255, 25, 75), 1.0));
        assert_eq!(parse("#ff194b").unwrap(), parse("#FF194B").unwrap());
    }

    #[test]
    fn hex_alpha_rejected_by_default() {
        assert_eq!(reason("#deadbeef"), InvalidReason::HexLength(8));
        assert_eq!(reason("#f008"), InvalidReason::HexLength(4));
    }

    #[test]
    fn hex_alpha_when_enabled() {
        let options = ParseOptions::default().with_hex_alpha(true);
        let (rgb, alpha) = parse_notation("#deadbeef", options).unwrap();
        assert_eq!(rgb, Rgb::new(0xde, 0xad, 0xbe));
        assert!((alpha - 0xef as f64 / 255.0).abs() < 1e-12);

        let (rgb, alpha) = parse_notation("#f008", options).unwrap();
        assert_eq!(rgb, Rgb::new(255, 0, 0));
        assert!((alpha - 0x88 as f64 / 255.0).abs() < 1e-12);

        let (_, alpha) = parse_notation("#abcd", options).unwrap();
        assert!((alpha - 0xdd as f64 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn hex_errors() {
        assert_eq!(reason("#gg0000"), InvalidReason::HexDigit('g'));
        assert_eq!(reason("#ff00000"), InvalidReason::HexLength(7));
        assert_eq!(reason("#ff"), InvalidReason::HexLength(2));
        assert_eq!(reason("#"), InvalidReason::HexLength(0));
    }

    // ==================== RGB FUNCTIONS ====================

    #[test]
    fn rgb_function_spacing() {
        assert_eq!(parse("rgb(255,25, 75)").unwrap(), (Rgb::new(255, 25, 75), 1.0));
        assert_eq!(
            parse("rgb( 255 , 25 , 75 )").unwrap(),
            (Rgb::new(255, 25, 75), 1.0)
        );
        assert_eq!(parse("RGB(1,2,3)").unwrap(), (Rgb::new(1, 2, 3), 1.0));
    }

    #[test]
    fn rgba_function_alpha_forms() {
        assert_eq!(
            parse("rgba(255,25, 75, 0.6)").unwrap(),
            (Rgb::new(255, 25, 75), 0.6)
        );
        assert_eq!(
            parse("rgba(255,25, 75, .6)").unwrap(),
            (Rgb::new(255, 25, 75), 0.6)
        );
        assert_eq!(parse("rgba(0,0,0,1)").unwrap(), (Rgb::new(0, 0, 0), 1.0));
        assert_eq!(parse("rgba(0,0,0,0)").unwrap(), (Rgb::new(0, 0, 0), 0.0));
    }

    #[test]
    fn negative_zero_alpha_is_positive() {
        let (_, alpha) = parse("rgba(0,0,0,-0)").unwrap();
        assert_eq!(alpha, 0.0);
        assert!(alpha.is_sign_positive());
    }

    #[test]
    fn rgb_function_errors() {
        assert_eq!(
            reason("rgb(256, 0, 0)"),
            InvalidReason::ChannelOutOfRange("256".into())
        );
        assert_eq!(
            reason("rgb(-1, 0, 0)"),
            InvalidReason::ChannelOutOfRange("-1".into())
        );
        assert_eq!(
            reason("rgb(1.5, 0, 0)"),
            InvalidReason::ChannelOutOfRange("1.5".into())
        );
        assert_eq!(
            reason("rgba(0, 0, 0, 1.5)"),
            InvalidReason::AlphaOutOfRange("1.5".into())
        );
        assert_eq!(reason("rgb(255, 0)"), InvalidReason::MalformedFunction);
        assert_eq!(reason("rgb(1, 2, 3, 0.5)"), InvalidReason::MalformedFunction);
        assert_eq!(reason("rgba(1, 2, 3)"), InvalidReason::MalformedFunction);
        assert_eq!(reason("rgb(1, 2, 3"), InvalidReason::MalformedFunction);
        assert_eq!(reason("rgb(a, b, c)"), InvalidReason::MalformedFunction);
        assert_eq!(reason("rgb(1, 2, 3) x"), InvalidReason::MalformedFunction);
    }

    // ==================== NAMES & MISC ====================

    #[test]
    fn named_colors() {
        assert_eq!(parse("white").unwrap(), (Rgb::new(255, 255, 255), 1.0));
        assert_eq!(parse("Teal").unwrap(), (Rgb::new(0, 128, 128), 1.0));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(parse("  #ff0000  ").unwrap(), (Rgb::new(255, 0, 0), 1.0));
        assert_eq!(parse("\tred\n").unwrap(), (Rgb::new(255, 0, 0), 1.0));
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(reason("not a real color"), InvalidReason::UnknownName);
        assert_eq!(reason(""), InvalidReason::Empty);
        assert_eq!(reason("   "), InvalidReason::Empty);
        assert_eq!(reason("hsl(0, 100%, 50%)"), InvalidReason::UnknownName);
    }
}
