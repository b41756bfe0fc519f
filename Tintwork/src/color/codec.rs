//! Channel conversions between hex strings, byte triples and normalized floats
//!
//! Every function here is pure. Numeric input is clamped, never rejected;
//! only string parsing can fail.

use crate::error::ParseError;

/// Largest value of a byte channel, as a float divisor.
const CHANNEL_MAX: f32 = 255.0;

/// Number of hex digits in a `RRGGBB` string.
const HEX_DIGITS: usize = 6;

/// Scale normalized channels to bytes.
///
/// Each channel is multiplied by 255, rounded to nearest and clamped to
/// `0..=255`. NaN maps to 0.
#[must_use]
pub fn byte_channels_from_normalized(r: f32, g: f32, b: f32) -> (u8, u8, u8) {
    (quantize(r), quantize(g), quantize(b))
}

fn quantize(c: f32) -> u8 {
    // `as` saturates and sends NaN to 0
    (c * CHANNEL_MAX).round().clamp(0.0, CHANNEL_MAX) as u8
}

/// Convert byte channels to normalized `0.0..=1.0` floats.
#[must_use]
pub fn normalized_from_byte_channels(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    (
        f32::from(r) / CHANNEL_MAX,
        f32::from(g) / CHANNEL_MAX,
        f32::from(b) / CHANNEL_MAX,
    )
}

/// Clamp untrusted integers into the byte channel range.
#[must_use]
pub fn clamp_byte_channels(r: i64, g: i64, b: i64) -> (u8, u8, u8) {
    (clamp_channel(r), clamp_channel(g), clamp_channel(b))
}

fn clamp_channel(c: i64) -> u8 {
    c.clamp(0, i64::from(u8::MAX)) as u8
}

/// Format byte channels as `#RRGGBB` (uppercase, zero-padded).
#[must_use]
pub fn hex_string_from_byte_channels(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// Parse a `RRGGBB` string, with or without a single leading `#`.
///
/// Exactly six hex digits are required. Shorthand like `FFF` is rejected
/// rather than guessed at, as is anything that would not fit in 24 bits.
pub fn byte_channels_from_hex_string(hex: &str) -> Result<(u8, u8, u8), ParseError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.is_empty() {
        return Err(ParseError::Empty);
    }

    if let Some(ch) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ParseError::InvalidHexDigit { ch });
    }

    // All ASCII from here, so byte length == char count
    if digits.len() != HEX_DIGITS {
        return Err(ParseError::InvalidLength { len: digits.len() });
    }

    let value = u32::from_str_radix(digits, 16).map_err(|_| ParseError::InvalidLength {
        len: digits.len(),
    })?;

    Ok((
        ((value >> 16) & 0xFF) as u8,
        ((value >> 8) & 0xFF) as u8,
        (value & 0xFF) as u8,
    ))
}

/// Parse one decimal channel field.
///
/// Surrounding whitespace and a leading sign are accepted. Integers outside
/// `0..=255` are clamped, including ones too large for `i64`. Anything that
/// is not an integer is rejected.
pub fn byte_channel_from_decimal(text: &str) -> Result<u8, ParseError> {
    use std::num::IntErrorKind;

    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    match text.parse::<i64>() {
        Ok(value) => Ok(clamp_channel(value)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(u8::MAX),
            IntErrorKind::NegOverflow => Ok(0),
            _ => Err(ParseError::NotANumber {
                text: text.to_string(),
            }),
        },
    }
}

/// Parse three decimal channel fields, failing on the first malformed one.
pub fn byte_channels_from_decimal(r: &str, g: &str, b: &str) -> Result<(u8, u8, u8), ParseError> {
    Ok((
        byte_channel_from_decimal(r)?,
        byte_channel_from_decimal(g)?,
        byte_channel_from_decimal(b)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_formatting_is_zero_padded() {
        assert_eq!(hex_string_from_byte_channels(0, 0, 0), "#000000");
        assert_eq!(hex_string_from_byte_channels(255, 255, 255), "#FFFFFF");
        assert_eq!(hex_string_from_byte_channels(10, 0, 255), "#0A00FF");
        assert_eq!(hex_string_from_byte_channels(1, 2, 3), "#010203");
    }

    #[test]
    fn test_hex_parse_prefix_insensitive() {
        assert_eq!(byte_channels_from_hex_string("BADA55"), Ok((186, 218, 85)));
        assert_eq!(byte_channels_from_hex_string("#BADA55"), Ok((186, 218, 85)));
        assert_eq!(byte_channels_from_hex_string("#bada55"), Ok((186, 218, 85)));
    }

    #[test]
    fn test_hex_parse_rejects_malformed() {
        assert_eq!(
            byte_channels_from_hex_string("ZZZZZZ"),
            Err(ParseError::InvalidHexDigit { ch: 'Z' })
        );
        assert_eq!(
            byte_channels_from_hex_string("FFF"),
            Err(ParseError::InvalidLength { len: 3 })
        );
        assert_eq!(
            byte_channels_from_hex_string("1FFFFFF"),
            Err(ParseError::InvalidLength { len: 7 })
        );
        assert_eq!(byte_channels_from_hex_string(""), Err(ParseError::Empty));
        assert_eq!(byte_channels_from_hex_string("#"), Err(ParseError::Empty));
    }

    #[test]
    fn test_hex_parse_strips_only_one_prefix() {
        assert_eq!(
            byte_channels_from_hex_string("##BADA55"),
            Err(ParseError::InvalidHexDigit { ch: '#' })
        );
    }

    #[test]
    fn test_hex_parse_rejects_signs_and_whitespace() {
        assert!(byte_channels_from_hex_string("+BADA5").is_err());
        assert!(byte_channels_from_hex_string(" BADA55").is_err());
        assert!(byte_channels_from_hex_string("BADA55\n").is_err());
    }

    #[test]
    fn test_hex_roundtrip_exact() {
        for v in 0..=255u8 {
            for (r, g, b) in [(v, 0, 0), (0, v, 0), (0, 0, v), (v, 255 - v, v / 2)] {
                let hex = hex_string_from_byte_channels(r, g, b);
                assert_eq!(byte_channels_from_hex_string(&hex), Ok((r, g, b)), "{hex}");
            }
        }
    }

    #[test]
    fn test_clamp_byte_channels() {
        assert_eq!(clamp_byte_channels(-5, 300, 12), (0, 255, 12));
        assert_eq!(clamp_byte_channels(i64::MIN, i64::MAX, 0), (0, 255, 0));
        assert_eq!(clamp_byte_channels(0, 128, 255), (0, 128, 255));
        assert_eq!(clamp_byte_channels(-1, 0, 256), (0, 0, 255));
        assert_eq!(clamp_byte_channels(255, 256, -1), (255, 255, 0));
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let once = clamp_byte_channels(-40, 999, 77);
        let twice = clamp_byte_channels(i64::from(once.0), i64::from(once.1), i64::from(once.2));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_byte_channels_from_normalized() {
        assert_eq!(byte_channels_from_normalized(0.0, 0.5, 1.0), (0, 128, 255));
        assert_eq!(byte_channels_from_normalized(-0.2, 1.7, f32::NAN), (0, 255, 0));
        assert_eq!(
            byte_channels_from_normalized(f32::NEG_INFINITY, f32::INFINITY, 0.2),
            (0, 255, 51)
        );
    }

    #[test]
    fn test_normalized_from_byte_channels() {
        let (r, g, b) = normalized_from_byte_channels(0, 51, 255);
        assert!(r.abs() < f32::EPSILON);
        assert!((g - 0.2).abs() < 1e-6);
        assert!((b - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_quantization_error_bounded() {
        // 0.0..=1.0 in steps of 1/1000
        for step in 0..=1000u16 {
            let f = f32::from(step) / 1000.0;
            let (r, _, _) = byte_channels_from_normalized(f, f, f);
            let (back, _, _) = normalized_from_byte_channels(r, r, r);
            assert!((back - f).abs() <= 1.0 / 255.0, "{f} came back as {back}");
        }
    }

    #[test]
    fn test_decimal_channel_parsing() {
        assert_eq!(byte_channel_from_decimal("0"), Ok(0));
        assert_eq!(byte_channel_from_decimal("186"), Ok(186));
        assert_eq!(byte_channel_from_decimal("300"), Ok(255));
        assert_eq!(byte_channel_from_decimal("-7"), Ok(0));
        assert_eq!(byte_channel_from_decimal("99999999999999999999999"), Ok(255));
        assert_eq!(byte_channel_from_decimal(""), Err(ParseError::Empty));
        assert_eq!(byte_channel_from_decimal(" 12"), Ok(12));
        assert_eq!(byte_channel_from_decimal("12 "), Ok(12));
        assert_eq!(byte_channel_from_decimal("+12"), Ok(12));
        assert_eq!(byte_channel_from_decimal("   "), Err(ParseError::Empty));
        assert_eq!(
            byte_channel_from_decimal("1 2"),
            Err(ParseError::NotANumber {
                text: "1 2".to_string()
            })
        );
        assert_eq!(
            byte_channel_from_decimal("12a"),
            Err(ParseError::NotANumber {
                text: "12a".to_string()
            })
        );
    }

    #[test]
    fn test_decimal_triple_fails_on_any_field() {
        assert_eq!(byte_channels_from_decimal("10", "20", "30"), Ok((10, 20, 30)));
        assert!(byte_channels_from_decimal("10", "x", "30").is_err());
        assert!(byte_channels_from_decimal("10", "20", "").is_err());
    }
}
