//! CLI commands for color conversions
//!
//! Each command returns the text to print so the formatting can be tested
//! without capturing stdout.

use serde::Serialize;

use crate::color::{Color, NormalizedColor};
use crate::error::Result;

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn bytes_line(color: Color) -> String {
    format!("{} {} {}", color.r, color.g, color.b)
}

/// `hex R G B` - clamp, then format as `#RRGGBB`
pub fn hex(r: i64, g: i64, b: i64, json: bool) -> Result<String> {
    let color = Color::clamped(r, g, b);
    if json {
        #[derive(Serialize)]
        struct HexOutput {
            hex: String,
        }
        return to_json(&HexOutput {
            hex: color.to_hex(),
        });
    }
    Ok(color.to_hex())
}

/// `rgb HEX` - parse hex into byte channels
pub fn rgb(hex: &str, json: bool) -> Result<String> {
    let color = Color::from_hex(hex).inspect_err(|e| {
        tracing::warn!("Rejected hex color {:?}: {}", hex, e);
    })?;
    if json {
        return to_json(&color);
    }
    Ok(bytes_line(color))
}

/// `normalize R G B` - decimal byte fields to normalized floats
pub fn normalize(r: &str, g: &str, b: &str, json: bool) -> Result<String> {
    let normalized = Color::from_decimal(r, g, b)?.to_normalized();
    if json {
        return to_json(&normalized);
    }
    Ok(normalized.to_string())
}

/// `quantize R G B` - normalized floats to byte channels
pub fn quantize(r: f32, g: f32, b: f32, json: bool) -> Result<String> {
    let color = Color::from_normalized(NormalizedColor::new(r, g, b));
    if json {
        return to_json(&color);
    }
    Ok(bytes_line(color))
}

/// `clamp R G B` - arbitrary integers to byte channels
pub fn clamp(r: i64, g: i64, b: i64, json: bool) -> Result<String> {
    let color = Color::clamped(r, g, b);
    if json {
        return to_json(&color);
    }
    Ok(bytes_line(color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ParseError};

    #[test]
    fn test_hex_command_clamps() {
        assert_eq!(hex(10, 0, 255, false).unwrap(), "#0A00FF");
        assert_eq!(hex(-3, 999, 16, false).unwrap(), "#00FF10");
    }

    #[test]
    fn test_rgb_command() {
        assert_eq!(rgb("#BADA55", false).unwrap(), "186 218 85");
        assert!(matches!(
            rgb("FFF", false),
            Err(Error::Parse(ParseError::InvalidLength { len: 3 }))
        ));
    }

    #[test]
    fn test_normalize_command() {
        assert_eq!(
            normalize("255", "0", "51", false).unwrap(),
            "1.000000 0.000000 0.200000"
        );
        assert!(normalize("255", "red", "0", false).is_err());
    }

    #[test]
    fn test_quantize_and_clamp_commands() {
        assert_eq!(quantize(0.0, 0.5, 1.5, false).unwrap(), "0 128 255");
        assert_eq!(clamp(-1, 128, 256, false).unwrap(), "0 128 255");
    }

    #[test]
    fn test_json_output() {
        let out = rgb("0A00FF", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["r"], 10);
        assert_eq!(value["b"], 255);

        let out = hex(1, 2, 3, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["hex"], "#010203");
    }
}
