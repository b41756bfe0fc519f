//! Color module - conversions between hex strings, byte channels and normalized floats
//!
//! This module provides:
//! - The channel codec: pure conversion, clamping and parsing functions
//! - `Color` (byte channels) and `NormalizedColor` (host light floats) value types

pub mod codec;
pub mod types;

pub use codec::{
    byte_channel_from_decimal, byte_channels_from_decimal, byte_channels_from_hex_string,
    byte_channels_from_normalized, clamp_byte_channels, hex_string_from_byte_channels,
    normalized_from_byte_channels,
};
pub use types::{Color, NormalizedColor};
