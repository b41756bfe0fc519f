//! # Tintwork
//!
//! A small, dependency-light library for recoloring lights: conversions
//! between the three ways a light color shows up in practice.
//!
//! - **Hex strings** - `#RRGGBB`, what players type and paste
//! - **Byte channels** - `0..=255` per channel, what editors display
//! - **Normalized floats** - `0.0..=1.0` per channel, what the host light stores
//!
//! Numeric input is always clamped into range. Only string parsing can fail,
//! and a failed parse never produces a partial color.
//!
//! ## Quick Start
//!
//! ```
//! use tintwork::prelude::*;
//!
//! let color: Color = "#BADA55".parse()?;
//! assert_eq!(color.channels(), (186, 218, 85));
//!
//! // Push it into a host light
//! let mut light = NormalizedColor::default();
//! apply_to_group(color.to_normalized(), Some(&mut light), [], false);
//! assert_eq!(Color::from(light), color);
//! # Ok::<(), tintwork::ParseError>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `tintwork` command-line binary

pub mod color;
pub mod error;
pub mod light;

// Re-exports for convenience
pub use error::{Error, ParseError, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::color::codec::{
        byte_channel_from_decimal, byte_channels_from_decimal, byte_channels_from_hex_string,
        byte_channels_from_normalized, clamp_byte_channels, hex_string_from_byte_channels,
        normalized_from_byte_channels,
    };
    pub use crate::color::{Color, NormalizedColor};
    pub use crate::error::{Error, ParseError, Result};
    pub use crate::light::{LightComponent, apply_to_group};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
