//! `TintPanel` - editing model for recoloring a part's light
//!
//! Holds what the overlay panel needs between frames: the text fields, the
//! hex/decimal input mode, the confirmed preview color and the symmetry
//! toggle. Rendering and key handling stay with the host; this crate only
//! turns field text into a confirmed color and pushes it into lights.

pub mod config;
pub mod error;
pub mod panel;

// Re-exports for convenience
pub use tintwork;

pub use config::PanelConfig;
pub use error::{Error, Result};
pub use panel::{ColorPanel, Field, InputMode, PanelState};
