//! Panel model - open/close state, field editing, confirm and apply
//!
//! The host renders the fields returned by [`ColorPanel::field`], feeds edits
//! back through [`ColorPanel::set_field`] and calls [`ColorPanel::confirm`] on
//! ENTER. Only a confirmed color ever reaches a light.

mod fields;

pub use fields::Field;

use tintwork::color::Color;
use tintwork::light::{LightComponent, apply_to_group};

use crate::config::PanelConfig;
use crate::error::{Error, Result};

/// Whether the panel is currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

/// Which fields `confirm` reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Three decimal byte fields
    #[default]
    Decimal,
    /// One `RRGGBB` field
    Hex,
}

/// Editing state for recoloring one part's light
#[derive(Debug, Clone)]
pub struct ColorPanel {
    state: PanelState,
    mode: InputMode,
    apply_to_symmetry: bool,
    intensity: f32,
    fallback: Color,

    red: String,
    green: String,
    blue: String,
    hex: String,

    /// Last confirmed color; what Apply writes
    preview: Color,
}

impl ColorPanel {
    pub fn new(config: &PanelConfig) -> Self {
        let fallback = config.fallback_color();
        let mut panel = Self {
            state: PanelState::Closed,
            mode: if config.hex_input {
                InputMode::Hex
            } else {
                InputMode::Decimal
            },
            apply_to_symmetry: config.apply_to_symmetry,
            intensity: config.intensity,
            fallback,
            red: String::new(),
            green: String::new(),
            blue: String::new(),
            hex: String::new(),
            preview: fallback,
        };
        panel.load_color(fallback);
        panel
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PanelState::Open
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Switch input mode. Field contents are kept as they are.
    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    pub fn apply_to_symmetry(&self) -> bool {
        self.apply_to_symmetry
    }

    pub fn set_apply_to_symmetry(&mut self, enabled: bool) {
        self.apply_to_symmetry = enabled;
    }

    /// The last confirmed color
    pub fn preview(&self) -> Color {
        self.preview
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Red => &self.red,
            Field::Green => &self.green,
            Field::Blue => &self.blue,
            Field::Hex => &self.hex,
        }
    }

    /// Replace a field's text with sanitized `raw` input
    pub fn set_field(&mut self, field: Field, raw: &str) {
        let text = field.sanitize(raw);
        match field {
            Field::Red => self.red = text,
            Field::Green => self.green = text,
            Field::Blue => self.blue = text,
            Field::Hex => self.hex = text,
        }
    }

    /// Open the panel, seeding every field from the light's current color.
    pub fn open<L>(&mut self, light: Option<&L>) -> Result<Color>
    where
        L: LightComponent + ?Sized,
    {
        let light = light.ok_or(Error::NoLight)?;
        let color = Color::from(light.color());
        self.load_color(color);
        self.state = PanelState::Open;
        tracing::info!("Panel opened with {}", color);
        Ok(color)
    }

    /// Close the panel and drop the preview back to the fallback color.
    pub fn close(&mut self) {
        self.state = PanelState::Closed;
        self.preview = self.fallback;
        tracing::info!("Panel closed");
    }

    /// Open if closed, close if open
    pub fn toggle<L>(&mut self, light: Option<&L>) -> Result<PanelState>
    where
        L: LightComponent + ?Sized,
    {
        match self.state {
            PanelState::Open => self.close(),
            PanelState::Closed => {
                self.open(light)?;
            }
        }
        Ok(self.state)
    }

    /// Parse the active mode's fields into a new preview color.
    ///
    /// On success every field is rewritten from the confirmed color, so
    /// clamped values and hex case are normalized. On failure nothing changes.
    pub fn confirm(&mut self) -> Result<Color> {
        let parsed = match self.mode {
            InputMode::Hex => Color::from_hex(&self.hex),
            InputMode::Decimal => Color::from_decimal(&self.red, &self.green, &self.blue),
        };

        match parsed {
            Ok(color) => {
                self.load_color(color);
                tracing::debug!("Confirmed {} from {:?} input", color, self.mode);
                Ok(color)
            }
            Err(e) => {
                tracing::warn!("Rejected {:?} input, keeping {}: {}", self.mode, self.preview, e);
                Err(e.into())
            }
        }
    }

    /// Write the confirmed color to the part's light and, when symmetry is
    /// enabled, to its counterparts. Returns the number of lights written.
    pub fn apply<'a, L, I>(&self, primary: Option<&mut L>, counterparts: I) -> usize
    where
        L: LightComponent + ?Sized + 'a,
        I: IntoIterator<Item = Option<&'a mut L>>,
    {
        if !self.is_open() {
            tracing::debug!("Apply ignored while panel is closed");
            return 0;
        }

        let color = self.preview.to_normalized().scaled(self.intensity);
        let written = apply_to_group(color, primary, counterparts, self.apply_to_symmetry);
        tracing::info!("Applied {} to {} light(s)", self.preview, written);
        written
    }

    /// Apply, then close
    pub fn accept<'a, L, I>(&mut self, primary: Option<&mut L>, counterparts: I) -> usize
    where
        L: LightComponent + ?Sized + 'a,
        I: IntoIterator<Item = Option<&'a mut L>>,
    {
        let written = self.apply(primary, counterparts);
        self.close();
        written
    }

    fn load_color(&mut self, color: Color) {
        self.preview = color;
        self.red = color.r.to_string();
        self.green = color.g.to_string();
        self.blue = color.b.to_string();
        self.hex = Field::Hex.sanitize(&color.to_hex());
    }
}

impl Default for ColorPanel {
    fn default() -> Self {
        Self::new(&PanelConfig::default())
    }
}
