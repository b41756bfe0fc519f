use clap::Subcommand;

pub mod convert;

#[derive(Subcommand)]
pub enum Commands {
    /// Format byte channels as #RRGGBB (out-of-range values are clamped)
    Hex {
        #[arg(allow_negative_numbers = true)]
        r: i64,
        #[arg(allow_negative_numbers = true)]
        g: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },

    /// Parse a hex color (RRGGBB or #RRGGBB) into byte channels
    Rgb {
        /// Hex color string
        hex: String,
    },

    /// Convert byte channels to normalized 0.0-1.0 floats
    Normalize {
        /// Red, green and blue as decimal strings
        r: String,
        g: String,
        b: String,
    },

    /// Convert normalized floats to byte channels
    Quantize {
        #[arg(allow_negative_numbers = true)]
        r: f32,
        #[arg(allow_negative_numbers = true)]
        g: f32,
        #[arg(allow_negative_numbers = true)]
        b: f32,
    },

    /// Clamp arbitrary integers into byte channels
    Clamp {
        #[arg(allow_negative_numbers = true)]
        r: i64,
        #[arg(allow_negative_numbers = true)]
        g: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },
}

impl Commands {
    pub fn execute(&self, json: bool) -> anyhow::Result<()> {
        let output = match self {
            Commands::Hex { r, g, b } => convert::hex(*r, *g, *b, json)?,
            Commands::Rgb { hex } => convert::rgb(hex, json)?,
            Commands::Normalize { r, g, b } => convert::normalize(r, g, b, json)?,
            Commands::Quantize { r, g, b } => convert::quantize(*r, *g, *b, json)?,
            Commands::Clamp { r, g, b } => convert::clamp(*r, *g, *b, json)?,
        };
        println!("{output}");
        Ok(())
    }
}
