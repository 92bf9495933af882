// Command-line options for the window host.

use crate::error::ConfigError;
use crate::trail::TrailOptions;
use clap::Parser;
use image::Rgb;

#[derive(Debug, Clone, Parser)]
#[command(name = "color-trail", about = "Color-cycling pointer trail")]
pub struct Args {
    /// Window width in pixels
    #[arg(long, default_value_t = 960)]
    pub width: usize,

    /// Window height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: usize,

    /// Target frames per second
    #[arg(long, default_value_t = 60)]
    pub fps: usize,

    /// Maximum number of points kept in the trail
    #[arg(long, default_value_t = 64)]
    pub max_length: usize,

    /// Palette entries between two neighbouring color stops
    #[arg(long, default_value_t = 32)]
    pub segment_size: usize,

    #[arg(long, default_value_t = 6.0)]
    pub min_width: f32,

    #[arg(long, default_value_t = 24.0)]
    pub max_width: f32,

    /// Comma-separated color stops as #rrggbb (the last one blends back into the first)
    #[arg(long, value_delimiter = ',', default_value = "#ff0000,#ffff00,#00ff00,#00ffff,#0000ff,#ff00ff")]
    pub stops: Vec<String>,
}

impl Args {
    pub fn trail_options(&self) -> Result<TrailOptions, ConfigError> {
        let color_stops = self.stops.iter().map(|s| parse_hex_color(s)).collect::<Result<Vec<_>, _>>()?;
        let options = TrailOptions {
            color_stops,
            segment_size: self.segment_size,
            max_length: self.max_length,
            min_width: self.min_width,
            max_width: self.max_width,
        };
        options.validate()?;
        Ok(options)
    }
}

/// `#rrggbb` or `rrggbb`.
pub fn parse_hex_color(s: &str) -> Result<Rgb<u8>, ConfigError> {
    let bad = || ConfigError::ColorStop(s.to_string());
    let hex = s.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(bad());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}
