// Precomputed cyclic palette.
// Visual: the colors the trail cycles through; the last stop fades back into the first
// so the cycle loops without a seam.

use crate::error::ConfigError;
use image::Rgb;

#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    colors: Vec<Rgb<u8>>,
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

impl Gradient {
    /// Interpolate `segment_size` colors between each pair of neighbouring stops
    /// (the last pair wraps around to the first stop). Channels are truncated, not rounded.
    pub fn build(stops: &[Rgb<u8>], segment_size: usize) -> Result<Self, ConfigError> {
        if stops.is_empty() {
            return Err(ConfigError::NoColorStops);
        }
        if segment_size == 0 {
            return Err(ConfigError::SegmentSize);
        }

        let mut colors = Vec::with_capacity(stops.len() * segment_size);
        for (i, c0) in stops.iter().enumerate() {
            let c1 = &stops[(i + 1) % stops.len()];
            for j in 0..segment_size {
                // f64: truncation has to see 3 * (2/3) as exactly 2
                let t = j as f64 / segment_size as f64;
                let ch = |k: usize| lerp(c0.0[k] as f64, c1.0[k] as f64, t) as u8;
                colors.push(Rgb([ch(0), ch(1), ch(2)]));
            }
        }

        Ok(Self { colors })
    }

    pub fn colors(&self) -> &[Rgb<u8>] {
        &self.colors
    }

    /// Palette size (`stops × segment_size`), never zero.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`, wrapped into the palette.
    #[inline]
    pub fn color(&self, index: usize) -> Rgb<u8> {
        self.colors[index % self.colors.len()]
    }
}
