// The trail: a ring of sampled pointer positions that decays over time,
// breathes in width and cycles its colors through the gradient every frame.
//
// Visual outcomes:
// - Moving the pointer lays down evenly spaced dots (fast moves are filled in).
// - The oldest dot disappears every ~30 ms, so a resting pointer's trail shrinks away.
// - All dots pulse between min and max width together.
// - Colors race along the trail (stride 7 per frame) instead of sweeping smoothly.

use crate::error::{ConfigError, Error};
use crate::gradient::Gradient;
use crate::render::Renderer;
use crate::ring::RingBuffer;
use crate::types::Point;
use image::Rgb;
use log::trace;

/// Oldest point is evicted once this much time has passed since the last eviction.
pub const DECAY_INTERVAL_MS: f64 = 30.0;
/// Fraction of the width range covered per reference frame.
pub const WIDTH_STEP: f32 = 0.016;
/// Cadence the width step was tuned for (60 ticks per second).
pub const REFERENCE_FRAME_MS: f64 = 1000.0 / 60.0;
// A stalled host must not jump the width across its whole range in one frame.
const MAX_FRAME_STEPS: f64 = 4.0;
/// Palette step applied to every point after it is drawn.
pub const DRAW_COLOR_STRIDE: usize = 7;
/// Distance between resampled points on a pointer move.
pub const SAMPLE_SPACING: f32 = 10.0;

/// Everything needed to build a trail. Checked once by `validate`.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailOptions {
    pub color_stops: Vec<Rgb<u8>>,
    pub segment_size: usize,
    pub max_length: usize,
    pub min_width: f32,
    pub max_width: f32,
}

impl TrailOptions {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.color_stops.is_empty() {
            return Err(ConfigError::NoColorStops);
        }
        if self.segment_size == 0 {
            return Err(ConfigError::SegmentSize);
        }
        if self.max_length == 0 {
            return Err(ConfigError::MaxLength);
        }
        if !self.min_width.is_finite() || self.min_width < 0.0 {
            return Err(ConfigError::MinWidth(self.min_width));
        }
        if !self.max_width.is_finite() || self.max_width < self.min_width {
            return Err(ConfigError::WidthRange { min: self.min_width, max: self.max_width });
        }
        Ok(())
    }
}

pub struct Trail<R: Renderer> {
    renderer: R,
    gradient: Gradient,
    points: RingBuffer<Point>,
    min_width: f32,
    max_width: f32,

    width: f32,
    is_growing: bool,
    last_removal_time: f64,
    last_frame_time: Option<f64>,
}

impl<R: Renderer> Trail<R> {
    /// Validate `options`, build the gradient and take ownership of the renderer.
    /// `now` (ms) starts the decay clock.
    pub fn new(renderer: R, options: &TrailOptions, now: f64) -> Result<Self, ConfigError> {
        options.validate()?;
        let gradient = Gradient::build(&options.color_stops, options.segment_size)?;
        Ok(Self {
            renderer,
            gradient,
            points: RingBuffer::with_capacity(options.max_length),
            min_width: options.min_width,
            max_width: options.max_width,
            width: options.min_width,
            is_growing: true,
            last_removal_time: now,
            last_frame_time: None,
        })
    }

    pub fn renderer(&self) -> &R { &self.renderer }
    pub fn gradient(&self) -> &Gradient { &self.gradient }
    pub fn width(&self) -> f32 { self.width }
    pub fn is_growing(&self) -> bool { self.is_growing }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Live points, oldest first.
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// Drop every point (the width oscillator keeps running).
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Restart the clocks after a pause so the decay does not fire a burst of evictions.
    pub fn reset_clock(&mut self, now: f64) {
        self.last_removal_time = now;
        self.last_frame_time = None;
    }

    /// Record a pointer position. Long moves are resampled every `SAMPLE_SPACING`
    /// units along the segment, each new point one palette step after the previous.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        let Some(&p0) = self.points.newest() else {
            self.points.add_point(Point::new(x, y, 0));
            return;
        };

        let (x0, y0) = (p0.x as f64, p0.y as f64);
        let (x1, y1) = (x as f64, y as f64);
        let d = (x1 - x0).hypot(y1 - y0);
        if !(d > 0.0) || !d.is_finite() {
            return;
        }

        // Samples sit at 10, 20, ... strictly before `d`
        let spacing = SAMPLE_SPACING as f64;
        let n = ((d / spacing).ceil() as usize).saturating_sub(1);
        // Only the last `capacity` samples can survive, so the earlier ones are never built
        let skip = n.saturating_sub(self.points.capacity());
        let size = self.gradient.len();

        for k in skip + 1..=n {
            let t = k as f64 * spacing / d;
            let xi = x0 * (1.0 - t) + x1 * t;
            let yi = y0 * (1.0 - t) + y1 * t;
            let color_index = (p0.color_index + k % size) % size;
            self.points.add_point(Point::new(xi as f32, yi as f32, color_index));
        }
    }

    /// One animation tick at `now` (ms): clear, decay, oscillate width, draw.
    pub fn on_frame(&mut self, now: f64) -> Result<(), Error> {
        let area = self.renderer.bounds();
        self.renderer.clear(area);

        if now - self.last_removal_time > DECAY_INTERVAL_MS && !self.points.is_empty() {
            let p = self.points.remove_point()?;
            trace!("evicted point at ({:.1}, {:.1}), {} left", p.x, p.y, self.points.len());
            self.last_removal_time = now;
        }

        let dt = match self.last_frame_time {
            Some(prev) => (now - prev).clamp(0.0, REFERENCE_FRAME_MS * MAX_FRAME_STEPS),
            None => REFERENCE_FRAME_MS,
        };
        self.last_frame_time = Some(now);
        self.step_width(dt);

        let radius = self.width / 2.0;
        let size = self.gradient.len();
        for p in self.points.iter_mut() {
            self.renderer.set_fill_color(self.gradient.color(p.color_index));
            self.renderer.draw_filled_circle(p.x, p.y, radius);
            p.color_index = (p.color_index + DRAW_COLOR_STRIDE) % size;
        }

        Ok(())
    }

    // Growing/Shrinking oscillator; the state flips at the bound it reaches.
    fn step_width(&mut self, dt: f64) {
        let step = (self.max_width - self.min_width) * WIDTH_STEP * (dt / REFERENCE_FRAME_MS) as f32;
        if self.is_growing {
            self.width += step;
            if self.width >= self.max_width {
                self.width = self.max_width;
                self.is_growing = false;
            }
        } else {
            self.width -= step;
            if self.width <= self.min_width {
                self.width = self.min_width;
                self.is_growing = true;
            }
        }
    }
}
