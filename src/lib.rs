//! Color-cycling pointer trail.
//!
//! A [`Trail`] keeps a fixed number of sampled pointer positions in a ring buffer.
//! Every frame it evicts the oldest point (at most one per 30 ms), pulses the
//! stroke width and draws each point as a filled circle colored from a cyclic
//! [`Gradient`]. Drawing goes through the [`Renderer`] trait; frame ticks and
//! pointer moves come from a host through [`AnimationDriver`] / [`PointerSource`].
//!
//! ```rust,ignore
//! let options = TrailOptions { color_stops, segment_size: 32, max_length: 64, min_width: 6.0, max_width: 24.0 };
//! let mut trail = Trail::new(Canvas::new(960, 600), &options, 0.0)?;
//! trail.on_pointer_move(10.0, 10.0);
//! trail.on_frame(16.0)?;
//! ```

pub mod config;
pub mod draw;
pub mod error;
pub mod gradient;
pub mod host;
pub mod render;
pub mod ring;
pub mod trail;
pub mod types;

pub use error::{ConfigError, Error};
pub use gradient::Gradient;
pub use host::{AnimationDriver, HostEvent, PointerSource, SubscriptionHandle, TickHandle, TrailAnimation};
pub use render::{Canvas, Renderer};
pub use ring::RingBuffer;
pub use trail::{Trail, TrailOptions};
pub use types::{FrameBuffer, Point, Rect};
