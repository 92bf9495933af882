// Error types. Every variant states *where* things went wrong.
use thiserror::Error;

/// Rejected construction options. Raised once, before anything is drawn.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("at least one color stop is required")]
    NoColorStops,
    #[error("segment size must be positive")]
    SegmentSize,
    #[error("max trail length must be positive")]
    MaxLength,
    #[error("min width must be a non-negative number, got {0}")]
    MinWidth(f32),
    #[error("width range is invalid: min {min} > max {max}")]
    WidthRange { min: f32, max: f32 },
    #[error("bad color stop {0:?}, expected #rrggbb")]
    ColorStop(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    // Update cycle asked to evict from an empty trail; the decay guard should prevent this.
    #[error("Invariant violated: remove on an empty trail")]
    EmptyTrail,
    #[error("Window init error: {0}")]
    WindowInit(String),
    #[error("Window update error: {0}")]
    WindowUpdate(String),
}
