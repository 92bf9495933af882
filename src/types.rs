// Core types shared by the trail, the renderer and the window host.

use image::Rgb;

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A black frame of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }
}

/// One sampled trail position plus its slot in the gradient palette.
/// Visual: drawn as a filled circle whose color walks through the palette every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub color_index: usize, // always < gradient.len()
}

impl Point {
    pub fn new(x: f32, y: f32, color_index: usize) -> Self {
        Self { x, y, color_index }
    }
}

/// Axis-aligned pixel rectangle (used for clearing).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

/// Pack an RGB triple as 0x00RRGGBB.
#[inline]
pub fn pack_rgb(c: Rgb<u8>) -> u32 {
    let [r, g, b] = c.0;
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}
