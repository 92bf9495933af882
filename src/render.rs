// Drawing capability the trail renders through, plus the software implementation
// for our 0x00RRGGBB frame buffer.

use crate::types::{pack_rgb, FrameBuffer, Rect};
use image::Rgb;

/// What the trail needs from a drawing surface. Injected into `Trail` at construction.
pub trait Renderer {
    /// The full drawable area.
    fn bounds(&self) -> Rect;
    fn clear(&mut self, region: Rect);
    fn set_fill_color(&mut self, color: Rgb<u8>);
    fn draw_filled_circle(&mut self, cx: f32, cy: f32, radius: f32);
}

/// FrameBuffer plus the current fill color.
/// Visual: this is the image the window shows after `present`.
pub struct Canvas {
    pub frame: FrameBuffer,
    fill: u32,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self { frame: FrameBuffer::new(width, height), fill: 0x00_FF_FF_FF }
    }
}

impl Renderer for Canvas {
    fn bounds(&self) -> Rect {
        Rect { x: 0, y: 0, width: self.frame.width, height: self.frame.height }
    }

    fn clear(&mut self, region: Rect) {
        let fb = &mut self.frame;
        let x1 = (region.x + region.width).min(fb.width);
        let y1 = (region.y + region.height).min(fb.height);
        if region.x >= x1 {
            return;
        }
        for y in region.y..y1 {
            fb.pixels[y * fb.width + region.x..y * fb.width + x1].fill(0);
        }
    }

    fn set_fill_color(&mut self, color: Rgb<u8>) {
        self.fill = pack_rgb(color);
    }

    /// Fill every pixel whose center lies inside the circle.
    /// Visual: a solid dot; nothing is drawn when the radius is zero.
    fn draw_filled_circle(&mut self, cx: f32, cy: f32, radius: f32) {
        if !(radius > 0.0) {
            return;
        }
        let r2 = radius * radius;
        let fb = &mut self.frame;

        // Scan just the bounding box, clipped to the frame
        let y0 = (cy - radius).floor().max(0.0) as usize;
        let x0 = (cx - radius).floor().max(0.0) as usize;
        let y1 = ((cy + radius).ceil().max(0.0) as usize).min(fb.height);
        let x1 = ((cx + radius).ceil().max(0.0) as usize).min(fb.width);

        for y in y0..y1 {
            let dy = y as f32 + 0.5 - cy;
            for x in x0..x1 {
                let dx = x as f32 + 0.5 - cx;
                if dx * dx + dy * dy <= r2 {
                    fb.pixels[y * fb.width + x] = self.fill;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(c: &Canvas) -> usize {
        c.frame.pixels.iter().filter(|&&p| p != 0).count()
    }

    #[test]
    fn circle_covers_center_and_not_corners() {
        let mut c = Canvas::new(20, 20);
        c.set_fill_color(Rgb([255, 0, 0]));
        c.draw_filled_circle(10.0, 10.0, 3.0);
        let at = |x: usize, y: usize| c.frame.pixels[y * 20 + x];
        assert_eq!(at(10, 10), 0x00_FF_00_00);
        assert_eq!(at(9, 9), 0x00_FF_00_00);
        assert_eq!(at(7, 7), 0);
        assert_eq!(at(14, 10), 0);
        // roughly pi * r^2
        let n = lit(&c);
        assert!((24..=32).contains(&n), "lit {n}");
    }

    #[test]
    fn circle_is_clipped_at_the_edges() {
        let mut c = Canvas::new(8, 8);
        c.draw_filled_circle(-1.0, 0.0, 3.0);
        c.draw_filled_circle(100.0, 100.0, 3.0);
        assert!(lit(&c) > 0);
        c.draw_filled_circle(4.0, 4.0, 0.0);
    }

    #[test]
    fn clear_region_only_touches_region() {
        let mut c = Canvas::new(4, 4);
        c.frame.pixels.fill(0x00_12_34_56);
        c.clear(Rect { x: 1, y: 1, width: 2, height: 10 });
        assert_eq!(c.frame.pixels[0], 0x00_12_34_56);
        assert_eq!(c.frame.pixels[5], 0);
        assert_eq!(c.frame.pixels[14], 0);
        assert_eq!(c.frame.pixels[15], 0x00_12_34_56);
        c.clear(c.bounds());
        assert_eq!(lit(&c), 0);
    }
}
