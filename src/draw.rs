// Window host.
// Visual effects provided here:
// 1) A window that shows the trail canvas.
// 2) Mouse movement inside the window turns into pointer-move events.
// 3) Frames are paced by minifb (`set_target_fps`) and reported as ticks.

use crate::error::Error;
use crate::host::{AnimationDriver, HostEvent, PointerSource, SubscriptionHandle, TickHandle};
use crate::types::FrameBuffer;
use minifb::{Key, KeyRepeat, MouseMode, Window, WindowOptions};
use std::time::Instant;

/// Frame scheduling half of the window host. At most one tick is pending.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    next_id: u64,
    pending: Option<TickHandle>,
}

/// Pointer half of the window host.
#[derive(Debug, Default)]
pub struct MouseFeed {
    next_id: u64,
    subscription: Option<SubscriptionHandle>,
    last: Option<(f32, f32)>,
}

/// The window plus its two collaborator halves. They are separate fields so the
/// animation can borrow both at once.
pub struct Drawer {
    window: Window, // the on-screen window you see
    started: Instant,
    pub frames: FrameScheduler,
    pub mouse: MouseFeed,
}

impl Drawer {
    /// Create a window of the given size, paced at `fps` frames per second.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize, fps: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(fps);
        Ok(Self {
            window,
            started: Instant::now(),
            frames: FrameScheduler::default(),
            mouse: MouseFeed::default(),
        })
    }

    /// Monotonic milliseconds since the window opened.
    pub fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    /// Push the pixels for this frame to the screen (this also pumps window events
    /// and waits out the frame budget).
    /// Visual: the window immediately displays the new image.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we'll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Visual: when pressed, the whole trail vanishes at once.
    pub fn c_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::C, KeyRepeat::No)
    }

    /// Space pauses / resumes the animation.
    pub fn space_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::Space, KeyRepeat::No)
    }

    /// Events for the live registrations: a pointer move if the mouse moved while
    /// subscribed, then the pending tick (if one is scheduled) stamped with `now`.
    /// Moves come first so this frame's draw reflects them.
    pub fn poll_events(&mut self) -> Vec<HostEvent> {
        let mut events = Vec::with_capacity(2);

        // Discard (MouseMode) so positions outside the window are not clamped onto the edge
        let pos = self.window.get_mouse_pos(MouseMode::Discard);
        if let (Some(handle), Some((x, y))) = (self.mouse.subscription, pos) {
            if self.mouse.last != Some((x, y)) {
                events.push(HostEvent::PointerMove { handle, x, y });
            }
        }
        if pos.is_some() {
            self.mouse.last = pos;
        }

        if let Some(handle) = self.frames.pending.take() {
            events.push(HostEvent::Tick { handle, now: self.now_ms() });
        }
        events
    }
}

impl AnimationDriver for FrameScheduler {
    fn schedule_next_tick(&mut self) -> TickHandle {
        self.next_id += 1;
        let h = TickHandle(self.next_id);
        self.pending = Some(h);
        h
    }

    fn cancel(&mut self, handle: TickHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}

impl PointerSource for MouseFeed {
    fn subscribe(&mut self) -> SubscriptionHandle {
        self.next_id += 1;
        let h = SubscriptionHandle(self.next_id);
        self.subscription = Some(h);
        h
    }

    fn unsubscribe(&mut self, handle: SubscriptionHandle) {
        if self.subscription == Some(handle) {
            self.subscription = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_only_drops_the_matching_tick() {
        let mut frames = FrameScheduler::default();
        let old = frames.schedule_next_tick();
        let new = frames.schedule_next_tick();
        frames.cancel(old);
        assert_eq!(frames.pending, Some(new));
        frames.cancel(new);
        assert_eq!(frames.pending, None);
    }

    #[test]
    fn unsubscribe_needs_the_same_handle() {
        let mut mouse = MouseFeed::default();
        let h = mouse.subscribe();
        mouse.unsubscribe(SubscriptionHandle(h.0 + 1));
        assert_eq!(mouse.subscription, Some(h));
        mouse.unsubscribe(h);
        assert_eq!(mouse.subscription, None);
    }
}
