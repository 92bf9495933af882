// Host-side collaborators (frame scheduling + pointer events) and the glue that
// routes their events into a Trail.
//
// The host never calls into the trail by itself: it reports events, and only
// events for live registrations (a pending tick, an active subscription) are delivered.

use crate::error::Error;
use crate::render::Renderer;
use crate::trail::Trail;
use log::debug;

/// Identifies one scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(pub u64);

/// Identifies one pointer-move subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(pub u64);

/// One-shot frame scheduling (think `requestAnimationFrame`).
pub trait AnimationDriver {
    fn schedule_next_tick(&mut self) -> TickHandle;
    fn cancel(&mut self, handle: TickHandle);
}

pub trait PointerSource {
    fn subscribe(&mut self) -> SubscriptionHandle;
    fn unsubscribe(&mut self, handle: SubscriptionHandle);
}

/// What a host hands back from its event pump.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// A scheduled tick fired at `now` (monotonic ms).
    Tick { handle: TickHandle, now: f64 },
    PointerMove { handle: SubscriptionHandle, x: f32, y: f32 },
}

/// A trail wired to a host: remembers the tick and subscription it registered
/// so `stop` releases exactly those.
pub struct TrailAnimation<R: Renderer> {
    trail: Trail<R>,
    tick: Option<TickHandle>,
    subscription: Option<SubscriptionHandle>,
}

impl<R: Renderer> TrailAnimation<R> {
    pub fn new(trail: Trail<R>) -> Self {
        Self { trail, tick: None, subscription: None }
    }

    pub fn trail(&self) -> &Trail<R> { &self.trail }
    pub fn trail_mut(&mut self) -> &mut Trail<R> { &mut self.trail }

    pub fn is_running(&self) -> bool {
        self.tick.is_some() && self.subscription.is_some()
    }

    /// Subscribe to pointer moves and schedule the first frame. No-op when already running.
    pub fn start(&mut self, driver: &mut impl AnimationDriver, pointer: &mut impl PointerSource, now: f64) {
        if self.is_running() {
            return;
        }
        self.trail.reset_clock(now);
        self.subscription = Some(pointer.subscribe());
        self.tick = Some(driver.schedule_next_tick());
    }

    /// Restart after `stop`. The decay clock restarts at `now`.
    pub fn resume(&mut self, driver: &mut impl AnimationDriver, pointer: &mut impl PointerSource, now: f64) {
        debug!("resuming trail animation at {now:.0} ms");
        self.start(driver, pointer, now);
    }

    /// Cancel the pending frame and drop the pointer subscription.
    pub fn stop(&mut self, driver: &mut impl AnimationDriver, pointer: &mut impl PointerSource) {
        if let Some(h) = self.tick.take() {
            driver.cancel(h);
        }
        if let Some(h) = self.subscription.take() {
            pointer.unsubscribe(h);
        }
        debug!("trail animation stopped");
    }

    /// Route one host event. Events for stale handles are ignored.
    pub fn handle(&mut self, driver: &mut impl AnimationDriver, event: HostEvent) -> Result<(), Error> {
        match event {
            HostEvent::Tick { handle, now } if self.tick == Some(handle) => {
                self.trail.on_frame(now)?;
                self.tick = Some(driver.schedule_next_tick());
            }
            HostEvent::PointerMove { handle, x, y } if self.subscription == Some(handle) => {
                self.trail.on_pointer_move(x, y);
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trail::TrailOptions;
    use crate::types::Rect;
    use image::Rgb;

    struct Null;

    impl Renderer for Null {
        fn bounds(&self) -> Rect { Rect { x: 0, y: 0, width: 0, height: 0 } }
        fn clear(&mut self, _region: Rect) {}
        fn set_fill_color(&mut self, _color: Rgb<u8>) {}
        fn draw_filled_circle(&mut self, _cx: f32, _cy: f32, _radius: f32) {}
    }

    // In-memory host: one pending tick at most, any number of subscriptions.
    #[derive(Default)]
    struct FakeHost {
        next_id: u64,
        pending: Option<TickHandle>,
        subscribers: Vec<SubscriptionHandle>,
        cancelled: Vec<TickHandle>,
    }

    impl AnimationDriver for FakeHost {
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
            self.cancelled.push(handle);
        }
    }

    impl PointerSource for FakeHost {
        fn subscribe(&mut self) -> SubscriptionHandle {
            self.next_id += 1;
            let h = SubscriptionHandle(self.next_id);
            self.subscribers.push(h);
            h
        }
        fn unsubscribe(&mut self, handle: SubscriptionHandle) {
            self.subscribers.retain(|&s| s != handle);
        }
    }

    fn animation() -> TrailAnimation<Null> {
        let opts = TrailOptions {
            color_stops: vec![Rgb([255, 255, 255])],
            segment_size: 4,
            max_length: 32,
            min_width: 2.0,
            max_width: 8.0,
        };
        TrailAnimation::new(Trail::new(Null, &opts, 0.0).unwrap())
    }

    #[test]
    fn start_registers_and_ticks_rearm() {
        let mut driver = FakeHost::default();
        let mut pointer = FakeHost { next_id: 100, ..Default::default() };
        let mut anim = animation();
        anim.start(&mut driver, &mut pointer, 0.0);
        assert!(anim.is_running());
        assert_eq!(pointer.subscribers.len(), 1);

        let sub = pointer.subscribers[0];
        anim.handle(&mut driver, HostEvent::PointerMove { handle: sub, x: 0.0, y: 0.0 }).unwrap();
        anim.handle(&mut driver, HostEvent::PointerMove { handle: sub, x: 30.0, y: 0.0 }).unwrap();
        assert_eq!(anim.trail().len(), 3);

        let first = driver.pending.take().unwrap();
        anim.handle(&mut driver, HostEvent::Tick { handle: first, now: 16.0 }).unwrap();
        let second = driver.pending.take().expect("frame re-armed");
        assert_ne!(first, second);
        anim.handle(&mut driver, HostEvent::Tick { handle: second, now: 40.0 }).unwrap();
        assert_eq!(anim.trail().len(), 2);
    }

    #[test]
    fn stop_cancels_tick_and_unsubscribes() {
        let mut driver = FakeHost::default();
        let mut pointer = FakeHost { next_id: 100, ..Default::default() };
        let mut anim = animation();
        anim.start(&mut driver, &mut pointer, 0.0);
        let pending = driver.pending.unwrap();

        anim.stop(&mut driver, &mut pointer);
        assert!(!anim.is_running());
        assert_eq!(driver.pending, None);
        assert_eq!(driver.cancelled, vec![pending]);
        assert!(pointer.subscribers.is_empty());

        // late events from the old registrations do nothing
        anim.handle(&mut driver, HostEvent::PointerMove { handle: SubscriptionHandle(101), x: 1.0, y: 1.0 })
            .unwrap();
        anim.handle(&mut driver, HostEvent::Tick { handle: pending, now: 16.0 }).unwrap();
        assert!(anim.trail().is_empty());
        assert_eq!(driver.pending, None);
    }

    #[test]
    fn resume_resets_decay_clock() {
        let mut driver = FakeHost::default();
        let mut pointer = FakeHost { next_id: 100, ..Default::default() };
        let mut anim = animation();
        anim.start(&mut driver, &mut pointer, 0.0);
        let sub = pointer.subscribers[0];
        for x in [0.0, 15.0, 30.0] {
            anim.handle(&mut driver, HostEvent::PointerMove { handle: sub, x, y: 0.0 }).unwrap();
        }
        let before = anim.trail().len();
        anim.stop(&mut driver, &mut pointer);

        anim.resume(&mut driver, &mut pointer, 10_000.0);
        assert!(anim.is_running());
        let tick = driver.pending.unwrap();
        anim.handle(&mut driver, HostEvent::Tick { handle: tick, now: 10_016.0 }).unwrap();
        assert_eq!(anim.trail().len(), before);
    }

    #[test]
    fn start_twice_keeps_one_subscription() {
        let mut driver = FakeHost::default();
        let mut pointer = FakeHost { next_id: 100, ..Default::default() };
        let mut anim = animation();
        anim.start(&mut driver, &mut pointer, 0.0);
        anim.start(&mut driver, &mut pointer, 5.0);
        assert_eq!(pointer.subscribers.len(), 1);
    }
}
