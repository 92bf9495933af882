// Fixed-capacity circular store for trail points.
// Visual: capacity caps how long the trail can get; evicted slots simply stop being drawn.

use crate::error::Error;

/// Circular buffer of `capacity` optional slots.
/// `head` = next write slot, `tail` = oldest occupied slot, `len` = occupied count.
/// Slots are `None` until first written and again after removal.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    slots: Vec<Option<T>>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> RingBuffer<T> {
    /// Empty buffer with `capacity` slots.
    ///
    /// # Panics
    ///
    /// If `capacity` is zero. `TrailOptions::validate` rejects that before a trail builds one.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "ring buffer capacity must be positive");
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize { self.slots.len() }
    pub fn len(&self) -> usize { self.len }
    pub fn is_empty(&self) -> bool { self.len == 0 }
    pub fn is_full(&self) -> bool { self.len == self.capacity() }

    /// Write at `head`. When full, this overwrites the oldest element and `tail` follows `head`.
    pub fn add_point(&mut self, p: T) {
        let cap = self.capacity();
        self.slots[self.head] = Some(p);
        self.head = (self.head + 1) % cap;

        if self.len == cap {
            self.tail = self.head;
        } else {
            self.len += 1;
        }
    }

    /// Take the oldest element and leave its slot empty.
    pub fn remove_point(&mut self) -> Result<T, Error> {
        if self.len == 0 {
            return Err(Error::EmptyTrail);
        }
        let cap = self.capacity();
        let p = self.slots[self.tail].take().ok_or(Error::EmptyTrail)?;
        self.tail = (self.tail + 1) % cap;
        self.len -= 1;
        Ok(p)
    }

    /// Most recently added element, if it is still live.
    pub fn newest(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        let cap = self.capacity();
        self.slots[(self.head + cap - 1) % cap].as_ref()
    }

    /// Occupied slots, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let (front, back) = self.slots.split_at(self.tail);
        back.iter().chain(front).filter_map(Option::as_ref)
    }

    /// Occupied slots, oldest first, mutably (the draw pass advances colors through this).
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        let (front, back) = self.slots.split_at_mut(self.tail);
        back.iter_mut().chain(front).filter_map(Option::as_mut)
    }

    pub fn clear(&mut self) {
        for s in &mut self.slots { *s = None; }
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }

    #[cfg(test)]
    fn slot(&self, i: usize) -> Option<&T> {
        self.slots[i].as_ref()
    }
}
