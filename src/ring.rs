//! Fixed-capacity circular buffer for scrolling strips
//!
//! Pipes and ground tiles scroll left and, once off-screen, reappear after the
//! last element. Instead of removing from the front of a `Vec` and pushing to the
//! back (which shifts every element), the buffer keeps its slots in place and
//! only moves the `head` index, so recycling is O(1).
//!
//! Logical order always starts at `head`: index 0 is the oldest (leftmost)
//! element, index `len() - 1` the newest.

pub struct RingBuffer<T> {
    slots: Vec<T>,
    head: usize,
}

impl<T> RingBuffer<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        RingBuffer {
            slots: Vec::with_capacity(capacity),
            head: 0,
        }
    }

    /// Appends a new element after the current back.
    ///
    /// Used while filling the strip. Re-linearizes the slots first when the
    /// buffer has been rotated so the new element lands at the logical end.
    pub fn push_back(&mut self, value: T) {
        if self.head != 0 {
            self.slots.rotate_left(self.head);
            self.head = 0;
        }
        self.slots.push(value);
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = 0;
    }

    fn physical_index(&self, logical: usize) -> usize {
        (self.head + logical) % self.slots.len()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.slots.len() {
            return None;
        }
        self.slots.get(self.physical_index(index))
    }

    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    pub fn back(&self) -> Option<&T> {
        self.slots.len().checked_sub(1).and_then(|last| self.get(last))
    }

    /// Moves the front element to the back, letting `rewrite` update it first.
    ///
    /// `rewrite` receives the front slot and a copy of the current back element.
    /// Returns `false` on an empty buffer.
    pub fn recycle_front<F>(&mut self, rewrite: F) -> bool
    where
        T: Clone,
        F: FnOnce(&mut T, &T),
    {
        let Some(back) = self.back().cloned() else {
            return false;
        };

        let head = self.head;
        rewrite(&mut self.slots[head], &back);
        self.head = (self.head + 1) % self.slots.len();
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let (wrapped, leading) = self.slots.split_at(self.head);
        leading.iter().chain(wrapped.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        let (wrapped, leading) = self.slots.split_at_mut(self.head);
        leading.iter_mut().chain(wrapped.iter_mut())
    }
}
