//! FocusRing — keyboard focus cycling between the dropdowns in the row.

use crate::action::Slot;

pub struct FocusRing {
    len: usize,
    current: Slot,
}

impl FocusRing {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn current(&self) -> Option<Slot> {
        (self.current < self.len).then_some(self.current)
    }

    pub fn next(&mut self) -> Option<Slot> {
        if self.len == 0 {
            return None;
        }
        self.current = (self.current + 1) % self.len;
        self.current()
    }

    pub fn prev(&mut self) -> Option<Slot> {
        if self.len == 0 {
            return None;
        }
        self.current = if self.current == 0 {
            self.len - 1
        } else {
            self.current - 1
        };
        self.current()
    }

    /// Focus `slot`. No-op if out of bounds.
    pub fn set(&mut self, slot: Slot) -> Option<Slot> {
        if slot < self.len {
            self.current = slot;
            self.current()
        } else {
            None
        }
    }

    pub fn is_focused(&self, slot: Slot) -> bool {
        self.current() == Some(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_both_ways() {
        let mut ring = FocusRing::new(3);
        assert_eq!(ring.current(), Some(0));
        assert_eq!(ring.next(), Some(1));
        assert_eq!(ring.next(), Some(2));
        assert_eq!(ring.next(), Some(0));
        assert_eq!(ring.prev(), Some(2));
        assert!(ring.is_focused(2));
    }

    #[test]
    fn empty_ring_has_no_focus() {
        let mut ring = FocusRing::new(0);
        assert_eq!(ring.current(), None);
        assert_eq!(ring.next(), None);
        assert_eq!(ring.prev(), None);
        assert_eq!(ring.set(0), None);
    }
}
