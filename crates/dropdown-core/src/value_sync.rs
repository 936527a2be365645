//! ValueSync — notices out-of-band changes to the caller-owned value.

/// Remembers the last externally supplied committed value.
///
/// `observe` reports whether a newly supplied value differs from the previous
/// one; the controller then resets its highlight. Re-supplying an equal value
/// is not a change.
#[derive(Debug, Clone)]
pub struct ValueSync<T> {
    last: T,
}

impl<T: Clone + PartialEq> ValueSync<T> {
    pub fn new(initial: T) -> Self {
        Self { last: initial }
    }

    pub fn last(&self) -> &T {
        &self.last
    }

    /// Returns `true` if `value` differs from the previously observed value.
    pub fn observe(&mut self, value: &T) -> bool {
        if self.last == *value {
            return false;
        }
        self.last = value.clone();
        true
    }
}
