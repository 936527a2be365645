//! OpenState — whether the option panel is showing.

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenState {
    #[default]
    Closed,
    Open,
}

/// Why the panel closed. Logged only; every reason ends in `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Toggle,
    Dismissed,
    Cancelled,
    Committed,
}

impl OpenState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Flip between `Closed` and `Open`. The only way to open.
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Closed => {
                debug!("dropdown opened");
                Self::Open
            }
            Self::Open => {
                debug!(reason = ?CloseReason::Toggle, "dropdown closed");
                Self::Closed
            }
        };
    }

    /// Force `Closed`. Returns `true` if the panel was open.
    pub fn close(&mut self, reason: CloseReason) -> bool {
        if *self == Self::Closed {
            return false;
        }
        debug!(?reason, "dropdown closed");
        *self = Self::Closed;
        true
    }
}
