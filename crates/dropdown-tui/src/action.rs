//! Action enum — everything a component can ask the App to do.

/// Position of a dropdown in the control row. Doubles as its focus id.
pub type Slot = usize;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // ── Values ───────────────────────────────────────────────────────────────
    /// The user confirmed `value` in the dropdown at `slot`. The App owns the
    /// value and feeds it back to the control.
    Commit { slot: Slot, value: String },
    /// Put every dropdown back to its configured value (programmatic change).
    ResetValues,

    // ── Navigation ───────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,
    FocusSlot(Slot),

    // ── System ───────────────────────────────────────────────────────────────
    Quit,
}
