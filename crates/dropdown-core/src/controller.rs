//! Dropdown — the controller composing option lookup, value sync, keyboard
//! navigation and open state.
//!
//! Design:
//! - The caller owns the committed value. The controller mirrors it and only
//!   ever *requests* a change through `on_change`.
//! - The highlight is internal. It starts at the committed value and snaps back
//!   to it whenever the caller supplies a different value.
//! - Every handler runs to completion and reports a `Transition`; the host runs
//!   the focus step when `changed` is set.

use std::fmt::Display;

use tracing::debug;

use crate::keyboard::{self, Key};
use crate::open_state::{CloseReason, OpenState};
use crate::option_set::{DropdownOption, Label, OptionSet};
use crate::props::{ChangeHandler, Decor, DropdownProps, ValueRenderer};
use crate::value_sync::ValueSync;

/// What a handler did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transition {
    /// The highlight or the open flag changed.
    pub changed: bool,
    /// The host should not run its default action for the key.
    pub prevent_default: bool,
}

impl Transition {
    fn from_change(changed: bool) -> Self {
        Self {
            changed,
            prevent_default: false,
        }
    }
}

/// One option row as the renderer should draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionView<'a, T> {
    pub index: usize,
    pub option: &'a DropdownOption<T>,
    /// Previewed by keyboard navigation.
    pub highlighted: bool,
    /// Equal to the committed value.
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderModel<'a, T> {
    /// Option for the committed value, else the first option.
    pub shown: Option<&'a DropdownOption<T>>,
    pub open: bool,
    pub options: Vec<OptionView<'a, T>>,
}

impl<T> RenderModel<'_, T> {
    pub fn highlighted_index(&self) -> Option<usize> {
        self.options.iter().find(|o| o.highlighted).map(|o| o.index)
    }
}

pub struct Dropdown<T> {
    options: OptionSet<T>,
    sync: ValueSync<T>,
    highlighted: T,
    open: OpenState,
    on_change: ChangeHandler<T>,
    render_value: Option<ValueRenderer<T>>,
    decor: Decor,
}

impl<T> Dropdown<T>
where
    T: Clone + PartialEq + Display,
{
    pub fn new(props: DropdownProps<T>) -> Self {
        let DropdownProps {
            options,
            value,
            on_change,
            render_value,
            decor,
        } = props;
        Self {
            options,
            highlighted: value.clone(),
            sync: ValueSync::new(value),
            open: OpenState::Closed,
            on_change,
            render_value,
            decor,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    /// The committed value as last supplied by the caller.
    pub fn value(&self) -> &T {
        self.sync.last()
    }

    pub fn highlighted(&self) -> &T {
        &self.highlighted
    }

    pub fn is_open(&self) -> bool {
        self.open.is_open()
    }

    pub fn options(&self) -> &OptionSet<T> {
        &self.options
    }

    pub fn decor(&self) -> &Decor {
        &self.decor
    }

    // ── Caller-driven updates ────────────────────────────────────────────────

    /// Supply the externally controlled value. Run this before dispatching any
    /// other event whenever the caller's value may have changed.
    pub fn set_value(&mut self, value: T) -> Transition {
        if !self.sync.observe(&value) {
            return Transition::default();
        }
        debug!(value = %value, "committed value changed externally");
        let changed = self.highlighted != value;
        self.highlighted = value;
        Transition::from_change(changed)
    }

    /// Replace the option list for the next render pass.
    pub fn set_options(&mut self, options: OptionSet<T>) {
        self.options = options;
    }

    // ── User events ──────────────────────────────────────────────────────────

    pub fn on_toggle_click(&mut self) -> Transition {
        self.open.toggle();
        Transition::from_change(true)
    }

    /// Hand `value` to the caller, then close the panel.
    pub fn on_option_click(&mut self, value: T) -> Transition {
        debug!(value = %value, "option committed");
        (self.on_change)(value);
        Transition::from_change(self.open.close(CloseReason::Committed))
    }

    /// Activate the highlighted option, as a click on the focused row would.
    pub fn commit_highlighted(&mut self) -> Transition {
        if !self.open.is_open() {
            return Transition::default();
        }
        let Some(value) = self
            .options
            .resolve(&self.highlighted)
            .map(|o| o.value.clone())
        else {
            return Transition::default();
        };
        self.on_option_click(value)
    }

    /// Keyboard input for the open panel. Ignored while closed.
    pub fn on_key_down(&mut self, key: Key) -> Transition {
        if !self.open.is_open() {
            return Transition::default();
        }
        let nav = keyboard::navigate(&self.options, &self.highlighted, self.sync.last(), key);
        let prevent_default = nav.suppresses_default();
        let closes = nav.closes();

        let mut changed = false;
        if let Some(next) = nav.into_highlight() {
            changed = next != self.highlighted;
            self.highlighted = next;
        }
        if closes {
            changed |= self.open.close(CloseReason::Cancelled);
        }
        Transition {
            changed,
            prevent_default,
        }
    }

    /// Pointer interaction outside the control. Leaves the highlight as is.
    pub fn on_outside_dismiss(&mut self) -> Transition {
        Transition::from_change(self.open.close(CloseReason::Dismissed))
    }

    // ── Rendering ────────────────────────────────────────────────────────────

    pub fn render(&self) -> RenderModel<'_, T> {
        let committed = self.sync.last();
        let highlighted = self.options.resolve_index(&self.highlighted);
        let options = self
            .options
            .iter()
            .enumerate()
            .map(|(index, option)| OptionView {
                index,
                option,
                highlighted: highlighted == Some(index),
                active: option.value == *committed,
            })
            .collect();
        RenderModel {
            shown: self.options.resolve(committed),
            open: self.open.is_open(),
            options,
        }
    }

    /// Label for the closed control, after any `render_value` override.
    pub fn display_label(&self) -> Option<Label> {
        let shown = self.options.resolve(self.sync.last())?;
        Some(match &self.render_value {
            Some(render) => render(shown),
            None => shown.label.clone(),
        })
    }
}
