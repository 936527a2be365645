//! Component trait — the interface every interactive control implements.
//!
//! - Components own their state and render themselves.
//! - Components produce `Vec<Action>`; values they do not own change only when
//!   the App dispatches those actions back.

use ratatui::crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

use crate::action::{Action, Slot};

pub trait Component {
    fn slot(&self) -> Slot;

    /// Handle a key event. Only called while this component has focus.
    fn handle_key(&mut self, key: KeyEvent) -> Vec<Action>;

    /// Handle a mouse event. Every component sees every mouse event so that
    /// presses elsewhere can dismiss it.
    fn handle_mouse(&mut self, event: MouseEvent) -> Vec<Action>;

    /// Render the component into `area`.
    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool);

    /// Render floating content above everything else. `bounds` is the whole
    /// screen.
    fn draw_overlay(&mut self, _frame: &mut Frame, _bounds: Rect) {}

    /// True while the component wants keys the App would otherwise take.
    fn is_capturing(&self) -> bool {
        false
    }
}
