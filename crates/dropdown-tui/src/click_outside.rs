//! ClickOutside — pointer hit-testing against the regions a control drew.
//!
//! Each draw registers the rectangles that belong to the control (its button,
//! its option panel). A left click that lands in none of them is an outside
//! interaction and dismisses the dropdown.

use dropdown_core::{Dropdown, Transition};
use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::fmt::Display;

pub struct ClickOutside<R> {
    regions: Vec<(R, Rect)>,
}

impl<R: Copy + PartialEq> ClickOutside<R> {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Record (or move) the area for `region`.
    pub fn register(&mut self, region: R, area: Rect) {
        match self.regions.iter_mut().find(|(r, _)| *r == region) {
            Some(slot) => slot.1 = area,
            None => self.regions.push((region, area)),
        }
    }

    pub fn forget(&mut self, region: R) {
        self.regions.retain(|(r, _)| *r != region);
    }

    pub fn area(&self, region: R) -> Option<Rect> {
        self.regions
            .iter()
            .find(|(r, _)| *r == region)
            .map(|(_, a)| *a)
    }

    /// The region under `(column, row)`. Later registrations win on overlap.
    pub fn hit(&self, column: u16, row: u16) -> Option<R> {
        let pos = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(_, area)| area.contains(pos))
            .map(|(r, _)| *r)
    }

    /// Dismiss `dropdown` if `event` is a left press outside every region.
    pub fn dismiss_if_outside<T>(&self, event: &MouseEvent, dropdown: &mut Dropdown<T>) -> Transition
    where
        T: Clone + PartialEq + Display,
    {
        let is_press = matches!(event.kind, MouseEventKind::Down(MouseButton::Left));
        if !is_press || self.hit(event.column, event.row).is_some() {
            return Transition::default();
        }
        dropdown.on_outside_dismiss()
    }
}

impl<R: Copy + PartialEq> Default for ClickOutside<R> {
    fn default() -> Self {
        Self::new()
    }
}
