//! DropdownField — one dropdown control wired to the terminal.
//!
//! Owns the controller, the scroll window of its panel and the regions it drew
//! last frame. Commits leave through `Action::Commit`; the App answers with
//! `set_value` once it has stored the new value.

use std::cell::RefCell;
use std::rc::Rc;

use dropdown_core::focus;
use dropdown_core::{Dropdown, DropdownProps, GroupPosition, Label, Transition, Viewport};
use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{layout::Rect, Frame};
use tracing::{debug, trace};

use crate::{
    action::{Action, Slot},
    click_outside::ClickOutside,
    component::Component,
    config::{DropdownConfig, PanelConfig},
    keys,
    widgets::{dropdown_button::draw_button, label::label_width, option_panel},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Button,
    Panel,
}

pub struct DropdownField {
    slot: Slot,
    dropdown: Dropdown<String>,
    /// Values handed to `on_change`, waiting to become actions.
    commits: Rc<RefCell<Vec<String>>>,
    viewport: Viewport,
    regions: ClickOutside<Region>,
    /// Rows area of the panel as last drawn.
    rows_area: Option<Rect>,
    max_rows: u16,
}

impl DropdownField {
    pub fn new(
        slot: Slot,
        config: &DropdownConfig,
        value: String,
        group_position: Option<GroupPosition>,
        panel: &PanelConfig,
    ) -> Self {
        let commits = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&commits);
        let options = config.option_set();
        let len = options.len();

        let mut props = DropdownProps::new(options, value, move |v| sink.borrow_mut().push(v))
            .name(config.name.clone());
        if let Some(width) = config.width {
            props = props.width(width);
        }
        if let Some(class) = &config.class {
            props = props.class_name(class.as_str());
        }
        if let Some(prefix) = &config.prefix {
            props = props.prefix(prefix.as_str());
        }
        if let Some(suffix) = &config.suffix {
            props = props.suffix(suffix.as_str());
        }
        if let Some(position) = group_position {
            props = props.group_position(position);
        }

        let dropdown = Dropdown::new(props);
        debug!(
            slot,
            name = %config.name,
            class = dropdown.decor().class_name.as_deref().unwrap_or("-"),
            "dropdown field created"
        );

        Self {
            slot,
            dropdown,
            commits,
            viewport: Viewport::new(len, 0),
            regions: ClickOutside::new(),
            rows_area: None,
            max_rows: panel.max_rows,
        }
    }

    pub fn name(&self) -> &str {
        self.dropdown.decor().name.as_deref().unwrap_or("")
    }

    /// Configured width, else wide enough for the widest option.
    pub fn width(&self) -> u16 {
        let decor = self.dropdown.decor();
        if let Some(width) = decor.width {
            return width;
        }
        let text = |l: &Option<Label>| l.as_ref().map_or(0, label_width);
        let widest = self
            .dropdown
            .options()
            .iter()
            .map(|o| label_width(&o.label))
            .max()
            .unwrap_or(0);
        // Borders plus one space either side of the text.
        let fit = 4 + text(&decor.prefix) + widest + text(&decor.suffix);
        fit.min(u16::MAX as usize) as u16
    }

    pub fn is_open(&self) -> bool {
        self.dropdown.is_open()
    }

    pub fn value(&self) -> &str {
        self.dropdown.value()
    }

    pub fn highlighted(&self) -> &str {
        self.dropdown.highlighted()
    }

    /// Label text of the option shown on the closed control.
    pub fn shown_label(&self) -> Option<String> {
        self.dropdown.display_label().map(|l| l.plain())
    }

    /// Feed the externally owned value back in.
    pub fn set_value(&mut self, value: String) {
        let t = self.dropdown.set_value(value);
        self.settle(t);
    }

    /// Close without committing, as if the pointer went elsewhere.
    pub fn dismiss(&mut self) {
        let t = self.dropdown.on_outside_dismiss();
        self.settle(t);
    }

    fn settle(&mut self, t: Transition) {
        if !self.dropdown.is_open() {
            // The panel is gone as of now, not as of the next frame.
            self.regions.forget(Region::Panel);
            self.rows_area = None;
        }
        if t.changed {
            focus::settle(&self.dropdown.render(), &mut self.viewport);
        }
    }

    fn drain_commits(&mut self) -> Vec<Action> {
        self.commits
            .borrow_mut()
            .drain(..)
            .map(|value| {
                debug!(
                    slot = self.slot,
                    class = self.dropdown.decor().class_name.as_deref().unwrap_or("-"),
                    value = %value,
                    "commit queued"
                );
                Action::Commit {
                    slot: self.slot,
                    value,
                }
            })
            .collect()
    }

    fn option_at(&self, row: u16) -> Option<String> {
        let area = self.rows_area?;
        if row < area.y || row >= area.bottom() {
            return None;
        }
        let index = self.viewport.index_at((row - area.y) as usize)?;
        self.dropdown.options().get(index).map(|o| o.value.clone())
    }
}

impl Component for DropdownField {
    fn slot(&self) -> Slot {
        self.slot
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<Action> {
        if key.kind == KeyEventKind::Release {
            return vec![];
        }
        let open = self.dropdown.is_open();
        let mut actions = Vec::new();

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.dismiss();
                actions.push(if key.code == KeyCode::Tab {
                    Action::FocusNext
                } else {
                    Action::FocusPrev
                });
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let t = if open {
                    self.dropdown.commit_highlighted()
                } else {
                    self.dropdown.on_toggle_click()
                };
                self.settle(t);
            }
            _ if open => {
                let t = self.dropdown.on_key_down(keys::to_key(&key));
                if !t.changed && !t.prevent_default {
                    debug!(slot = self.slot, code = ?key.code, "key left to host");
                }
                trace!(slot = self.slot, highlighted = %self.highlighted(), "panel key");
                self.settle(t);
            }
            KeyCode::Left => actions.push(Action::FocusPrev),
            KeyCode::Right => actions.push(Action::FocusNext),
            _ => {}
        }

        actions.extend(self.drain_commits());
        actions
    }

    fn handle_mouse(&mut self, event: MouseEvent) -> Vec<Action> {
        let mut actions = Vec::new();
        let hit = self.regions.hit(event.column, event.row);

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => match hit {
                Some(Region::Button) => {
                    let t = self.dropdown.on_toggle_click();
                    self.settle(t);
                    actions.push(Action::FocusSlot(self.slot));
                }
                Some(Region::Panel) if self.dropdown.is_open() => {
                    if let Some(value) = self.option_at(event.row) {
                        let t = self.dropdown.on_option_click(value);
                        self.settle(t);
                    }
                }
                Some(Region::Panel) => {}
                None => {
                    let t = self.regions.dismiss_if_outside(&event, &mut self.dropdown);
                    self.settle(t);
                }
            },
            MouseEventKind::ScrollUp if hit == Some(Region::Panel) => self.viewport.scroll_up(1),
            MouseEventKind::ScrollDown if hit == Some(Region::Panel) => {
                self.viewport.scroll_down(1)
            }
            _ => {}
        }

        actions.extend(self.drain_commits());
        actions
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        self.regions.register(Region::Button, area);
        let label = self.dropdown.display_label();
        draw_button(
            frame,
            area,
            self.dropdown.decor(),
            label.as_ref(),
            focused,
            self.dropdown.is_open(),
        );
    }

    fn draw_overlay(&mut self, frame: &mut Frame, bounds: Rect) {
        if !self.dropdown.is_open() {
            self.regions.forget(Region::Panel);
            self.rows_area = None;
            return;
        }
        let Some(anchor) = self.regions.area(Region::Button) else {
            return;
        };

        let len = self.dropdown.options().len();
        let rows = len.clamp(1, self.max_rows.max(1) as usize);
        let area = option_panel::panel_rect(anchor, rows, self.width(), bounds);
        let rows_area = option_panel::rows_area(area);

        self.viewport.resize(len, rows_area.height as usize);
        let model = self.dropdown.render();
        focus::settle(&model, &mut self.viewport);
        option_panel::draw_panel(frame, area, &model, &self.viewport);

        self.regions.register(Region::Panel, area);
        self.rows_area = Some(rows_area);
    }

    fn is_capturing(&self) -> bool {
        self.is_open()
    }
}
