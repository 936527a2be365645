//! App — event loop hosting a row of dropdowns.
//!
//! Architecture:
//! - `App` owns the committed values; each `DropdownField` only mirrors them.
//! - A blocking reader task forwards terminal events over a `tokio::mpsc`
//!   channel. The loop draws a frame, then awaits the next event.
//! - Components return `Vec<Action>`; App dispatches each Action and feeds
//!   accepted values back through `DropdownField::set_value`.

use std::io;
use std::path::PathBuf;

use ratatui::crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tracing::{debug, info, trace, warn};

use dropdown_core::GroupPosition;

use crate::action::{Action, Slot};
use crate::component::Component;
use crate::components::dropdown_field::DropdownField;
use crate::config::Config;
use crate::focus::FocusRing;
use crate::session::Session;
use crate::theme::{style_default, style_muted, style_secondary, C_ACCENT, C_BG};
use crate::widgets::status_bar::{draw_keys_bar, draw_log_bar, draw_separator, InputMode};

pub struct App {
    fields: Vec<DropdownField>,
    /// Configured value per slot, restored by `ResetValues`.
    defaults: Vec<String>,
    focus: FocusRing,
    session: Session,
    session_path: PathBuf,
    last_message: Option<String>,
    should_quit: bool,
}

/// Where a control sits in a row of `len` joined controls.
fn group_position(slot: Slot, len: usize) -> Option<GroupPosition> {
    match (slot, len) {
        (_, 0 | 1) => None,
        (0, _) => Some(GroupPosition::Start),
        (s, l) if s + 1 == l => Some(GroupPosition::End),
        _ => Some(GroupPosition::Middle),
    }
}

impl App {
    pub fn new(config: &Config, session: Session, session_path: PathBuf) -> Self {
        let len = config.dropdowns.len();
        let mut fields = Vec::with_capacity(len);
        let mut defaults = Vec::with_capacity(len);

        for (slot, dd) in config.dropdowns.iter().enumerate() {
            // A remembered value only counts if the option still exists.
            let value = session
                .value(&dd.name)
                .filter(|v| dd.options.iter().any(|o| o.value == *v))
                .map(str::to_string)
                .unwrap_or_else(|| dd.value.clone());
            debug!(slot, name = %dd.name, value = %value, "dropdown mounted");
            fields.push(DropdownField::new(
                slot,
                dd,
                value,
                group_position(slot, len),
                &config.panel,
            ));
            defaults.push(dd.value.clone());
        }

        Self {
            fields,
            defaults,
            focus: FocusRing::new(len),
            session,
            session_path,
            last_message: None,
            should_quit: false,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        debug!("run(): enabling raw mode");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        debug!("run(): terminal created, size={:?}", terminal.size());

        let (tx, mut rx) = mpsc::channel::<Event>(256);

        // ── Background task: keyboard/mouse events ────────────────────────────
        tokio::task::spawn_blocking(move || loop {
            match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(ev).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        });

        // ── Main loop ─────────────────────────────────────────────────────────
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal.draw(|f| self.draw(f))?;
            }
            if self.should_quit() {
                break;
            }

            let Some(ev) = rx.recv().await else {
                break;
            };
            needs_redraw = self.handle_event(ev);
            while let Ok(next) = rx.try_recv() {
                needs_redraw |= self.handle_event(next);
            }
        }

        // ── Teardown ──────────────────────────────────────────────────────────
        self.save_session();
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        info!("dropdown demo stopped");

        Ok(())
    }

    fn mode(&self) -> InputMode {
        if self.fields.iter().any(|f| f.is_capturing()) {
            InputMode::Choose
        } else {
            InputMode::Browse
        }
    }

    /// Route one terminal event. Returns whether a redraw is needed.
    pub fn handle_event(&mut self, ev: Event) -> bool {
        let actions = match ev {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self
                .fields
                .iter_mut()
                .flat_map(|f| f.handle_mouse(mouse))
                .collect(),
            Event::Resize(..) => Vec::new(),
            _ => return false,
        };
        for action in actions {
            self.dispatch(action);
        }
        true
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<Action> {
        if key.kind == KeyEventKind::Release {
            return Vec::new();
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return vec![Action::Quit];
        }

        let capturing = self.mode() == InputMode::Choose;
        if !capturing {
            match key.code {
                KeyCode::Char('q') => return vec![Action::Quit],
                KeyCode::Char('r') => return vec![Action::ResetValues],
                _ => {}
            }
        }

        match self.focus.current() {
            Some(slot) => self.fields[slot].handle_key(key),
            None => Vec::new(),
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        trace!(?action, "dispatch");
        match action {
            Action::Commit { slot, value } => {
                let Some(field) = self.fields.get_mut(slot) else {
                    warn!(slot, "commit for unknown dropdown");
                    return;
                };
                field.set_value(value.clone());
                let name = field.name().to_string();
                let label = field.shown_label().unwrap_or_else(|| value.clone());
                info!(dropdown = %name, value = %value, "value committed");
                self.session.remember(&name, &value);
                self.save_session();
                self.last_message = Some(format!("{name}: {label}"));
            }
            Action::ResetValues => {
                for (field, value) in self.fields.iter_mut().zip(&self.defaults) {
                    field.set_value(value.clone());
                    let name = field.name().to_string();
                    self.session.remember(&name, value);
                }
                info!("values reset to configured defaults");
                self.save_session();
                self.last_message = Some("values reset".to_string());
            }
            Action::FocusNext => {
                self.focus.next();
            }
            Action::FocusPrev => {
                self.focus.prev();
            }
            Action::FocusSlot(slot) => {
                self.focus.set(slot);
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn save_session(&self) {
        if let Err(e) = self.session.save(&self.session_path) {
            warn!("could not save session to {}: {}", self.session_path.display(), e);
        }
    }

    pub fn value(&self, slot: Slot) -> Option<&str> {
        self.fields.get(slot).map(|f| f.value())
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(Style::default().bg(C_BG)), area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Length(1),
                Constraint::Length(3), // controls
                Constraint::Length(1), // committed values
                Constraint::Min(0),
                Constraint::Length(1), // separator
                Constraint::Length(1), // log bar
                Constraint::Length(1), // keys bar
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled(" ◆ ", Style::default().fg(C_ACCENT)),
            Span::styled(
                "dropdown demo",
                style_default().add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(title), rows[0]);

        self.draw_controls(frame, rows[2]);
        self.draw_values(frame, rows[3]);

        draw_separator(frame, rows[5]);
        draw_log_bar(frame, rows[6], self.last_message.as_deref());
        draw_keys_bar(frame, rows[7], self.mode());

        // Panels float over everything drawn above.
        for field in &mut self.fields {
            field.draw_overlay(frame, area);
        }
    }

    fn draw_controls(&mut self, frame: &mut Frame, area: Rect) {
        let mut x = area.x + 1;
        for field in &mut self.fields {
            let width = field.width().min(area.right().saturating_sub(x));
            let rect = Rect::new(x, area.y, width, area.height);
            let focused = self.focus.is_focused(field.slot());
            field.draw(frame, rect, focused);
            x = x.saturating_add(width);
        }
    }

    fn draw_values(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::raw(" ")];
        for (slot, field) in self.fields.iter().enumerate() {
            if slot > 0 {
                spans.push(Span::styled("  ·  ", style_muted()));
            }
            spans.push(Span::styled(format!("{}=", field.name()), style_secondary()));
            let value = self.value(slot).unwrap_or_default().to_string();
            spans.push(Span::styled(value, style_default()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
