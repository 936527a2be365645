//! DropdownProps — everything the caller configures on one control.
//!
//! Only `options`, `value` and `on_change` feed the state machine. The rest is
//! carried through to the host's renderer untouched.

use serde::{Deserialize, Serialize};

use crate::option_set::{DropdownOption, Label, OptionSet};

pub type ChangeHandler<T> = Box<dyn FnMut(T)>;
pub type ValueRenderer<T> = Box<dyn Fn(&DropdownOption<T>) -> Label>;

/// Where a control sits in a row of visually joined buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupPosition {
    Start,
    Middle,
    End,
}

/// Render-only decoration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decor {
    pub prefix: Option<Label>,
    pub suffix: Option<Label>,
    pub group_position: Option<GroupPosition>,
    pub width: Option<u16>,
    pub name: Option<String>,
    pub class_name: Option<String>,
}

pub struct DropdownProps<T> {
    pub options: OptionSet<T>,
    pub value: T,
    pub on_change: ChangeHandler<T>,
    pub render_value: Option<ValueRenderer<T>>,
    pub decor: Decor,
}

impl<T> DropdownProps<T> {
    pub fn new(options: OptionSet<T>, value: T, on_change: impl FnMut(T) + 'static) -> Self {
        Self {
            options,
            value,
            on_change: Box::new(on_change),
            render_value: None,
            decor: Decor::default(),
        }
    }

    pub fn render_value(mut self, f: impl Fn(&DropdownOption<T>) -> Label + 'static) -> Self {
        self.render_value = Some(Box::new(f));
        self
    }

    pub fn prefix(mut self, prefix: impl Into<Label>) -> Self {
        self.decor.prefix = Some(prefix.into());
        self
    }

    pub fn suffix(mut self, suffix: impl Into<Label>) -> Self {
        self.decor.suffix = Some(suffix.into());
        self
    }

    pub fn group_position(mut self, position: GroupPosition) -> Self {
        self.decor.group_position = Some(position);
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.decor.width = Some(width);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.decor.name = Some(name.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.decor.class_name = Some(class_name.into());
        self
    }
}
