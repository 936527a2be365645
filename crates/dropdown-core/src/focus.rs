//! Focus step — keeps the highlighted option visible and focused while open.
//!
//! The host runs [`settle`] after any transition that changed the highlight or
//! the open flag. Scrolling and focus themselves belong to a [`FocusSurface`].

use std::ops::Range;

use tracing::{debug, trace};

use crate::controller::RenderModel;
use crate::error::FocusError;

/// Whatever can scroll a row into view and give it input focus.
pub trait FocusSurface {
    fn reveal(&mut self, index: usize) -> Result<(), FocusError>;
}

/// Reveal the highlighted option if the panel is open. Errors are logged and
/// dropped; calling this repeatedly with the same model is harmless.
pub fn settle<T, S>(model: &RenderModel<'_, T>, surface: &mut S)
where
    S: FocusSurface + ?Sized,
{
    if !model.open {
        return;
    }
    let Some(index) = model.highlighted_index() else {
        return;
    };
    match surface.reveal(index) {
        Ok(()) => trace!(index, "focused highlighted option"),
        Err(e) => debug!("focus skipped: {}", e),
    }
}

/// A scrolling window of `height` rows over a list of `len` rows.
///
/// Revealing a row scrolls the minimum needed to bring it inside the window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    offset: usize,
    height: usize,
    len: usize,
    focused: Option<usize>,
}

impl Viewport {
    pub fn new(len: usize, height: usize) -> Self {
        Self {
            offset: 0,
            height,
            len,
            focused: None,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Resize the window. Keeps the offset inside the new bounds.
    pub fn resize(&mut self, len: usize, height: usize) {
        self.len = len;
        self.height = height;
        if self.focused.is_some_and(|f| f >= len) {
            self.focused = None;
        }
        let max_offset = len.saturating_sub(height);
        self.offset = self.offset.min(max_offset);
    }

    /// Rows currently inside the window.
    pub fn visible(&self) -> Range<usize> {
        let end = (self.offset + self.height).min(self.len);
        self.offset.min(end)..end
    }

    /// Row position (within the window) of list index `index`, if visible.
    pub fn row_of(&self, index: usize) -> Option<usize> {
        self.visible().contains(&index).then(|| index - self.offset)
    }

    /// List index at window row `row`, if that row holds an item.
    pub fn index_at(&self, row: usize) -> Option<usize> {
        let index = self.offset + row;
        (row < self.height && index < self.len).then_some(index)
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        let max_offset = self.len.saturating_sub(self.height);
        self.offset = (self.offset + n).min(max_offset);
    }
}

impl FocusSurface for Viewport {
    fn reveal(&mut self, index: usize) -> Result<(), FocusError> {
        if self.height == 0 {
            return Err(FocusError::NotMounted);
        }
        if index >= self.len {
            return Err(FocusError::OutOfRange {
                index,
                len: self.len,
            });
        }
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + self.height {
            self.offset = index + 1 - self.height;
        }
        self.focused = Some(index);
        Ok(())
    }
}
