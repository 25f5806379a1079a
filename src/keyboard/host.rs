// SPDX-License-Identifier: GPL-3.0-only

//! Keyboard window bookkeeping
//!
//! Tracks the single keyboard window, if any. The toolkit-specific window id
//! is a type parameter so the toggle logic can be exercised without a display.

use super::VirtualKeyboard;
use tracing::{debug, info};

/// What the caller must do with the window system after a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction<Id> {
    /// No keyboard exists; open a window and [`KeyboardHost::attach`] it
    Open,
    /// The keyboard with this id was detached; close its window
    Close(Id),
}

/// Owner of the at-most-one keyboard window
#[derive(Debug)]
pub struct KeyboardHost<Id> {
    active: Option<(Id, VirtualKeyboard)>,
}

impl<Id> Default for KeyboardHost<Id> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<Id: Copy + PartialEq + std::fmt::Debug> KeyboardHost<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Id of the open keyboard window
    pub fn window_id(&self) -> Option<Id> {
        self.active.as_ref().map(|(id, _)| *id)
    }

    /// Toggle semantics: close the existing keyboard, or ask for a new one
    pub fn toggle(&mut self) -> ToggleAction<Id> {
        match self.active.take() {
            Some((id, _)) => {
                info!(window = ?id, "Closing virtual keyboard");
                ToggleAction::Close(id)
            }
            None => ToggleAction::Open,
        }
    }

    /// Register a freshly opened keyboard window.
    ///
    /// Returns the id of a previous window that must be closed, if one was
    /// somehow still attached.
    pub fn attach(&mut self, id: Id) -> Option<Id> {
        info!(window = ?id, "Virtual keyboard opened");
        self.active
            .replace((id, VirtualKeyboard::new()))
            .map(|(previous, _)| previous)
            .filter(|previous| *previous != id)
    }

    /// Forget the keyboard window if `id` is it. Returns true if it was.
    pub fn detach(&mut self, id: Id) -> bool {
        if self.window_id() == Some(id) {
            debug!(window = ?id, "Virtual keyboard detached");
            self.active = None;
            true
        } else {
            false
        }
    }

    /// Keyboard state for a window id
    pub fn keyboard(&self, id: Id) -> Option<&VirtualKeyboard> {
        self.active
            .as_ref()
            .filter(|(active, _)| *active == id)
            .map(|(_, keyboard)| keyboard)
    }

    pub fn keyboard_mut(&mut self, id: Id) -> Option<&mut VirtualKeyboard> {
        self.active
            .as_mut()
            .filter(|(active, _)| *active == id)
            .map(|(_, keyboard)| keyboard)
    }
}
