// SPDX-License-Identifier: GPL-3.0-only

//! On-screen virtual keyboard
//!
//! The keyboard itself holds no text. Every press is applied to the
//! [`SharedText`] passed in by the caller, so the main window caption and the
//! keyboard always operate on the same value.
//!
//! Shift is one-shot: after a shifted character is typed the keyboard drops
//! back to lowercase. Pressing shift twice returns to lowercase as well.

pub mod host;
pub mod layout;

pub use host::{KeyboardHost, ToggleAction};
pub use layout::{KeyKind, KeyPosition, Layout};

use crate::caption::SharedText;
use tracing::{debug, warn};

/// Which label grid is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShiftState {
    #[default]
    Lowercase,
    Shifted,
}

impl ShiftState {
    pub fn is_shifted(self) -> bool {
        self == ShiftState::Shifted
    }

    fn toggled(self) -> Self {
        match self {
            ShiftState::Lowercase => ShiftState::Shifted,
            ShiftState::Shifted => ShiftState::Lowercase,
        }
    }
}

/// Result of a key press, for the caller to act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// A character was appended to the caption
    Typed(char),
    /// The last character was removed (`None` if the caption was empty)
    Deleted(Option<char>),
    /// Shift state changed; the grid must be redrawn
    ShiftToggled(ShiftState),
    /// The keyboard window should close; the caption is untouched
    CloseRequested,
    /// Label is not part of the layout
    Ignored,
}

/// Virtual keyboard state machine
#[derive(Debug, Clone, Default)]
pub struct VirtualKeyboard {
    layout: Layout,
    shift: ShiftState,
}

impl VirtualKeyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift_state(&self) -> ShiftState {
        self.shift
    }

    /// Label grid for the current shift state
    pub fn rows(&self) -> &'static [&'static [&'static str]] {
        self.layout.rows(self.shift.is_shifted())
    }

    /// Flip the shift state
    pub fn toggle_shift(&mut self) -> ShiftState {
        self.shift = self.shift.toggled();
        debug!(shift = ?self.shift, "Shift toggled");
        self.shift
    }

    /// Press the key with the given label.
    ///
    /// The label may come from either grid; the character emitted is taken
    /// from the grid selected by the current shift state.
    pub fn press(&mut self, label: &str, text: &mut SharedText) -> KeyOutcome {
        match self.layout.find(label) {
            Some(position) => self.press_at(position, text),
            None => {
                warn!(label, "Key label not in layout");
                KeyOutcome::Ignored
            }
        }
    }

    /// Press the key at a grid position
    pub fn press_at(&mut self, position: KeyPosition, text: &mut SharedText) -> KeyOutcome {
        let Some(label) = self.layout.label(position, self.shift.is_shifted()) else {
            warn!(?position, "Key position outside layout");
            return KeyOutcome::Ignored;
        };

        match KeyKind::from_label(label) {
            Some(KeyKind::Char(ch)) => {
                text.push(ch);
                if self.shift.is_shifted() {
                    self.shift = ShiftState::Lowercase;
                }
                KeyOutcome::Typed(ch)
            }
            Some(KeyKind::Space) => {
                text.push(' ');
                KeyOutcome::Typed(' ')
            }
            Some(KeyKind::Enter) => {
                text.push('\n');
                KeyOutcome::Typed('\n')
            }
            Some(KeyKind::Backspace) => KeyOutcome::Deleted(text.pop()),
            Some(KeyKind::Shift) => KeyOutcome::ShiftToggled(self.toggle_shift()),
            Some(KeyKind::Close) => KeyOutcome::CloseRequested,
            None => KeyOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_labels(keyboard: &mut VirtualKeyboard, labels: &[&str]) -> SharedText {
        let mut text = SharedText::new();
        for label in labels {
            keyboard.press(label, &mut text);
        }
        text
    }

    #[test]
    fn test_hello() {
        let mut keyboard = VirtualKeyboard::new();
        let text = type_labels(&mut keyboard, &["h", "e", "l", "l", "o"]);
        assert_eq!(text.get(), "hello");
    }

    #[test]
    fn test_shift_is_one_shot() {
        let mut keyboard = VirtualKeyboard::new();
        let text = type_labels(&mut keyboard, &["⇧", "a", "b"]);
        assert_eq!(text.get(), "Ab");
        assert_eq!(keyboard.shift_state(), ShiftState::Lowercase);
    }

    #[test]
    fn test_shifted_symbol_consumes_shift() {
        let mut keyboard = VirtualKeyboard::new();
        let text = type_labels(&mut keyboard, &["⇧", "1", "1"]);
        assert_eq!(text.get(), "!1");
    }

    #[test]
    fn test_space_keeps_shift() {
        let mut keyboard = VirtualKeyboard::new();
        let text = type_labels(&mut keyboard, &["⇧", " ", "a"]);
        assert_eq!(text.get(), " A");
    }

    #[test]
    fn test_double_shift_returns_to_lowercase() {
        let mut keyboard = VirtualKeyboard::new();
        let text = type_labels(&mut keyboard, &["⇧", "⇧", "a"]);
        assert_eq!(text.get(), "a");
    }

    #[test]
    fn test_shift_swaps_rendered_grid() {
        let mut keyboard = VirtualKeyboard::new();
        assert_eq!(keyboard.rows()[1][0], "q");
        keyboard.toggle_shift();
        assert_eq!(keyboard.rows()[1][0], "Q");
        assert_eq!(keyboard.rows()[0][0], "!");
    }

    #[test]
    fn test_backspace_on_empty() {
        let mut keyboard = VirtualKeyboard::new();
        let mut text = SharedText::new();
        assert_eq!(keyboard.press("⌫", &mut text), KeyOutcome::Deleted(None));
        assert!(text.is_empty());
    }

    #[test]
    fn test_backspace_removes_last() {
        let mut keyboard = VirtualKeyboard::new();
        let text = type_labels(&mut keyboard, &["o", "k", "⌫"]);
        assert_eq!(text.get(), "o");
    }

    #[test]
    fn test_enter_appends_single_newline() {
        let mut keyboard = VirtualKeyboard::new();
        let mut text = SharedText::new();
        text.set("hi");
        keyboard.press("⏎", &mut text);
        assert_eq!(text.get(), "hi\n");
    }

    #[test]
    fn test_close_leaves_text_untouched() {
        let mut keyboard = VirtualKeyboard::new();
        let mut text = SharedText::new();
        text.set("keep");
        assert_eq!(keyboard.press("Esc", &mut text), KeyOutcome::CloseRequested);
        assert_eq!(text.get(), "keep");
        assert_eq!(text.revision(), 1);
    }

    #[test]
    fn test_unknown_label_ignored() {
        let mut keyboard = VirtualKeyboard::new();
        let mut text = SharedText::new();
        assert_eq!(keyboard.press("F1", &mut text), KeyOutcome::Ignored);
        assert!(text.is_empty());
    }

    #[test]
    fn test_press_at_uses_active_grid() {
        let mut keyboard = VirtualKeyboard::new();
        let mut text = SharedText::new();
        keyboard.toggle_shift();
        let outcome = keyboard.press_at(KeyPosition::new(1, 12), &mut text);
        assert_eq!(outcome, KeyOutcome::Typed('|'));
        assert_eq!(
            keyboard.press_at(KeyPosition::new(9, 0), &mut text),
            KeyOutcome::Ignored
        );
    }
}
