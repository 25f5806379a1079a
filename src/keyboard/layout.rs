// SPDX-License-Identifier: GPL-3.0-only

//! Virtual keyboard layout tables
//!
//! Two grids of identical shape: the unshifted labels and their shifted
//! counterparts. A key is addressed by its [`KeyPosition`] in either grid.

/// Delete the last character
pub const BACKSPACE_LABEL: &str = "⌫";
/// Append a newline
pub const ENTER_LABEL: &str = "⏎";
/// Toggle the shift state
pub const SHIFT_LABEL: &str = "⇧";
/// Append a space
pub const SPACE_LABEL: &str = " ";
/// Close the keyboard window
pub const CLOSE_LABEL: &str = "Esc";

/// Unshifted labels
pub const UNSHIFTED: [&[&str]; 5] = [
    &[
        "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "-", "=", BACKSPACE_LABEL,
    ],
    &[
        "q", "w", "e", "r", "t", "y", "u", "i", "o", "p", "[", "]", "\\",
    ],
    &[
        "a", "s", "d", "f", "g", "h", "j", "k", "l", ";", "'", ENTER_LABEL,
    ],
    &[
        SHIFT_LABEL, "z", "x", "c", "v", "b", "n", "m", ",", ".", "/", SHIFT_LABEL,
    ],
    &[SPACE_LABEL, CLOSE_LABEL],
];

/// Shifted labels, same shape as [`UNSHIFTED`]
pub const SHIFTED: [&[&str]; 5] = [
    &[
        "!", "@", "#", "$", "%", "^", "&", "*", "(", ")", "_", "+", BACKSPACE_LABEL,
    ],
    &[
        "Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P", "{", "}", "|",
    ],
    &[
        "A", "S", "D", "F", "G", "H", "J", "K", "L", ":", "\"", ENTER_LABEL,
    ],
    &[
        SHIFT_LABEL, "Z", "X", "C", "V", "B", "N", "M", "<", ">", "?", SHIFT_LABEL,
    ],
    &[SPACE_LABEL, CLOSE_LABEL],
];

/// Row/column address of a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPosition {
    pub row: usize,
    pub col: usize,
}

impl KeyPosition {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// What a key does when pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Appends its character
    Char(char),
    Space,
    Backspace,
    Enter,
    Shift,
    Close,
}

impl KeyKind {
    /// Classify a label from the layout tables
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            BACKSPACE_LABEL => Some(KeyKind::Backspace),
            ENTER_LABEL => Some(KeyKind::Enter),
            SHIFT_LABEL => Some(KeyKind::Shift),
            SPACE_LABEL => Some(KeyKind::Space),
            CLOSE_LABEL => Some(KeyKind::Close),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Some(KeyKind::Char(ch)),
                    _ => None,
                }
            }
        }
    }
}

/// Pair of label grids
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    unshifted: &'static [&'static [&'static str]],
    shifted: &'static [&'static [&'static str]],
}

impl Default for Layout {
    fn default() -> Self {
        Self::QWERTY
    }
}

impl Layout {
    /// The built-in QWERTY layout
    pub const QWERTY: Layout = Layout {
        unshifted: &UNSHIFTED,
        shifted: &SHIFTED,
    };

    /// Grid for the given shift state
    pub fn rows(&self, shifted: bool) -> &'static [&'static [&'static str]] {
        if shifted { self.shifted } else { self.unshifted }
    }

    /// Label at a position for the given shift state
    pub fn label(&self, position: KeyPosition, shifted: bool) -> Option<&'static str> {
        self.rows(shifted)
            .get(position.row)
            .and_then(|row| row.get(position.col))
            .copied()
    }

    /// Find a label in either grid, unshifted first
    pub fn find(&self, label: &str) -> Option<KeyPosition> {
        [self.unshifted, self.shifted].into_iter().find_map(|grid| {
            grid.iter().enumerate().find_map(|(row, keys)| {
                keys.iter()
                    .position(|key| *key == label)
                    .map(|col| KeyPosition::new(row, col))
            })
        })
    }

    /// True when both grids have the same number of rows and row lengths
    pub fn is_aligned(&self) -> bool {
        self.unshifted.len() == self.shifted.len()
            && self
                .unshifted
                .iter()
                .zip(self.shifted.iter())
                .all(|(a, b)| a.len() == b.len())
    }
}
