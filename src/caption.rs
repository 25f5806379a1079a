// SPDX-License-Identifier: GPL-3.0-only

//! Shared caption text
//!
//! [`SharedText`] is the single string that backs both the caption input of
//! the main window and the virtual keyboard. The application model owns it;
//! every widget that edits or displays the caption goes through it, so all
//! views see the same value. Interested parties register listeners that are
//! called after every change.

use std::fmt;

/// Identifier returned by [`SharedText::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&str) + Send>;

/// Observable caption string
#[derive(Default)]
pub struct SharedText {
    value: String,
    revision: u64,
    next_listener: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

impl SharedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value
    pub fn get(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Number of changes applied so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the whole value (used by the caption text input)
    pub fn set(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value == self.value {
            return;
        }
        self.value = value;
        self.changed();
    }

    /// Append a single character
    pub fn push(&mut self, ch: char) {
        self.value.push(ch);
        self.changed();
    }

    /// Remove the last character. Returns it, or `None` when already empty.
    pub fn pop(&mut self) -> Option<char> {
        let ch = self.value.pop()?;
        self.changed();
        Some(ch)
    }

    /// Register a listener called with the new value after each change
    pub fn subscribe(&mut self, listener: impl FnMut(&str) + Send + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn changed(&mut self) {
        self.revision += 1;
        for (_, listener) in &mut self.listeners {
            listener(&self.value);
        }
    }
}

impl fmt::Debug for SharedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedText")
            .field("value", &self.value)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_push_and_pop() {
        let mut text = SharedText::new();
        text.push('h');
        text.push('i');
        assert_eq!(text.get(), "hi");
        assert_eq!(text.pop(), Some('i'));
        assert_eq!(text.get(), "h");
    }

    #[test]
    fn test_pop_on_empty_is_noop() {
        let mut text = SharedText::new();
        assert_eq!(text.pop(), None);
        assert!(text.is_empty());
        assert_eq!(text.revision(), 0);
    }

    #[test]
    fn test_pop_removes_whole_character() {
        let mut text = SharedText::new();
        text.set("añ");
        assert_eq!(text.pop(), Some('ñ'));
        assert_eq!(text.get(), "a");
    }

    #[test]
    fn test_listeners_see_latest_value() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut text = SharedText::new();
        text.subscribe(move |value| sink.lock().unwrap().push(value.to_string()));

        text.push('a');
        text.set("abc");
        text.pop();

        assert_eq!(*seen.lock().unwrap(), vec!["a", "abc", "ab"]);
        assert_eq!(text.revision(), 3);
    }

    #[test]
    fn test_set_same_value_does_not_notify() {
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);

        let mut text = SharedText::new();
        text.set("same");
        text.subscribe(move |_| *counter.lock().unwrap() += 1);
        text.set("same");

        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[test]
    fn test_unsubscribe() {
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);

        let mut text = SharedText::new();
        let id = text.subscribe(move |_| *counter.lock().unwrap() += 1);
        text.push('x');
        assert!(text.unsubscribe(id));
        assert!(!text.unsubscribe(id));
        text.push('y');

        assert_eq!(*calls.lock().unwrap(), 1);
    }
}
