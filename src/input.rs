//! Logical buttons, their dialog actions, and where button presses come from.

use crate::error::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::VecDeque;

/// Logical button produced by an input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Menu / exit button.
    Menu,
    /// Directional up.
    Up,
    /// Directional down.
    Down,
    /// Directional left.
    Left,
    /// Directional right.
    Right,
    /// Shoulder left.
    AltLeft,
    /// Shoulder right.
    AltRight,
    /// Cancel / back.
    Cancel,
    /// Accept.
    Accept,
    /// Start / settings.
    Settings,
}

impl Button {
    /// Key hint shown next to an action bound to this button.
    pub fn hint(self) -> &'static str {
        match self {
            Button::Menu => "Esc",
            Button::Up => "↑",
            Button::Down => "↓",
            Button::Left => "←",
            Button::Right => "→",
            Button::AltLeft => "<",
            Button::AltRight => ">",
            Button::Cancel => "Bksp",
            Button::Accept => "Enter",
            Button::Settings => "Tab",
        }
    }
}

/// Action the browse dialog performs in response to a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move the selection up one entry.
    Up,
    /// Move the selection down one entry.
    Down,
    /// Move the selection up one page.
    PageUp,
    /// Move the selection down one page.
    PageDown,
    /// Scroll the selected label left.
    ScrollLeft,
    /// Scroll the selected label right.
    ScrollRight,
    /// Go to the parent directory.
    GoUp,
    /// Enter the selected directory, or confirm the selected file.
    Select,
    /// Confirm the selection.
    Confirm,
    /// Close the dialog without a result.
    Close,
}

impl Action {
    /// Map a button to its action.
    pub fn from_button(button: Button) -> Self {
        match button {
            Button::Menu => Action::Close,
            Button::Up => Action::Up,
            Button::Down => Action::Down,
            Button::Left => Action::PageUp,
            Button::Right => Action::PageDown,
            Button::AltLeft => Action::ScrollLeft,
            Button::AltRight => Action::ScrollRight,
            Button::Cancel => Action::GoUp,
            Button::Accept => Action::Select,
            Button::Settings => Action::Confirm,
        }
    }
}

/// Capability to block until the next button press.
pub trait InputSource {
    /// Wait for the next button press.
    fn wait_for_button(&mut self) -> Result<Button>;
}

/// Reads buttons from the terminal keyboard.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl CrosstermInput {
    /// Create a keyboard input source.
    pub fn new() -> Self {
        Self
    }

    /// Translate a key event, if it is bound.
    pub fn map_key(key: KeyEvent) -> Option<Button> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        let button = match (key.modifiers, key.code) {
            (_, KeyCode::Esc) | (KeyModifiers::NONE, KeyCode::Char('q')) => Button::Menu,

            (KeyModifiers::SHIFT, KeyCode::Left) | (_, KeyCode::Char('<')) => Button::AltLeft,
            (KeyModifiers::SHIFT, KeyCode::Right) | (_, KeyCode::Char('>')) => Button::AltRight,

            (_, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => Button::Up,
            (_, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => Button::Down,
            (_, KeyCode::Left)
            | (_, KeyCode::PageUp)
            | (KeyModifiers::NONE, KeyCode::Char('h')) => Button::Left,
            (_, KeyCode::Right)
            | (_, KeyCode::PageDown)
            | (KeyModifiers::NONE, KeyCode::Char('l')) => Button::Right,

            (_, KeyCode::Backspace) => Button::Cancel,
            (_, KeyCode::Enter) => Button::Accept,
            (_, KeyCode::Tab) | (KeyModifiers::NONE, KeyCode::Char('s')) => Button::Settings,

            _ => return None,
        };
        Some(button)
    }
}

impl InputSource for CrosstermInput {
    fn wait_for_button(&mut self) -> Result<Button> {
        loop {
            if let Event::Key(key) = event::read()? {
                if let Some(button) = Self::map_key(key) {
                    return Ok(button);
                }
            }
        }
    }
}

/// Replays a fixed sequence of buttons, then presses [`Button::Menu`] forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    buttons: VecDeque<Button>,
}

impl ScriptedInput {
    /// Create a script from a button sequence.
    pub fn new(buttons: impl IntoIterator<Item = Button>) -> Self {
        Self {
            buttons: buttons.into_iter().collect(),
        }
    }

    /// Number of buttons not yet replayed.
    pub fn remaining(&self) -> usize {
        self.buttons.len()
    }
}

impl InputSource for ScriptedInput {
    fn wait_for_button(&mut self) -> Result<Button> {
        Ok(self.buttons.pop_front().unwrap_or(Button::Menu))
    }
}
