// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent,
                       MouseEventKind};

use crate::{Pos, SwitchKey, col, row};

/// The subset of terminal input that a slider switch reacts to. Everything else is
/// [`SwitchInput::Ignored`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitchInput {
    Key(SwitchKey),
    /// Left button pressed.
    MouseDown(Pos),
    /// Any button released.
    MouseUp(Pos),
    MouseMove(Pos),
    FocusGained,
    FocusLost,
    Ignored,
}

/// Only [`KeyEventKind::Press`] can activate. Terminals without the kitty keyboard
/// protocol only ever send `Press`, others also send `Repeat` and `Release`, which
/// would otherwise toggle the switch more than once per key stroke.
///
/// A terminal has no separate legacy identifier for the space bar, so
/// [`KeyCode::Char(' ')`](KeyCode::Char) maps to [`SwitchKey::Spacebar`].
impl From<KeyEvent> for SwitchKey {
    fn from(key_event: KeyEvent) -> Self {
        match key_event {
            KeyEvent {
                kind: KeyEventKind::Press,
                code: KeyCode::Enter,
                ..
            } => SwitchKey::Enter,
            KeyEvent {
                kind: KeyEventKind::Press,
                code: KeyCode::Char(' '),
                ..
            } => SwitchKey::Spacebar,
            _ => SwitchKey::Other,
        }
    }
}

impl From<MouseEvent> for SwitchInput {
    fn from(mouse_event: MouseEvent) -> Self {
        let pos = col(mouse_event.column) + row(mouse_event.row);
        match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => SwitchInput::MouseDown(pos),
            MouseEventKind::Up(_) => SwitchInput::MouseUp(pos),
            MouseEventKind::Moved => SwitchInput::MouseMove(pos),
            _ => SwitchInput::Ignored,
        }
    }
}

impl From<&Event> for SwitchInput {
    fn from(event: &Event) -> Self {
        match event {
            Event::Key(key_event) => SwitchInput::Key((*key_event).into()),
            Event::Mouse(mouse_event) => (*mouse_event).into(),
            Event::FocusGained => SwitchInput::FocusGained,
            Event::FocusLost => SwitchInput::FocusLost,
            _ => SwitchInput::Ignored,
        }
    }
}
