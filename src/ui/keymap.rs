//! Key bindings
//!
//! Translates terminal key events (and plain characters for `--keys`) into
//! [`AppEvent`]s:
//! - `0`-`9` digits, `.` or `,` decimal point
//! - `+ - * x /` operators, `Enter` or `=` equals
//! - `Backspace` or `<` delete, `Esc`, `Delete` or `c` reset
//! - `t` cycle theme, `F1`-`F3` pick a theme
//! - `Left`/`Right` scroll a wide display, `y` copy, `?` help
//! - `q` or `Ctrl-C` quit

use crate::app::AppEvent;
use crate::engine::Action;
use crate::engine::Operator;
use crate::theme::ThemeId;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn map_key(key: KeyEvent) -> AppEvent {
    if key.kind == KeyEventKind::Release {
        return AppEvent::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return AppEvent::Quit;
    }

    match key.code {
        KeyCode::Char(c) => map_char(c),
        KeyCode::Enter => AppEvent::Calculator(Action::Equals),
        KeyCode::Backspace => AppEvent::Calculator(Action::Delete),
        KeyCode::Esc | KeyCode::Delete => AppEvent::Calculator(Action::Reset),
        KeyCode::Left => AppEvent::ScrollLeft,
        KeyCode::Right => AppEvent::ScrollRight,
        KeyCode::F(n @ 1..=3) => AppEvent::SelectTheme(ThemeId::ALL[usize::from(n - 1)]),
        _ => AppEvent::None,
    }
}

pub fn map_char(c: char) -> AppEvent {
    if let Some(digit) = c.to_digit(10) {
        return AppEvent::Calculator(Action::Digit(digit as u8));
    }
    if let Some(op) = Operator::from_char(c) {
        return AppEvent::Calculator(Action::Operator(op));
    }

    match c {
        '.' | ',' => AppEvent::Calculator(Action::DecimalPoint),
        '=' => AppEvent::Calculator(Action::Equals),
        '<' => AppEvent::Calculator(Action::Delete),
        'c' | 'C' => AppEvent::Calculator(Action::Reset),
        't' => AppEvent::CycleTheme,
        'y' => AppEvent::CopyDisplay,
        '?' => AppEvent::Help,
        'q' => AppEvent::Quit,
        _ => AppEvent::None,
    }
}

/// Calculator actions for a key string, skipping anything else
pub fn actions_from_keys(keys: &str) -> Vec<Action> {
    keys.chars()
        .filter_map(|c| match map_char(c) {
            AppEvent::Calculator(action) => Some(action),
            _ => None,
        })
        .collect()
}
