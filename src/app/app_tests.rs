use crate::app::mode::AppMode;
use crate::app::{App, AppEvent, RenderState};
use crate::engine::config::{Config, SchemeSetting};
use crate::engine::{Action, Calculator, Operator};
use crate::storage::{MemoryStore, PreferenceStore, StorageError};
use crate::theme::{ThemeId, THEME_KEY};

fn app() -> App {
    App::new(
        Calculator::new(),
        ThemeId::Theme1,
        Box::new(MemoryStore::new()),
    )
}

struct FailingStore;

impl PreferenceStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Io {
            path: key.into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}

#[test]
fn test_app_event_enum_exists() {
    let _calc = AppEvent::Calculator(Action::Equals);
    let _theme = AppEvent::SelectTheme(ThemeId::Theme2);
    let _quit = AppEvent::Quit;
    let _help = AppEvent::Help;
}

#[test]
fn test_app_handle_event_quit() {
    let mut app = app();
    app.handle_event(AppEvent::Quit);
    assert_eq!(app.mode, AppMode::Quit);
}

#[test]
fn test_app_handle_event_help_toggles() {
    let mut app = app();
    app.handle_event(AppEvent::Help);
    assert_eq!(app.mode(), AppMode::Help);
    app.handle_event(AppEvent::Help);
    assert_eq!(app.mode(), AppMode::Calculator);
}

#[test]
fn test_app_get_render_state_returns_correct_initial_state() {
    let app = app();
    let state = app.get_render_state();
    assert_eq!(state.mode, AppMode::Calculator);
    assert_eq!(state.display, "0");
    assert!(!state.overflow);
    assert_eq!(state.expression, "");
    let _render_state: RenderState = state;
}

#[test]
fn test_app_forwards_calculator_actions() {
    let mut app = app();
    for event in [
        AppEvent::Calculator(Action::Digit(7)),
        AppEvent::Calculator(Action::Operator(Operator::Multiply)),
        AppEvent::Calculator(Action::Digit(6)),
    ] {
        app.handle_event(event);
    }
    assert_eq!(app.get_render_state().expression, "7 ×");

    app.handle_event(AppEvent::Calculator(Action::Equals));
    assert_eq!(app.get_render_state().display, "42");
}

#[test]
fn test_app_overflow_render_state() {
    let mut app = app();
    for action in [
        Action::Digit(1),
        Action::Operator(Operator::Divide),
        Action::Digit(0),
        Action::Equals,
    ] {
        app.handle_event(AppEvent::Calculator(action));
    }
    let state = app.get_render_state();
    assert!(state.overflow);
    assert_eq!(state.display, "Overflow");
}

#[test]
fn test_cycle_theme_persists_selection() {
    let mut app = app();
    app.handle_event(AppEvent::CycleTheme);
    assert_eq!(app.theme(), ThemeId::Theme2);
    assert_eq!(
        app.store().get(THEME_KEY).unwrap().as_deref(),
        Some("theme-2")
    );
}

#[test]
fn test_theme_change_survives_store_failure() {
    let mut app = App::new(Calculator::new(), ThemeId::Theme1, Box::new(FailingStore));
    app.handle_event(AppEvent::SelectTheme(ThemeId::Theme3));
    assert_eq!(app.theme(), ThemeId::Theme3);
    assert!(app.get_render_state().status.is_some());
}

#[test]
fn test_from_config_uses_stored_theme() {
    let mut store = MemoryStore::new();
    store.set(THEME_KEY, "theme-3").unwrap();
    let mut config = Config::default();
    config.theme.color_scheme = SchemeSetting::Light;

    let app = App::from_config(&config, Box::new(store));
    assert_eq!(app.theme(), ThemeId::Theme3);
}

#[test]
fn test_from_config_falls_back_to_default_theme() {
    let mut config = Config::default();
    config.theme.color_scheme = SchemeSetting::None;
    config.theme.default = ThemeId::Theme2;

    let app = App::from_config(&config, Box::new(MemoryStore::new()));
    assert_eq!(app.theme(), ThemeId::Theme2);
}

#[test]
fn test_scroll_only_moves_on_wide_display() {
    let mut app = app();
    app.handle_event(AppEvent::Calculator(Action::Digit(5)));
    app.handle_event(AppEvent::ScrollLeft);
    assert_eq!(app.get_render_state().scroll_offset, 0);

    for _ in 0..15 {
        app.handle_event(AppEvent::Calculator(Action::Digit(9)));
    }
    app.handle_event(AppEvent::ScrollLeft);
    app.handle_event(AppEvent::ScrollLeft);
    assert_eq!(app.get_render_state().scroll_offset, 2);

    app.handle_event(AppEvent::ScrollRight);
    assert_eq!(app.get_render_state().scroll_offset, 1);

    app.handle_event(AppEvent::Calculator(Action::Digit(1)));
    assert_eq!(app.get_render_state().scroll_offset, 0);
}
