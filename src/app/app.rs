use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::engine::config::Config;
use crate::engine::Calculator;
use crate::input::clipboard;
use crate::storage::PreferenceStore;
use crate::theme::{resolve_startup_theme, select_theme, ThemeId};

pub struct App {
    pub mode: AppMode,
    calculator: Calculator,
    theme: ThemeId,
    store: Box<dyn PreferenceStore>,
    scroll_offset: usize,
    status: Option<String>,
}

impl App {
    pub fn new(calculator: Calculator, theme: ThemeId, store: Box<dyn PreferenceStore>) -> Self {
        Self {
            mode: AppMode::Calculator,
            calculator,
            theme,
            store,
            scroll_offset: 0,
            status: None,
        }
    }

    /// Build an app from configuration, resolving the startup theme from
    /// the store and the terminal colour scheme.
    pub fn from_config(config: &Config, store: Box<dyn PreferenceStore>) -> Self {
        let scheme = config.theme.color_scheme.resolve();
        let theme = resolve_startup_theme(&*store, scheme, config.theme.default);
        tracing::info!(%theme, ?scheme, "starting calculator");
        let calculator = Calculator::with_display_config(config.display.clone());
        Self::new(calculator, theme, store)
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn theme(&self) -> ThemeId {
        self.theme
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn store(&self) -> &dyn PreferenceStore {
        &*self.store
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        if event != AppEvent::None {
            self.status = None;
        }

        match event {
            AppEvent::Calculator(action) => {
                self.calculator.apply(action);
                self.scroll_offset = 0;
            }
            AppEvent::SelectTheme(theme) => self.set_theme(theme),
            AppEvent::CycleTheme => self.set_theme(self.theme.next()),
            AppEvent::CopyDisplay => self.copy_display(),
            AppEvent::ScrollLeft => {
                let len = self.calculator.display_text().chars().count();
                if self.calculator.is_wide() && self.scroll_offset + 1 < len {
                    self.scroll_offset += 1;
                }
            }
            AppEvent::ScrollRight => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            AppEvent::Help => {
                self.mode = match self.mode {
                    AppMode::Help => AppMode::Calculator,
                    _ => AppMode::Help,
                };
            }
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
            }
            AppEvent::None => {}
        }
    }

    /// Apply and persist a user-selected theme. The theme changes even if
    /// saving fails.
    fn set_theme(&mut self, theme: ThemeId) {
        self.theme = theme;
        if let Err(err) = select_theme(&mut *self.store, theme) {
            tracing::warn!(%err, "failed to save theme preference");
            self.status = Some(format!("Theme not saved: {}", err));
        }
    }

    fn copy_display(&mut self) {
        let text = self.calculator.display_text();
        self.status = Some(match clipboard::copy(&text) {
            Ok(()) => format!("Copied {}", text),
            Err(err) => {
                tracing::warn!(%err, "clipboard copy failed");
                err.to_string()
            }
        });
    }

    pub fn get_render_state(&self) -> RenderState {
        let screen = self.calculator.screen();
        RenderState {
            mode: self.mode,
            display: screen.text,
            overflow: screen.overflow,
            wide: screen.wide,
            expression: self.calculator.expression(),
            theme: self.theme,
            scroll_offset: self.scroll_offset,
            status: self.status.clone(),
        }
    }
}
